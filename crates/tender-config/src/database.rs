//! libSQL connection settings.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "tender.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file. `":memory:"` keeps everything in process.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote libSQL server URL (e.g., `libsql://procurement.example.io`).
    /// When set, `path` is ignored.
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote server is configured.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        !self.url.is_empty()
    }
}
