//! General application configuration.

use serde::{Deserialize, Serialize};
use tender_core::listing::DEFAULT_LIMIT;

/// Default page size for list commands.
const fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size used when a list command gets no `--limit`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Tracing filter used when neither `TENDER_LOG` nor a verbosity flag is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            log_level: default_log_level(),
        }
    }
}
