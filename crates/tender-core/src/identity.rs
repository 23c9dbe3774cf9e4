use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable actor identity resolved from a username.
///
/// Produced by the identity resolver; carries nothing beyond what the
/// authorization predicates need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActorIdentity {
    /// Employee id (`emp-…`).
    pub id: String,
    /// Username the identity was resolved from.
    pub username: String,
}
