//! ID prefix constants.
//!
//! Every persisted entity gets a short prefixed id such as `tnd-a3f8b2c1`.
//! The random part is produced by the store; only the prefixes live here.

pub const PREFIX_TENDER: &str = "tnd";
pub const PREFIX_BID: &str = "bid";
pub const PREFIX_EMPLOYEE: &str = "emp";
pub const PREFIX_ORGANIZATION: &str = "org";
pub const PREFIX_RESPONSIBLE: &str = "ors";

/// All prefixes, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_TENDER,
    PREFIX_BID,
    PREFIX_EMPLOYEE,
    PREFIX_ORGANIZATION,
    PREFIX_RESPONSIBLE,
];

/// Format an id from a prefix and a numeric sequence (`"bid-0000002a"`).
///
/// Stores that cannot generate randomness in SQL use this for deterministic ids.
#[must_use]
pub fn format_id(prefix: &str, seq: u32) -> String {
    format!("{prefix}-{seq:08x}")
}
