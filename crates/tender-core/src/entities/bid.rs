use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuthorType, BidDecision, BidStatus};

/// An offer submitted against a tender by a user or an organization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: BidStatus,
    pub tender_id: String,
    pub author_type: AuthorType,
    /// Employee id for `User` authors, organization id for `Organization` authors.
    pub author_id: String,
    pub version: i64,
    /// Set only by decision submission.
    pub decision: Option<BidDecision>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a bid.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBid {
    pub name: String,
    pub description: String,
    pub tender_id: String,
    pub author_type: AuthorType,
    pub author_id: String,
}
