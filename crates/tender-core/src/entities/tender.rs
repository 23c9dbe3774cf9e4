use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ServiceType, TenderStatus};

/// A published request for services, owned by an organization.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: String,
    pub name: String,
    pub description: String,
    pub service_type: ServiceType,
    pub status: TenderStatus,
    /// Starts at 1; incremented by every edit and status change.
    pub version: i64,
    pub organization_id: String,
    pub creator_username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a tender.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewTender {
    pub name: String,
    pub description: String,
    pub service_type: ServiceType,
    pub organization_id: String,
    pub creator_username: String,
}
