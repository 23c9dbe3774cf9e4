//! Tender update builder.

use serde::{Deserialize, Serialize};

use crate::enums::ServiceType;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<ServiceType>,
}

impl TenderUpdate {
    /// True when no field would be written.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.service_type.is_none()
    }
}

#[derive(Default)]
pub struct TenderUpdateBuilder(TenderUpdate);

impl TenderUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TenderUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn service_type(mut self, service_type: ServiceType) -> Self {
        self.0.service_type = Some(service_type);
        self
    }

    #[must_use]
    pub fn build(self) -> TenderUpdate {
        self.0
    }
}
