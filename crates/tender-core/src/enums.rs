//! Status enums, service types, author types, and decisions.
//!
//! All enums serialize as `PascalCase` strings (`"Published"`, `"Construction"`),
//! which is also the form stored in SQL. Status enums expose
//! `allowed_next_states()` describing the nominal lifecycle; the managers
//! consult it for diagnostics only and never reject a status edit with it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TenderStatus
// ---------------------------------------------------------------------------

/// Status of a tender.
///
/// ```text
/// Created → Published → Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TenderStatus {
    Created,
    Published,
    Closed,
}

impl TenderStatus {
    /// Nominal next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Created => &[Self::Published],
            Self::Published => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    /// Whether `next` follows the nominal lifecycle.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// A change to `next` that skips or reverses the nominal lifecycle.
    #[must_use]
    pub fn departs_from_lifecycle(self, next: Self) -> bool {
        self != next && !self.can_transition_to(next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Published => "Published",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TenderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BidStatus
// ---------------------------------------------------------------------------

/// Status of a bid.
///
/// ```text
/// Created → Published → Closed
///        (any) ──decision──→ Closed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum BidStatus {
    Created,
    Published,
    Closed,
}

impl BidStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Created => &[Self::Published],
            Self::Published => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// A change to `next` that skips or reverses the nominal lifecycle.
    #[must_use]
    pub fn departs_from_lifecycle(self, next: Self) -> bool {
        self != next && !self.can_transition_to(next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Published => "Published",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ServiceType
// ---------------------------------------------------------------------------

/// Kind of service a tender procures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum ServiceType {
    Construction,
    Delivery,
    Manufacture,
}

impl ServiceType {
    /// Every service type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Construction, Self::Delivery, Self::Manufacture];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Construction => "Construction",
            Self::Delivery => "Delivery",
            Self::Manufacture => "Manufacture",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuthorType
// ---------------------------------------------------------------------------

/// Whether a bid was submitted on behalf of an organization or an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AuthorType {
    Organization,
    User,
}

impl AuthorType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::User => "User",
        }
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BidDecision
// ---------------------------------------------------------------------------

/// Terminal verdict recorded on a bid by the tender's organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum BidDecision {
    Approved,
    Rejected,
}

impl BidDecision {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for BidDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
