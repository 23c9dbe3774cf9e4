//! Error taxonomy for the tender/bid workflow.
//!
//! Every engine operation returns exactly one [`CoreError`]. The transport
//! layer never inspects variants directly; it asks for [`CoreError::kind`] and
//! maps the [`ErrorKind`] to a wire status. Variants stay finer-grained than
//! kinds so that "who is this user" failures and "may this user do that"
//! failures remain distinct causes even when they share a kind.

use std::fmt;

use thiserror::Error;

/// User-visible failure classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,
    Forbidden,
    UserNotFound,
    TenderNotFound,
    BidNotFound,
    Internal,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Forbidden => "forbidden",
            Self::UserNotFound => "user_not_found",
            Self::TenderNotFound => "tender_not_found",
            Self::BidNotFound => "bid_not_found",
            Self::Internal => "internal",
        }
    }

    /// HTTP status the transport answers with for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::UserNotFound => 401,
            Self::Forbidden => 403,
            Self::TenderNotFound | Self::BidNotFound => 404,
            Self::Internal => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which authorization predicate rejected the actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// Not a responsible member of the organization named in the request.
    NotOrganizationResponsible { organization_id: String },
    /// Not the recorded creator of the tender.
    NotTenderCreator { tender_id: String },
    /// Not the recorded author of the bid.
    NotBidAuthor { bid_id: String },
    /// Not a responsible member of the organization that owns the tender.
    NotTenderOrganizationResponsible { tender_id: String },
    /// Not a responsible member of the organization that owns the bid's tender.
    NotBidOrganizationResponsible { bid_id: String },
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotOrganizationResponsible { organization_id } => {
                write!(f, "not responsible for organization {organization_id}")
            }
            Self::NotTenderCreator { tender_id } => {
                write!(f, "not the creator of tender {tender_id}")
            }
            Self::NotBidAuthor { bid_id } => write!(f, "not the author of bid {bid_id}"),
            Self::NotTenderOrganizationResponsible { tender_id } => {
                write!(f, "not responsible for the organization owning tender {tender_id}")
            }
            Self::NotBidOrganizationResponsible { bid_id } => {
                write!(f, "not responsible for the organization deciding bid {bid_id}")
            }
        }
    }
}

/// Failures reported by a persistence backend.
///
/// Absence is never an error at this level: stores return `Option`/`bool` and
/// the engine decides which not-found kind applies.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A query could not be executed or its result could not be decoded.
    #[error("Query failed: {0}")]
    Query(String),

    /// A write was rejected by a storage constraint.
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Catch-all for backend-specific failures.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Classified failure returned by every engine operation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed input, or a constraint the caller could have avoided.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The acting username does not resolve to any employee.
    #[error("User not found: {username}")]
    UnknownUser { username: String },

    /// A bid names an individual author that does not exist.
    #[error("Bid author not found: {author_id}")]
    UnknownAuthor { author_id: String },

    /// The actor exists but lacks the relation the policy requires.
    #[error("Access denied for {username}: {denial}")]
    Forbidden { username: String, denial: Denial },

    #[error("Tender not found: {id}")]
    TenderNotFound { id: String },

    #[error("Bid not found: {id}")]
    BidNotFound { id: String },

    /// The store failed; surfaced immediately, never retried.
    #[error("Storage failure: {0}")]
    Storage(#[from] StoreError),
}

impl CoreError {
    /// Classify this failure for the transport layer.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::UnknownUser { .. } | Self::UnknownAuthor { .. } => ErrorKind::UserNotFound,
            Self::Forbidden { .. } => ErrorKind::Forbidden,
            Self::TenderNotFound { .. } => ErrorKind::TenderNotFound,
            Self::BidNotFound { .. } => ErrorKind::BidNotFound,
            Self::Storage(_) => ErrorKind::Internal,
        }
    }

    pub(crate) fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}
