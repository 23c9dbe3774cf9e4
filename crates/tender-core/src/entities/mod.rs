//! Entity structs for tenders, bids, and the employee/organization directory.
//!
//! All structs serialize camelCase and derive `JsonSchema` so the wire shape
//! can be exported and validated.

mod bid;
mod directory;
mod tender;

pub use bid::{Bid, NewBid};
pub use directory::{Employee, Organization, OrganizationResponsible};
pub use tender::{NewTender, Tender};
