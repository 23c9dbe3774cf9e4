//! # tender-engine
//!
//! The tender/bid lifecycle and authorization engine.
//!
//! [`TenderManager`] and [`BidManager`] implement every workflow operation.
//! Each one resolves the acting identity through [`IdentityResolver`],
//! evaluates a predicate from [`AuthorizationPolicy`], then performs exactly
//! one store call. Managers only know the [`ProcurementStore`] capability
//! traits; [`MemoryStore`] is the in-process implementation used by tests and
//! `tender-db` provides the libSQL one.

pub mod bids;
pub mod identity;
pub mod memory;
pub mod policy;
pub mod store;
pub mod tenders;

#[cfg(test)]
pub(crate) mod test_support;

pub use bids::BidManager;
pub use identity::IdentityResolver;
pub use memory::MemoryStore;
pub use policy::AuthorizationPolicy;
pub use store::{AccessStore, BidStore, ProcurementStore, StoreResult, TenderStore};
pub use tenders::TenderManager;
