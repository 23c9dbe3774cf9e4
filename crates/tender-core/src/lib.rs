//! # tender-core
//!
//! Core types, ID prefixes, and error taxonomy for the tender/bid workflow.
//!
//! This crate provides the foundational types shared across all tender crates:
//! - Entity structs for tenders, bids, and the employee/organization directory
//! - Status enums for both lifecycles
//! - ID prefix constants
//! - The classified error taxonomy consumed by the transport layer
//! - Pagination and listing filters
//! - Update builders for partial edits

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod ids;
pub mod listing;
pub mod updates;
