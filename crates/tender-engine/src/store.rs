//! Persistence capabilities consumed by the managers.
//!
//! Stores report absence through `Option`/`bool` and reserve `Err` for
//! faults. Every `update_*`/`record_*` method must be a single atomic
//! read-modify-write that bumps `version` by one and returns the new row, so
//! concurrent writers can never observe or produce the same version.

use async_trait::async_trait;

use tender_core::entities::{Bid, NewBid, NewTender, Tender};
use tender_core::enums::{AuthorType, BidDecision, BidStatus, TenderStatus};
use tender_core::errors::StoreError;
use tender_core::identity::ActorIdentity;
use tender_core::listing::{Page, ServiceTypeFilter};
use tender_core::updates::bid::BidUpdate;
use tender_core::updates::tender::TenderUpdate;

pub type StoreResult<T> = Result<T, StoreError>;

/// Who wrote a bid, as recorded at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidAuthorship {
    pub author_type: AuthorType,
    pub author_id: String,
}

#[async_trait]
pub trait TenderStore: Send + Sync {
    /// Published tenders matching `filter`, ordered by name.
    async fn list_published_tenders(
        &self,
        filter: &ServiceTypeFilter,
        page: Page,
    ) -> StoreResult<Vec<Tender>>;

    /// Tenders created by `username` in any status, ordered by name.
    async fn list_tenders_by_creator(&self, username: &str, page: Page) -> StoreResult<Vec<Tender>>;

    async fn tender_status(&self, tender_id: &str) -> StoreResult<Option<TenderStatus>>;

    /// Username recorded as the tender's creator.
    async fn tender_creator(&self, tender_id: &str) -> StoreResult<Option<String>>;

    async fn tender_exists(&self, tender_id: &str) -> StoreResult<bool>;

    /// Insert with status `Created` and version 1.
    async fn insert_tender(&self, tender: &NewTender) -> StoreResult<Tender>;

    async fn update_tender_status(
        &self,
        tender_id: &str,
        status: TenderStatus,
    ) -> StoreResult<Option<Tender>>;

    async fn update_tender_fields(
        &self,
        tender_id: &str,
        update: &TenderUpdate,
    ) -> StoreResult<Option<Tender>>;
}

#[async_trait]
pub trait BidStore: Send + Sync {
    /// Bids whose `author_id` is `author_id`, ordered by name.
    async fn list_bids_by_author(&self, author_id: &str, page: Page) -> StoreResult<Vec<Bid>>;

    /// Published bids for one tender, ordered by name.
    async fn list_published_bids(&self, tender_id: &str, page: Page) -> StoreResult<Vec<Bid>>;

    async fn bid_status(&self, bid_id: &str) -> StoreResult<Option<BidStatus>>;

    async fn bid_authorship(&self, bid_id: &str) -> StoreResult<Option<BidAuthorship>>;

    /// Insert with status `Created` and version 1. Callers check the tender first.
    async fn insert_bid(&self, bid: &NewBid) -> StoreResult<Bid>;

    async fn update_bid_status(&self, bid_id: &str, status: BidStatus) -> StoreResult<Option<Bid>>;

    async fn update_bid_fields(&self, bid_id: &str, update: &BidUpdate) -> StoreResult<Option<Bid>>;

    /// Set the decision and force status `Closed` in one write.
    async fn record_decision(
        &self,
        bid_id: &str,
        decision: BidDecision,
    ) -> StoreResult<Option<Bid>>;
}

/// Identity and organization-responsibility relations.
#[async_trait]
pub trait AccessStore: Send + Sync {
    async fn resolve_username(&self, username: &str) -> StoreResult<Option<ActorIdentity>>;

    async fn employee_exists(&self, employee_id: &str) -> StoreResult<bool>;

    async fn organization_exists(&self, organization_id: &str) -> StoreResult<bool>;

    async fn is_organization_responsible(
        &self,
        username: &str,
        organization_id: &str,
    ) -> StoreResult<bool>;

    /// Responsible for the organization that owns `tender_id`.
    async fn is_tender_organization_responsible(
        &self,
        username: &str,
        tender_id: &str,
    ) -> StoreResult<bool>;

    /// Responsible for the organization owning the tender that `bid_id` targets.
    async fn is_bid_organization_responsible(
        &self,
        username: &str,
        bid_id: &str,
    ) -> StoreResult<bool>;
}

/// Everything a manager needs from persistence.
pub trait ProcurementStore: TenderStore + BidStore + AccessStore {}

impl<T> ProcurementStore for T where T: TenderStore + BidStore + AccessStore {}
