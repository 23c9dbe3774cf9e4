//! `tender-engine` store traits over the libSQL repos.

use async_trait::async_trait;

use tender_core::entities::{Bid, NewBid, NewTender, Tender};
use tender_core::enums::{BidDecision, BidStatus, TenderStatus};
use tender_core::identity::ActorIdentity;
use tender_core::listing::{Page, ServiceTypeFilter};
use tender_core::updates::bid::BidUpdate;
use tender_core::updates::tender::TenderUpdate;
use tender_engine::store::{AccessStore, BidAuthorship, BidStore, StoreResult, TenderStore};

use crate::TenderDb;

#[async_trait]
impl TenderStore for TenderDb {
    async fn list_published_tenders(
        &self,
        filter: &ServiceTypeFilter,
        page: Page,
    ) -> StoreResult<Vec<Tender>> {
        Ok(self.select_published_tenders(filter, page).await?)
    }

    async fn list_tenders_by_creator(&self, username: &str, page: Page) -> StoreResult<Vec<Tender>> {
        Ok(self.select_tenders_by_creator(username, page).await?)
    }

    async fn tender_status(&self, tender_id: &str) -> StoreResult<Option<TenderStatus>> {
        Ok(self.select_tender_status(tender_id).await?)
    }

    async fn tender_creator(&self, tender_id: &str) -> StoreResult<Option<String>> {
        Ok(self.select_tender_creator(tender_id).await?)
    }

    async fn tender_exists(&self, tender_id: &str) -> StoreResult<bool> {
        Ok(self.tender_exists_by_id(tender_id).await?)
    }

    async fn insert_tender(&self, tender: &NewTender) -> StoreResult<Tender> {
        Ok(self.insert_tender_returning(tender).await?)
    }

    async fn update_tender_status(
        &self,
        tender_id: &str,
        status: TenderStatus,
    ) -> StoreResult<Option<Tender>> {
        Ok(self.update_tender_status_returning(tender_id, status).await?)
    }

    async fn update_tender_fields(
        &self,
        tender_id: &str,
        update: &TenderUpdate,
    ) -> StoreResult<Option<Tender>> {
        Ok(self.update_tender_fields_returning(tender_id, update).await?)
    }
}

#[async_trait]
impl BidStore for TenderDb {
    async fn list_bids_by_author(&self, author_id: &str, page: Page) -> StoreResult<Vec<Bid>> {
        Ok(self.select_bids_by_author(author_id, page).await?)
    }

    async fn list_published_bids(&self, tender_id: &str, page: Page) -> StoreResult<Vec<Bid>> {
        Ok(self.select_published_bids(tender_id, page).await?)
    }

    async fn bid_status(&self, bid_id: &str) -> StoreResult<Option<BidStatus>> {
        Ok(self.select_bid_status(bid_id).await?)
    }

    async fn bid_authorship(&self, bid_id: &str) -> StoreResult<Option<BidAuthorship>> {
        Ok(self.select_bid_authorship(bid_id).await?)
    }

    async fn insert_bid(&self, bid: &NewBid) -> StoreResult<Bid> {
        Ok(self.insert_bid_returning(bid).await?)
    }

    async fn update_bid_status(&self, bid_id: &str, status: BidStatus) -> StoreResult<Option<Bid>> {
        Ok(self.update_bid_status_returning(bid_id, status).await?)
    }

    async fn update_bid_fields(&self, bid_id: &str, update: &BidUpdate) -> StoreResult<Option<Bid>> {
        Ok(self.update_bid_fields_returning(bid_id, update).await?)
    }

    async fn record_decision(
        &self,
        bid_id: &str,
        decision: BidDecision,
    ) -> StoreResult<Option<Bid>> {
        Ok(self.update_decision_returning(bid_id, decision).await?)
    }
}

#[async_trait]
impl AccessStore for TenderDb {
    async fn resolve_username(&self, username: &str) -> StoreResult<Option<ActorIdentity>> {
        Ok(self.select_identity_by_username(username).await?)
    }

    async fn employee_exists(&self, employee_id: &str) -> StoreResult<bool> {
        Ok(self.employee_exists_by_id(employee_id).await?)
    }

    async fn organization_exists(&self, organization_id: &str) -> StoreResult<bool> {
        Ok(self.organization_exists_by_id(organization_id).await?)
    }

    async fn is_organization_responsible(
        &self,
        username: &str,
        organization_id: &str,
    ) -> StoreResult<bool> {
        Ok(self.select_is_responsible(username, organization_id).await?)
    }

    async fn is_tender_organization_responsible(
        &self,
        username: &str,
        tender_id: &str,
    ) -> StoreResult<bool> {
        Ok(self.select_is_tender_responsible(username, tender_id).await?)
    }

    async fn is_bid_organization_responsible(
        &self,
        username: &str,
        bid_id: &str,
    ) -> StoreResult<bool> {
        Ok(self.select_is_bid_responsible(username, bid_id).await?)
    }
}
