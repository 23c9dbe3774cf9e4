//! Bid lifecycle operations.
//!
//! Reads and edits are gated on the bid's individual author. Decisions are
//! gated on responsibility for the organization that owns the bid's tender.

use std::sync::Arc;

use tender_core::entities::{Bid, NewBid};
use tender_core::enums::{AuthorType, BidDecision, BidStatus};
use tender_core::errors::CoreError;
use tender_core::listing::Page;
use tender_core::updates::bid::BidUpdate;

use crate::identity::IdentityResolver;
use crate::policy::AuthorizationPolicy;
use crate::store::ProcurementStore;

pub struct BidManager<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for BidManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ProcurementStore + ?Sized> BidManager<S> {
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn identities(&self) -> IdentityResolver<'_, S> {
        IdentityResolver::new(&*self.store)
    }

    fn policy(&self) -> AuthorizationPolicy<'_, S> {
        AuthorizationPolicy::new(&*self.store)
    }

    /// Submit a bid against an existing tender.
    ///
    /// # Errors
    ///
    /// `TenderNotFound` for an unknown tender, `UnknownAuthor` for an unknown
    /// user author, `BadRequest` for an unknown organization author.
    pub async fn create_bid(&self, bid: NewBid) -> Result<Bid, CoreError> {
        if !self.store.tender_exists(&bid.tender_id).await? {
            return Err(CoreError::TenderNotFound { id: bid.tender_id });
        }
        match bid.author_type {
            AuthorType::User => {
                if !self.store.employee_exists(&bid.author_id).await? {
                    return Err(CoreError::UnknownAuthor {
                        author_id: bid.author_id,
                    });
                }
            }
            AuthorType::Organization => {
                if !self.store.organization_exists(&bid.author_id).await? {
                    return Err(CoreError::BadRequest(format!(
                        "organization {} does not exist",
                        bid.author_id
                    )));
                }
            }
        }
        let created = self.store.insert_bid(&bid).await?;
        tracing::debug!(bid_id = %created.id, tender_id = %created.tender_id, "bid created");
        Ok(created)
    }

    /// Bids authored by the identity behind `username`.
    pub async fn list_user_bids(&self, page: Page, username: &str) -> Result<Vec<Bid>, CoreError> {
        let actor = self.identities().resolve(username).await?;
        Ok(self.store.list_bids_by_author(&actor.id, page).await?)
    }

    /// Published bids on a tender, for members responsible for its organization.
    pub async fn list_tender_bids(
        &self,
        page: Page,
        tender_id: &str,
        username: &str,
    ) -> Result<Vec<Bid>, CoreError> {
        self.identities().resolve(username).await?;
        // Existence before membership: an unknown tender is TenderNotFound for every caller.
        if !self.store.tender_exists(tender_id).await? {
            return Err(CoreError::TenderNotFound {
                id: tender_id.to_string(),
            });
        }
        self.policy()
            .require_tender_organization_responsible(username, tender_id)
            .await?;
        Ok(self.store.list_published_bids(tender_id, page).await?)
    }

    pub async fn bid_status(&self, bid_id: &str, username: &str) -> Result<BidStatus, CoreError> {
        let actor = self.identities().resolve(username).await?;
        self.policy().require_bid_author(&actor, bid_id).await?;
        self.store
            .bid_status(bid_id)
            .await?
            .ok_or_else(|| not_found(bid_id))
    }

    pub async fn edit_bid_status(
        &self,
        bid_id: &str,
        username: &str,
        status: BidStatus,
    ) -> Result<Bid, CoreError> {
        let actor = self.identities().resolve(username).await?;
        self.policy().require_bid_author(&actor, bid_id).await?;
        // Read ahead of the update; a concurrent edit can change it first.
        let observed = self.store.bid_status(bid_id).await?;
        if observed.is_some_and(|c| c.departs_from_lifecycle(status)) {
            tracing::warn!(
                bid_id,
                ?observed,
                to = %status,
                "bid status moved outside lifecycle (observed status is advisory)"
            );
        }
        let updated = self
            .store
            .update_bid_status(bid_id, status)
            .await?
            .ok_or_else(|| not_found(bid_id))?;
        tracing::debug!(bid_id, status = %updated.status, version = updated.version, "bid status edited");
        Ok(updated)
    }

    pub async fn edit_bid(
        &self,
        bid_id: &str,
        username: &str,
        update: BidUpdate,
    ) -> Result<Bid, CoreError> {
        let actor = self.identities().resolve(username).await?;
        self.policy().require_bid_author(&actor, bid_id).await?;
        if update.is_empty() {
            tracing::debug!(bid_id, "empty bid edit, bumping version only");
        }
        let updated = self
            .store
            .update_bid_fields(bid_id, &update)
            .await?
            .ok_or_else(|| not_found(bid_id))?;
        tracing::debug!(bid_id, version = updated.version, "bid edited");
        Ok(updated)
    }

    /// Record the terminal decision and close the bid.
    pub async fn submit_decision(
        &self,
        bid_id: &str,
        username: &str,
        decision: BidDecision,
    ) -> Result<Bid, CoreError> {
        self.identities().resolve(username).await?;
        // Existence before membership: an unknown bid is BidNotFound for every caller.
        if self.store.bid_status(bid_id).await?.is_none() {
            return Err(not_found(bid_id));
        }
        self.policy()
            .require_bid_organization_responsible(username, bid_id)
            .await?;
        let decided = self
            .store
            .record_decision(bid_id, decision)
            .await?
            .ok_or_else(|| not_found(bid_id))?;
        tracing::debug!(bid_id, %decision, version = decided.version, "decision recorded");
        Ok(decided)
    }
}

fn not_found(bid_id: &str) -> CoreError {
    CoreError::BidNotFound {
        id: bid_id.to_string(),
    }
}
