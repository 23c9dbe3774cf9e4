//! Authorization predicates shared by both managers.
//!
//! Two families that must never be merged:
//! - ownership by identity: tender creator, bid author
//! - responsibility by organization: direct, via a tender, via a bid's tender

use tender_core::enums::AuthorType;
use tender_core::errors::{CoreError, Denial};
use tender_core::identity::ActorIdentity;

use crate::store::{AccessStore, BidAuthorship, BidStore, TenderStore};

/// Whether `actor` is the recorded creator of a tender.
#[must_use]
pub fn is_tender_creator(actor: &ActorIdentity, creator_username: &str) -> bool {
    actor.username == creator_username
}

/// Whether `actor` personally authored a bid. Organization-authored bids
/// have no individual author.
#[must_use]
pub fn is_bid_author(actor: &ActorIdentity, authorship: &BidAuthorship) -> bool {
    authorship.author_type == AuthorType::User && authorship.author_id == actor.id
}

pub struct AuthorizationPolicy<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S> AuthorizationPolicy<'a, S>
where
    S: TenderStore + BidStore + AccessStore + ?Sized,
{
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Require `username` to be responsible for `organization_id`.
    ///
    /// A fault while evaluating membership means the request could not be
    /// checked at all and is reported as `BadRequest`.
    pub async fn require_organization_responsible(
        &self,
        username: &str,
        organization_id: &str,
    ) -> Result<(), CoreError> {
        let responsible = self
            .store
            .is_organization_responsible(username, organization_id)
            .await
            .map_err(|e| {
                CoreError::BadRequest(format!("cannot evaluate organization membership: {e}"))
            })?;
        if responsible {
            return Ok(());
        }
        Err(deny(
            username,
            Denial::NotOrganizationResponsible {
                organization_id: organization_id.to_string(),
            },
        ))
    }

    /// Require `actor` to be the tender's creator of record.
    pub async fn require_tender_creator(
        &self,
        actor: &ActorIdentity,
        tender_id: &str,
    ) -> Result<(), CoreError> {
        let creator = self
            .store
            .tender_creator(tender_id)
            .await?
            .ok_or_else(|| CoreError::TenderNotFound {
                id: tender_id.to_string(),
            })?;
        if is_tender_creator(actor, &creator) {
            return Ok(());
        }
        Err(deny(
            &actor.username,
            Denial::NotTenderCreator {
                tender_id: tender_id.to_string(),
            },
        ))
    }

    /// Require `actor` to be the bid's individual author.
    pub async fn require_bid_author(
        &self,
        actor: &ActorIdentity,
        bid_id: &str,
    ) -> Result<(), CoreError> {
        let authorship = self
            .store
            .bid_authorship(bid_id)
            .await?
            .ok_or_else(|| CoreError::BidNotFound {
                id: bid_id.to_string(),
            })?;
        if is_bid_author(actor, &authorship) {
            return Ok(());
        }
        Err(deny(
            &actor.username,
            Denial::NotBidAuthor {
                bid_id: bid_id.to_string(),
            },
        ))
    }

    /// Require `username` to be responsible for the organization owning `tender_id`.
    pub async fn require_tender_organization_responsible(
        &self,
        username: &str,
        tender_id: &str,
    ) -> Result<(), CoreError> {
        if self
            .store
            .is_tender_organization_responsible(username, tender_id)
            .await?
        {
            return Ok(());
        }
        Err(deny(
            username,
            Denial::NotTenderOrganizationResponsible {
                tender_id: tender_id.to_string(),
            },
        ))
    }

    /// Require `username` to be responsible for the organization that owns
    /// the tender `bid_id` was submitted to.
    pub async fn require_bid_organization_responsible(
        &self,
        username: &str,
        bid_id: &str,
    ) -> Result<(), CoreError> {
        if self
            .store
            .is_bid_organization_responsible(username, bid_id)
            .await?
        {
            return Ok(());
        }
        Err(deny(
            username,
            Denial::NotBidOrganizationResponsible {
                bid_id: bid_id.to_string(),
            },
        ))
    }
}

fn deny(username: &str, denial: Denial) -> CoreError {
    tracing::warn!(username, %denial, "authorization denied");
    CoreError::Forbidden {
        username: username.to_string(),
        denial,
    }
}
