//! Tender lifecycle operations.

use std::sync::Arc;

use tender_core::entities::{NewTender, Tender};
use tender_core::enums::TenderStatus;
use tender_core::errors::CoreError;
use tender_core::listing::{Page, ServiceTypeFilter};
use tender_core::updates::tender::TenderUpdate;

use crate::identity::IdentityResolver;
use crate::policy::AuthorizationPolicy;
use crate::store::ProcurementStore;

pub struct TenderManager<S: ?Sized> {
    store: Arc<S>,
}

impl<S: ?Sized> Clone for TenderManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ProcurementStore + ?Sized> TenderManager<S> {
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

    /// Published tenders, name ascending. No authorization.
    pub async fn list_tenders(
        &self,
        page: Page,
        filter: &ServiceTypeFilter,
    ) -> Result<Vec<Tender>, CoreError> {
        tracing::debug!(?filter, limit = page.limit, offset = page.offset, "list tenders");
        Ok(self.store.list_published_tenders(filter, page).await?)
    }

    /// Create a tender on behalf of a responsible member of its organization.
    pub async fn create_tender(&self, tender: NewTender) -> Result<Tender, CoreError> {
        self.identities().resolve(&tender.creator_username).await?;
        self.policy()
            .require_organization_responsible(&tender.creator_username, &tender.organization_id)
            .await?;
        let created = self.store.insert_tender(&tender).await?;
        tracing::debug!(tender_id = %created.id, organization_id = %created.organization_id, "tender created");
        Ok(created)
    }

    /// Tenders created by `username`, any status.
    pub async fn list_user_tenders(
        &self,
        page: Page,
        username: &str,
    ) -> Result<Vec<Tender>, CoreError> {
        self.identities().resolve(username).await?;
        Ok(self.store.list_tenders_by_creator(username, page).await?)
    }

    pub async fn tender_status(
        &self,
        tender_id: &str,
        username: &str,
    ) -> Result<TenderStatus, CoreError> {
        let actor = self.identities().resolve(username).await?;
        self.policy().require_tender_creator(&actor, tender_id).await?;
        self.store
            .tender_status(tender_id)
            .await?
            .ok_or_else(|| not_found(tender_id))
    }

    /// Set the status directly. Moves outside the forward lifecycle are
    /// logged, not rejected.
    pub async fn edit_tender_status(
        &self,
        tender_id: &str,
        username: &str,
        status: TenderStatus,
    ) -> Result<Tender, CoreError> {
        let actor = self.identities().resolve(username).await?;
        self.policy().require_tender_creator(&actor, tender_id).await?;
        // Read ahead of the update; a concurrent edit can change it first.
        let observed = self.store.tender_status(tender_id).await?;
        if observed.is_some_and(|c| c.departs_from_lifecycle(status)) {
            tracing::warn!(
                tender_id,
                ?observed,
                to = %status,
                "tender status moved outside lifecycle (observed status is advisory)"
            );
        }
        let updated = self
            .store
            .update_tender_status(tender_id, status)
            .await?
            .ok_or_else(|| not_found(tender_id))?;
        tracing::debug!(tender_id, status = %updated.status, version = updated.version, "tender status edited");
        Ok(updated)
    }

    /// Apply the provided fields. An empty update still bumps the version.
    pub async fn edit_tender(
        &self,
        tender_id: &str,
        username: &str,
        update: TenderUpdate,
    ) -> Result<Tender, CoreError> {
        let actor = self.identities().resolve(username).await?;
        self.policy().require_tender_creator(&actor, tender_id).await?;
        if update.is_empty() {
            tracing::debug!(tender_id, "empty tender edit, bumping version only");
        }
        let updated = self
            .store
            .update_tender_fields(tender_id, &update)
            .await?
            .ok_or_else(|| not_found(tender_id))?;
        tracing::debug!(tender_id, version = updated.version, "tender edited");
        Ok(updated)
    }
}

fn not_found(tender_id: &str) -> CoreError {
    CoreError::TenderNotFound {
        id: tender_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use tender_core::enums::ServiceType;
    use tender_core::errors::{Denial, ErrorKind};
    use tender_core::updates::tender::TenderUpdateBuilder;

    use super::*;
    use crate::memory::MemoryStore;
    use crate::test_support::fixtures::{Seeded, seeded_store};

    fn draft(fx: &Seeded, name: &str, creator: &str) -> NewTender {
        NewTender {
            name: name.into(),
            description: format!("{name} description"),
            service_type: ServiceType::Construction,
            organization_id: fx.org_id.clone(),
            creator_username: creator.into(),
        }
    }

    fn manager(fx: &Seeded) -> TenderManager<MemoryStore> {
        TenderManager::new(Arc::clone(&fx.store))
    }

    #[tokio::test]
    async fn create_starts_at_created_v1() {
        let fx = seeded_store();
        let tender = manager(&fx)
            .create_tender(draft(&fx, "Bridge", "alice"))
            .await
            .unwrap();
        assert_eq!(tender.status, TenderStatus::Created);
        assert_eq!(tender.version, 1);
        assert_eq!(tender.creator_username, "alice");
        assert_eq!(tender.created_at, tender.updated_at);
    }

    #[rstest]
    #[case::not_responsible("bob", ErrorKind::Forbidden)]
    #[case::unknown_user("mallory", ErrorKind::UserNotFound)]
    #[tokio::test]
    async fn create_requires_responsible_member(#[case] creator: &str, #[case] kind: ErrorKind) {
        let fx = seeded_store();
        let err = manager(&fx)
            .create_tender(draft(&fx, "Bridge", creator))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), kind);
    }

    #[tokio::test]
    async fn store_fault_surfaces_as_internal() {
        let fx = seeded_store();
        fx.store.inject_fault(true);
        let err = manager(&fx)
            .create_tender(draft(&fx, "Bridge", "alice"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);

        let err = AuthorizationPolicy::new(&*fx.store)
            .require_organization_responsible("alice", &fx.org_id)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
    }

    #[tokio::test]
    async fn status_of_foreign_tender_is_forbidden() {
        let fx = seeded_store();
        let tenders = manager(&fx);
        let tender = tenders
            .create_tender(draft(&fx, "Bridge", "alice"))
            .await
            .unwrap();

        let err = tenders.tender_status(&tender.id, "bob").await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Forbidden {
                denial: Denial::NotTenderCreator { .. },
                ..
            }
        ));
        assert_eq!(
            tenders.tender_status(&tender.id, "alice").await.unwrap(),
            TenderStatus::Created
        );
    }

    #[tokio::test]
    async fn unknown_tender_is_not_found() {
        let fx = seeded_store();
        let err = manager(&fx)
            .edit_tender_status("tnd-deadbeef", "alice", TenderStatus::Published)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TenderNotFound);
    }

    #[tokio::test]
    async fn edit_applies_only_provided_fields() {
        let fx = seeded_store();
        let tenders = manager(&fx);
        let tender = tenders
            .create_tender(draft(&fx, "Bridge", "alice"))
            .await
            .unwrap();
        let update = TenderUpdateBuilder::new()
            .service_type(ServiceType::Delivery)
            .build();

        let edited = tenders.edit_tender(&tender.id, "alice", update).await.unwrap();
        assert_eq!(edited.name, "Bridge");
        assert_eq!(edited.description, tender.description);
        assert_eq!(edited.service_type, ServiceType::Delivery);
        assert_eq!(edited.version, 2);
        assert!(edited.updated_at >= tender.updated_at);
    }

    #[tokio::test]
    async fn empty_edit_bumps_version_only() {
        let fx = seeded_store();
        let tenders = manager(&fx);
        let tender = tenders
            .create_tender(draft(&fx, "Bridge", "alice"))
            .await
            .unwrap();
        let edited = tenders
            .edit_tender(&tender.id, "alice", TenderUpdateBuilder::new().build())
            .await
            .unwrap();
        assert_eq!(edited.name, "Bridge");
        assert_eq!(edited.description, tender.description);
        assert_eq!(edited.version, 2);
    }

    #[tokio::test]
    async fn backwards_status_edit_is_allowed() {
        let fx = seeded_store();
        let tenders = manager(&fx);
        let tender = tenders
            .create_tender(draft(&fx, "Bridge", "alice"))
            .await
            .unwrap();
        tenders
            .edit_tender_status(&tender.id, "alice", TenderStatus::Closed)
            .await
            .unwrap();
        let reopened = tenders
            .edit_tender_status(&tender.id, "alice", TenderStatus::Created)
            .await
            .unwrap();
        assert_eq!(reopened.status, TenderStatus::Created);
        assert_eq!(reopened.version, 3);
    }

    #[tokio::test]
    async fn listing_hides_unpublished_tenders() {
        let fx = seeded_store();
        let tenders = manager(&fx);
        for name in ["Alpha", "Bravo", "Charlie"] {
            tenders
                .create_tender(draft(&fx, name, "alice"))
                .await
                .unwrap();
        }
        let user_tenders = tenders
            .list_user_tenders(Page::default(), "alice")
            .await
            .unwrap();
        for name in ["Bravo", "Charlie"] {
            let tender = user_tenders.iter().find(|t| t.name == name).unwrap();
            tenders
                .edit_tender_status(&tender.id, "alice", TenderStatus::Published)
                .await
                .unwrap();
        }
        let charlie = user_tenders.iter().find(|t| t.name == "Charlie").unwrap();
        tenders
            .edit_tender_status(&charlie.id, "alice", TenderStatus::Closed)
            .await
            .unwrap();

        let listed = tenders
            .list_tenders(Page::default(), &ServiceTypeFilter::Any)
            .await
            .unwrap();
        let names: Vec<_> = listed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Bravo"]);
        assert!(listed.iter().all(|t| t.status == TenderStatus::Published));

        let user_names: Vec<_> = user_tenders.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(user_names, vec!["Alpha", "Bravo", "Charlie"]);
    }
}
