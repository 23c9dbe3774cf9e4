//! Identity resolution and organization-responsibility relations.

use tender_core::identity::ActorIdentity;

use crate::TenderDb;
use crate::error::DatabaseError;
use crate::helpers::first_bool;

impl TenderDb {
    pub async fn select_identity_by_username(
        &self,
        username: &str,
    ) -> Result<Option<ActorIdentity>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT id, username FROM employees WHERE username = ?1",
                [username],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(ActorIdentity {
                id: row.get::<String>(0)?,
                username: row.get::<String>(1)?,
            })),
            None => Ok(None),
        }
    }

    pub async fn employee_exists_by_id(&self, employee_id: &str) -> Result<bool, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ?1)",
                [employee_id],
            )
            .await?;
        first_bool(rows).await
    }

    pub async fn organization_exists_by_id(
        &self,
        organization_id: &str,
    ) -> Result<bool, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT EXISTS(SELECT 1 FROM organizations WHERE id = ?1)",
                [organization_id],
            )
            .await?;
        first_bool(rows).await
    }

    pub async fn select_is_responsible(
        &self,
        username: &str,
        organization_id: &str,
    ) -> Result<bool, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT EXISTS(
                     SELECT 1 FROM organization_responsibles r
                     JOIN employees e ON e.id = r.user_id
                     WHERE e.username = ?1 AND r.organization_id = ?2)",
                [username, organization_id],
            )
            .await?;
        first_bool(rows).await
    }

    pub async fn select_is_tender_responsible(
        &self,
        username: &str,
        tender_id: &str,
    ) -> Result<bool, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT EXISTS(
                     SELECT 1 FROM tenders t
                     JOIN organization_responsibles r ON r.organization_id = t.organization_id
                     JOIN employees e ON e.id = r.user_id
                     WHERE t.id = ?2 AND e.username = ?1)",
                [username, tender_id],
            )
            .await?;
        first_bool(rows).await
    }

    /// bid → tender → organization → responsible member.
    pub async fn select_is_bid_responsible(
        &self,
        username: &str,
        bid_id: &str,
    ) -> Result<bool, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT EXISTS(
                     SELECT 1 FROM bids b
                     JOIN tenders t ON t.id = b.tender_id
                     JOIN organization_responsibles r ON r.organization_id = t.organization_id
                     JOIN employees e ON e.id = r.user_id
                     WHERE b.id = ?2 AND e.username = ?1)",
                [username, bid_id],
            )
            .await?;
        first_bool(rows).await
    }
}
