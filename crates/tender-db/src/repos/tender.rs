//! Tender repository.

use chrono::Utc;

use tender_core::entities::{NewTender, Tender};
use tender_core::enums::TenderStatus;
use tender_core::ids::PREFIX_TENDER;
use tender_core::listing::{Page, ServiceTypeFilter};
use tender_core::updates::tender::TenderUpdate;

use crate::TenderDb;
use crate::error::DatabaseError;
use crate::helpers::{first_bool, parse_datetime, parse_enum, sql_int};
use crate::repos::{collect, first};

const TENDER_COLS: &str = "id, name, description, service_type, status, version, \
                           organization_id, creator_username, created_at, updated_at";

fn row_to_tender(row: &libsql::Row) -> Result<Tender, DatabaseError> {
    Ok(Tender {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        service_type: parse_enum(&row.get::<String>(3)?)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        version: row.get::<i64>(5)?,
        organization_id: row.get::<String>(6)?,
        creator_username: row.get::<String>(7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

impl TenderDb {
    pub async fn select_published_tenders(
        &self,
        filter: &ServiceTypeFilter,
        page: Page,
    ) -> Result<Vec<Tender>, DatabaseError> {
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut type_clause = String::new();
        if let ServiceTypeFilter::Only(types) = filter {
            let placeholders: Vec<String> = (1..=types.len()).map(|i| format!("?{i}")).collect();
            type_clause = format!(" AND service_type IN ({})", placeholders.join(", "));
            params.extend(types.iter().map(|t| libsql::Value::from(t.as_str())));
        }
        let limit_idx = params.len() + 1;
        let offset_idx = limit_idx + 1;
        params.push(sql_int(page.limit).into());
        params.push(sql_int(page.offset).into());

        let sql = format!(
            "SELECT {TENDER_COLS} FROM tenders WHERE status = 'Published'{type_clause}
             ORDER BY name ASC, id ASC LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
        );
        let rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        collect(rows, row_to_tender).await
    }

    pub async fn select_tenders_by_creator(
        &self,
        username: &str,
        page: Page,
    ) -> Result<Vec<Tender>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {TENDER_COLS} FROM tenders WHERE creator_username = ?1
                     ORDER BY name ASC, id ASC LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![username, sql_int(page.limit), sql_int(page.offset)],
            )
            .await?;
        collect(rows, row_to_tender).await
    }

    pub async fn get_tender(&self, tender_id: &str) -> Result<Option<Tender>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!("SELECT {TENDER_COLS} FROM tenders WHERE id = ?1"),
                [tender_id],
            )
            .await?;
        first(rows, row_to_tender).await
    }

    pub async fn select_tender_status(
        &self,
        tender_id: &str,
    ) -> Result<Option<TenderStatus>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT status FROM tenders WHERE id = ?1", [tender_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(parse_enum(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }

    pub async fn select_tender_creator(
        &self,
        tender_id: &str,
    ) -> Result<Option<String>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT creator_username FROM tenders WHERE id = ?1",
                [tender_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    pub async fn tender_exists_by_id(&self, tender_id: &str) -> Result<bool, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT EXISTS(SELECT 1 FROM tenders WHERE id = ?1)",
                [tender_id],
            )
            .await?;
        first_bool(rows).await
    }

    pub async fn insert_tender_returning(
        &self,
        tender: &NewTender,
    ) -> Result<Tender, DatabaseError> {
        let id = self.generate_id(PREFIX_TENDER).await?;
        let now = Utc::now().to_rfc3339();
        let rows = self
            .conn()
            .query(
                &format!(
                    "INSERT INTO tenders (id, name, description, service_type, status, version,
                                          organization_id, creator_username, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, 'Created', 1, ?5, ?6, ?7, ?7)
                     RETURNING {TENDER_COLS}"
                ),
                libsql::params![
                    id.as_str(),
                    tender.name.as_str(),
                    tender.description.as_str(),
                    tender.service_type.as_str(),
                    tender.organization_id.as_str(),
                    tender.creator_username.as_str(),
                    now
                ],
            )
            .await?;
        first(rows, row_to_tender).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn update_tender_status_returning(
        &self,
        tender_id: &str,
        status: TenderStatus,
    ) -> Result<Option<Tender>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "UPDATE tenders SET status = ?1, version = version + 1, updated_at = ?2
                     WHERE id = ?3 RETURNING {TENDER_COLS}"
                ),
                libsql::params![status.as_str(), Utc::now().to_rfc3339(), tender_id],
            )
            .await?;
        first(rows, row_to_tender).await
    }

    /// Apply the provided fields. `version` and `updated_at` move even when
    /// no field is provided.
    pub async fn update_tender_fields_returning(
        &self,
        tender_id: &str,
        update: &TenderUpdate,
    ) -> Result<Option<Tender>, DatabaseError> {
        let mut sets = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();
        let mut idx = 1;

        if let Some(ref name) = update.name {
            sets.push(format!("name = ?{idx}"));
            params.push(name.as_str().into());
            idx += 1;
        }
        if let Some(ref description) = update.description {
            sets.push(format!("description = ?{idx}"));
            params.push(description.as_str().into());
            idx += 1;
        }
        if let Some(service_type) = update.service_type {
            sets.push(format!("service_type = ?{idx}"));
            params.push(service_type.as_str().into());
            idx += 1;
        }

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;
        sets.push("version = version + 1".to_string());

        params.push(tender_id.into());
        let sql = format!(
            "UPDATE tenders SET {} WHERE id = ?{idx} RETURNING {TENDER_COLS}",
            sets.join(", ")
        );

        let rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        first(rows, row_to_tender).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use tender_core::enums::ServiceType;
    use tender_core::updates::tender::TenderUpdateBuilder;

    use super::*;
    use crate::test_support::helpers::{Directory, seeded_db};

    fn draft(dir: &Directory, name: &str, service_type: ServiceType) -> NewTender {
        NewTender {
            name: name.into(),
            description: "Road works".into(),
            service_type,
            organization_id: dir.org_id.clone(),
            creator_username: "alice".into(),
        }
    }

    #[tokio::test]
    async fn insert_returns_created_v1() {
        let dir = seeded_db().await;
        let tender = dir
            .db
            .insert_tender_returning(&draft(&dir, "Bridge", ServiceType::Construction))
            .await
            .unwrap();
        assert!(tender.id.starts_with("tnd-"));
        assert_eq!(tender.status, TenderStatus::Created);
        assert_eq!(tender.version, 1);
        assert_eq!(dir.db.get_tender(&tender.id).await.unwrap(), Some(tender));
    }

    #[tokio::test]
    async fn insert_rejects_unknown_organization() {
        let dir = seeded_db().await;
        let mut bad = draft(&dir, "Bridge", ServiceType::Construction);
        bad.organization_id = "org-00000000".into();
        let err = dir.db.insert_tender_returning(&bad).await.unwrap_err();
        assert!(err.is_constraint_violation(), "{err}");
    }

    #[tokio::test]
    async fn status_update_bumps_version_once() {
        let dir = seeded_db().await;
        let tender = dir
            .db
            .insert_tender_returning(&draft(&dir, "Bridge", ServiceType::Construction))
            .await
            .unwrap();
        let published = dir
            .db
            .update_tender_status_returning(&tender.id, TenderStatus::Published)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(published.status, TenderStatus::Published);
        assert_eq!(published.version, 2);
        assert!(
            dir.db
                .update_tender_status_returning("tnd-00000000", TenderStatus::Closed)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn empty_field_update_still_bumps_version() {
        let dir = seeded_db().await;
        let tender = dir
            .db
            .insert_tender_returning(&draft(&dir, "Bridge", ServiceType::Construction))
            .await
            .unwrap();
        let touched = dir
            .db
            .update_tender_fields_returning(&tender.id, &TenderUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(touched.name, "Bridge");
        assert_eq!(touched.version, 2);

        let renamed = dir
            .db
            .update_tender_fields_returning(
                &tender.id,
                &TenderUpdateBuilder::new().name("Tunnel").build(),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "Tunnel");
        assert_eq!(renamed.description, "Road works");
        assert_eq!(renamed.version, 3);
    }

    #[tokio::test]
    async fn published_listing_filters_and_orders() {
        let dir = seeded_db().await;
        for (name, st) in [
            ("delta", ServiceType::Delivery),
            ("alpha", ServiceType::Construction),
            ("charlie", ServiceType::Manufacture),
            ("bravo", ServiceType::Delivery),
            ("echo", ServiceType::Delivery),
        ] {
            let t = dir
                .db
                .insert_tender_returning(&draft(&dir, name, st))
                .await
                .unwrap();
            if name != "charlie" {
                dir.db
                    .update_tender_status_returning(&t.id, TenderStatus::Published)
                    .await
                    .unwrap();
            }
            if name == "echo" {
                dir.db
                    .update_tender_status_returning(&t.id, TenderStatus::Closed)
                    .await
                    .unwrap();
            }
        }

        let all = dir
            .db
            .select_published_tenders(&ServiceTypeFilter::Any, Page::default())
            .await
            .unwrap();
        let names: Vec<_> = all.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "bravo", "delta"]);
        assert!(all.iter().all(|t| t.status == TenderStatus::Published));

        let deliveries = dir
            .db
            .select_published_tenders(
                &ServiceTypeFilter::from_types([ServiceType::Delivery]),
                Page::parse(Some(1), Some(1)).unwrap(),
            )
            .await
            .unwrap();
        let names: Vec<_> = deliveries.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["delta"]);

        let mine = dir
            .db
            .select_tenders_by_creator("alice", Page::default())
            .await
            .unwrap();
        assert_eq!(mine.len(), 5);
    }
}
