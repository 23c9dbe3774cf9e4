//! Bid repository.

use chrono::Utc;

use tender_core::entities::{Bid, NewBid};
use tender_core::enums::{BidDecision, BidStatus};
use tender_core::ids::PREFIX_BID;
use tender_core::listing::Page;
use tender_core::updates::bid::BidUpdate;
use tender_engine::store::BidAuthorship;

use crate::TenderDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, sql_int};
use crate::repos::{collect, first};

const BID_COLS: &str = "id, name, description, status, tender_id, author_type, author_id, \
                        version, decision, created_at, updated_at";

fn row_to_bid(row: &libsql::Row) -> Result<Bid, DatabaseError> {
    Ok(Bid {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        description: row.get::<String>(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        tender_id: row.get::<String>(4)?,
        author_type: parse_enum(&row.get::<String>(5)?)?,
        author_id: row.get::<String>(6)?,
        version: row.get::<i64>(7)?,
        decision: get_opt_string(row, 8)?
            .map(|d| parse_enum(&d))
            .transpose()?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
        updated_at: parse_datetime(&row.get::<String>(10)?)?,
    })
}

impl TenderDb {
    pub async fn select_bids_by_author(
        &self,
        author_id: &str,
        page: Page,
    ) -> Result<Vec<Bid>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {BID_COLS} FROM bids WHERE author_id = ?1
                     ORDER BY name ASC, id ASC LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![author_id, sql_int(page.limit), sql_int(page.offset)],
            )
            .await?;
        collect(rows, row_to_bid).await
    }

    pub async fn select_published_bids(
        &self,
        tender_id: &str,
        page: Page,
    ) -> Result<Vec<Bid>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {BID_COLS} FROM bids WHERE tender_id = ?1 AND status = 'Published'
                     ORDER BY name ASC, id ASC LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![tender_id, sql_int(page.limit), sql_int(page.offset)],
            )
            .await?;
        collect(rows, row_to_bid).await
    }

    pub async fn get_bid(&self, bid_id: &str) -> Result<Option<Bid>, DatabaseError> {
        let rows = self
            .conn()
            .query(&format!("SELECT {BID_COLS} FROM bids WHERE id = ?1"), [bid_id])
            .await?;
        first(rows, row_to_bid).await
    }

    pub async fn select_bid_status(&self, bid_id: &str) -> Result<Option<BidStatus>, DatabaseError> {
        let mut rows = self
            .conn()
            .query("SELECT status FROM bids WHERE id = ?1", [bid_id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(parse_enum(&row.get::<String>(0)?)?)),
            None => Ok(None),
        }
    }

    pub async fn select_bid_authorship(
        &self,
        bid_id: &str,
    ) -> Result<Option<BidAuthorship>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT author_type, author_id FROM bids WHERE id = ?1",
                [bid_id],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(BidAuthorship {
                author_type: parse_enum(&row.get::<String>(0)?)?,
                author_id: row.get::<String>(1)?,
            })),
            None => Ok(None),
        }
    }

    /// Insert a bid. The tender foreign key rejects unknown tenders.
    pub async fn insert_bid_returning(&self, bid: &NewBid) -> Result<Bid, DatabaseError> {
        let id = self.generate_id(PREFIX_BID).await?;
        let now = Utc::now().to_rfc3339();
        let rows = self
            .conn()
            .query(
                &format!(
                    "INSERT INTO bids (id, name, description, status, tender_id, author_type,
                                       author_id, version, created_at, updated_at)
                     VALUES (?1, ?2, ?3, 'Created', ?4, ?5, ?6, 1, ?7, ?7)
                     RETURNING {BID_COLS}"
                ),
                libsql::params![
                    id.as_str(),
                    bid.name.as_str(),
                    bid.description.as_str(),
                    bid.tender_id.as_str(),
                    bid.author_type.as_str(),
                    bid.author_id.as_str(),
                    now
                ],
            )
            .await?;
        first(rows, row_to_bid).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn update_bid_status_returning(
        &self,
        bid_id: &str,
        status: BidStatus,
    ) -> Result<Option<Bid>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "UPDATE bids SET status = ?1, version = version + 1, updated_at = ?2
                     WHERE id = ?3 RETURNING {BID_COLS}"
                ),
                libsql::params![status.as_str(), Utc::now().to_rfc3339(), bid_id],
            )
            .await?;
        first(rows, row_to_bid).await
    }

    pub async fn update_bid_fields_returning(
        &self,
        bid_id: &str,
        update: &BidUpdate,
    ) -> Result<Option<Bid>, DatabaseError> {
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

        sets.push(format!("updated_at = ?{idx}"));
        params.push(Utc::now().to_rfc3339().into());
        idx += 1;
        sets.push("version = version + 1".to_string());

        params.push(bid_id.into());
        let sql = format!(
            "UPDATE bids SET {} WHERE id = ?{idx} RETURNING {BID_COLS}",
            sets.join(", ")
        );

        let rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        first(rows, row_to_bid).await
    }

    /// Record a decision and close the bid in one statement.
    pub async fn update_decision_returning(
        &self,
        bid_id: &str,
        decision: BidDecision,
    ) -> Result<Option<Bid>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "UPDATE bids SET decision = ?1, status = 'Closed', version = version + 1,
                                     updated_at = ?2
                     WHERE id = ?3 RETURNING {BID_COLS}"
                ),
                libsql::params![decision.as_str(), Utc::now().to_rfc3339(), bid_id],
            )
            .await?;
        first(rows, row_to_bid).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use tender_core::entities::NewTender;
    use tender_core::enums::{AuthorType, ServiceType};

    use super::*;
    use crate::test_support::helpers::{Directory, seeded_db};

    async fn tender_id(dir: &Directory) -> String {
        dir.db
            .insert_tender_returning(&NewTender {
                name: "Depot".into(),
                description: String::new(),
                service_type: ServiceType::Delivery,
                organization_id: dir.org_id.clone(),
                creator_username: "alice".into(),
            })
            .await
            .unwrap()
            .id
    }

    fn draft(tender_id: &str, author_id: &str, name: &str) -> NewBid {
        NewBid {
            name: name.into(),
            description: "Two trucks".into(),
            tender_id: tender_id.into(),
            author_type: AuthorType::User,
            author_id: author_id.into(),
        }
    }

    #[tokio::test]
    async fn insert_requires_existing_tender() {
        let dir = seeded_db().await;
        let err = dir
            .db
            .insert_bid_returning(&draft("tnd-00000000", &dir.bob_id, "Offer"))
            .await
            .unwrap_err();
        assert!(err.is_constraint_violation(), "{err}");
    }

    #[tokio::test]
    async fn decision_closes_and_bumps_version() {
        let dir = seeded_db().await;
        let tender_id = tender_id(&dir).await;
        let bid = dir
            .db
            .insert_bid_returning(&draft(&tender_id, &dir.bob_id, "Offer"))
            .await
            .unwrap();
        assert_eq!(bid.decision, None);
        assert_eq!(
            dir.db.select_bid_authorship(&bid.id).await.unwrap(),
            Some(BidAuthorship {
                author_type: AuthorType::User,
                author_id: dir.bob_id.clone(),
            })
        );

        let decided = dir
            .db
            .update_decision_returning(&bid.id, BidDecision::Rejected)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(decided.status, BidStatus::Closed);
        assert_eq!(decided.decision, Some(BidDecision::Rejected));
        assert_eq!(decided.version, 2);
        assert_eq!(dir.db.get_bid(&bid.id).await.unwrap(), Some(decided));
    }

    #[tokio::test]
    async fn published_bids_only_for_that_tender() {
        let dir = seeded_db().await;
        let first_tender = tender_id(&dir).await;
        let second_tender = tender_id(&dir).await;
        for (tender, name, publish) in [
            (&first_tender, "b", true),
            (&first_tender, "a", true),
            (&first_tender, "draft", false),
            (&second_tender, "elsewhere", true),
        ] {
            let bid = dir
                .db
                .insert_bid_returning(&draft(tender, &dir.bob_id, name))
                .await
                .unwrap();
            if publish {
                dir.db
                    .update_bid_status_returning(&bid.id, BidStatus::Published)
                    .await
                    .unwrap();
            }
        }

        let listed = dir
            .db
            .select_published_bids(&first_tender, Page::default())
            .await
            .unwrap();
        let names: Vec<_> = listed.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let by_author = dir
            .db
            .select_bids_by_author(&dir.bob_id, Page::default())
            .await
            .unwrap();
        assert_eq!(by_author.len(), 4);
    }
}
