//! Employee directory writes: employees, organizations and responsible members.

use tender_core::entities::{Employee, Organization, OrganizationResponsible};
use tender_core::ids::{PREFIX_EMPLOYEE, PREFIX_ORGANIZATION, PREFIX_RESPONSIBLE};

use crate::TenderDb;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime};
use crate::repos::first;

fn row_to_employee(row: &libsql::Row) -> Result<Employee, DatabaseError> {
    Ok(Employee {
        id: row.get::<String>(0)?,
        username: row.get::<String>(1)?,
        first_name: get_opt_string(row, 2)?,
        last_name: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

fn row_to_organization(row: &libsql::Row) -> Result<Organization, DatabaseError> {
    Ok(Organization {
        id: row.get::<String>(0)?,
        name: row.get::<String>(1)?,
        description: get_opt_string(row, 2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl TenderDb {
    pub async fn create_employee(
        &self,
        username: &str,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Employee, DatabaseError> {
        let id = self.generate_id(PREFIX_EMPLOYEE).await?;
        let rows = self
            .conn()
            .query(
                "INSERT INTO employees (id, username, first_name, last_name, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)
                 RETURNING id, username, first_name, last_name, created_at",
                libsql::params![
                    id.as_str(),
                    username,
                    first_name,
                    last_name,
                    chrono::Utc::now().to_rfc3339()
                ],
            )
            .await?;
        first(rows, row_to_employee).await?.ok_or(DatabaseError::NoResult)
    }

    pub async fn find_employee(&self, username: &str) -> Result<Option<Employee>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT id, username, first_name, last_name, created_at
                 FROM employees WHERE username = ?1",
                [username],
            )
            .await?;
        first(rows, row_to_employee).await
    }

    pub async fn create_organization(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<Organization, DatabaseError> {
        let id = self.generate_id(PREFIX_ORGANIZATION).await?;
        let rows = self
            .conn()
            .query(
                "INSERT INTO organizations (id, name, description, created_at)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, name, description, created_at",
                libsql::params![id.as_str(), name, description, chrono::Utc::now().to_rfc3339()],
            )
            .await?;
        first(rows, row_to_organization)
            .await?
            .ok_or(DatabaseError::NoResult)
    }

    /// Make `user_id` responsible for `organization_id`.
    ///
    /// # Errors
    ///
    /// A constraint violation when either side is unknown or the pair exists.
    pub async fn add_responsible(
        &self,
        organization_id: &str,
        user_id: &str,
    ) -> Result<OrganizationResponsible, DatabaseError> {
        let id = self.generate_id(PREFIX_RESPONSIBLE).await?;
        self.conn()
            .execute(
                "INSERT INTO organization_responsibles (id, organization_id, user_id)
                 VALUES (?1, ?2, ?3)",
                [id.as_str(), organization_id, user_id],
            )
            .await?;
        Ok(OrganizationResponsible {
            id,
            organization_id: organization_id.to_string(),
            user_id: user_id.to_string(),
        })
    }
}
