use anyhow::Context;
use tender_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{EmployeeCommands, OrgCommands};
use crate::context::AppContext;
use crate::output::output;

/// Handle `tndr employee`.
pub async fn handle_employee(
    action: &EmployeeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EmployeeCommands::Create {
            username,
            first_name,
            last_name,
        } => {
            let employee = ctx
                .db
                .create_employee(username, first_name.as_deref(), last_name.as_deref())
                .await
                .with_context(|| format!("failed to create employee '{username}'"))?;
            output(&employee, flags.format)
        }
    }
}

/// Handle `tndr org`.
pub async fn handle_org(
    action: &OrgCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        OrgCommands::Create { name, description } => {
            let organization = ctx
                .db
                .create_organization(name, description.as_deref())
                .await
                .with_context(|| format!("failed to create organization '{name}'"))?;
            output(&organization, flags.format)
        }
        OrgCommands::AddResponsible {
            organization_id,
            username,
        } => {
            let employee = ctx
                .db
                .find_employee(username)
                .await?
                .ok_or_else(|| CoreError::UnknownUser {
                    username: username.clone(),
                })?;
            let responsible = ctx
                .db
                .add_responsible(organization_id, &employee.id)
                .await
                .with_context(|| {
                    format!("failed to make '{username}' responsible for {organization_id}")
                })?;
            output(&responsible, flags.format)
        }
    }
}
