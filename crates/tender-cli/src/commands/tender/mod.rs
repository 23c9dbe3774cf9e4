use crate::cli::GlobalFlags;
use crate::cli::subcommands::TenderCommands;
use crate::context::AppContext;

pub mod create;
pub mod edit;
pub mod list;
pub mod status;

/// Handle `tndr tender`.
pub async fn handle(
    action: &TenderCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TenderCommands::List {
            service_type,
            offset,
        } => list::run_published(service_type, *offset, ctx, flags).await,
        TenderCommands::Create {
            name,
            description,
            service_type,
            organization_id,
            creator_username,
        } => {
            create::run(
                name,
                description,
                service_type,
                organization_id,
                creator_username,
                ctx,
                flags,
            )
            .await
        }
        TenderCommands::My { username, offset } => {
            list::run_mine(username, *offset, ctx, flags).await
        }
        TenderCommands::Status { id, username } => status::get(id, username, ctx, flags).await,
        TenderCommands::SetStatus {
            id,
            username,
            status,
        } => status::set(id, username, status, ctx, flags).await,
        TenderCommands::Edit {
            id,
            username,
            name,
            description,
            service_type,
        } => {
            edit::run(
                id,
                username,
                name.as_deref(),
                description.as_deref(),
                service_type.as_deref(),
                ctx,
                flags,
            )
            .await
        }
    }
}
