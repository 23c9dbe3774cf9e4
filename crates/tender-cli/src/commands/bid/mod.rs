use crate::cli::GlobalFlags;
use crate::cli::subcommands::BidCommands;
use crate::context::AppContext;

pub mod create;
pub mod decide;
pub mod edit;
pub mod list;
pub mod status;

/// Handle `tndr bid`.
pub async fn handle(action: &BidCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        BidCommands::Create {
            name,
            description,
            tender_id,
            author_type,
            author_id,
        } => create::run(name, description, tender_id, author_type, author_id, ctx, flags).await,
        BidCommands::My { username, offset } => list::run_mine(username, *offset, ctx, flags).await,
        BidCommands::List {
            tender_id,
            username,
            offset,
        } => list::run_for_tender(tender_id, username, *offset, ctx, flags).await,
        BidCommands::Status { id, username } => status::get(id, username, ctx, flags).await,
        BidCommands::SetStatus {
            id,
            username,
            status,
        } => status::set(id, username, status, ctx, flags).await,
        BidCommands::Edit {
            id,
            username,
            name,
            description,
        } => edit::run(id, username, name.as_deref(), description.as_deref(), ctx, flags).await,
        BidCommands::Decide {
            id,
            username,
            decision,
        } => decide::run(id, username, decision, ctx, flags).await,
    }
}
