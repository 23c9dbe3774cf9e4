use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Tender { action } => commands::tender::handle(&action, ctx, flags).await,
        Commands::Bid { action } => commands::bid::handle(&action, ctx, flags).await,
        Commands::Employee { action } => {
            commands::directory::handle_employee(&action, ctx, flags).await
        }
        Commands::Org { action } => commands::directory::handle_org(&action, ctx, flags).await,
        Commands::Ping => commands::ping::handle(ctx, flags).await,
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
