use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `tndr ping`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.db.ping().await?;
    output(&"ok", flags.format)
}
