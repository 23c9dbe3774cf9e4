use crate::cli::GlobalFlags;
use crate::commands::shared::page::effective_page;
use crate::context::AppContext;
use crate::output::output;

pub async fn run_mine(
    username: &str,
    offset: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = effective_page(offset, ctx, flags)?;
    let bids = ctx.bids.list_user_bids(page, username).await?;
    output(&bids, flags.format)
}

pub async fn run_for_tender(
    tender_id: &str,
    username: &str,
    offset: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = effective_page(offset, ctx, flags)?;
    let bids = ctx.bids.list_tender_bids(page, tender_id, username).await?;
    output(&bids, flags.format)
}
