use tender_core::enums::BidStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn get(
    id: &str,
    username: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = ctx.bids.bid_status(id, username).await?;
    output(&status, flags.format)
}

pub async fn set(
    id: &str,
    username: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<BidStatus>(status, "status")?;
    let bid = ctx.bids.edit_bid_status(id, username, status).await?;
    output(&bid, flags.format)
}
