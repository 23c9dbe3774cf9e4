use tender_core::enums::BidDecision;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    username: &str,
    decision: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let decision = parse_enum::<BidDecision>(decision, "decision")?;
    let bid = ctx.bids.submit_decision(id, username, decision).await?;
    output(&bid, flags.format)
}
