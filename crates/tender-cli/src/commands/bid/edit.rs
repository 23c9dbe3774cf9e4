use tender_core::updates::bid::BidUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    username: &str,
    name: Option<&str>,
    description: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut update = BidUpdateBuilder::new();
    if let Some(name) = name {
        update = update.name(name);
    }
    if let Some(description) = description {
        update = update.description(description);
    }

    let bid = ctx.bids.edit_bid(id, username, update.build()).await?;
    output(&bid, flags.format)
}
