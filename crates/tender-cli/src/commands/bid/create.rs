use tender_core::entities::NewBid;
use tender_core::enums::AuthorType;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    description: &str,
    tender_id: &str,
    author_type: &str,
    author_id: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let author_type = parse_enum::<AuthorType>(author_type, "author type")?;
    let bid = ctx
        .bids
        .create_bid(NewBid {
            name: name.to_string(),
            description: description.to_string(),
            tender_id: tender_id.to_string(),
            author_type,
            author_id: author_id.to_string(),
        })
        .await?;
    output(&bid, flags.format)
}
