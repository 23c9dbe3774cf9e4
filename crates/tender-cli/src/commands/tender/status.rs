use tender_core::enums::TenderStatus;

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
    let status = ctx.tenders.tender_status(id, username).await?;
    output(&status, flags.format)
}

pub async fn set(
    id: &str,
    username: &str,
    status: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let status = parse_enum::<TenderStatus>(status, "status")?;
    let tender = ctx.tenders.edit_tender_status(id, username, status).await?;
    output(&tender, flags.format)
}
