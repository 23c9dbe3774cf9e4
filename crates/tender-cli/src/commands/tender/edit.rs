use tender_core::enums::ServiceType;
use tender_core::updates::tender::TenderUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    username: &str,
    name: Option<&str>,
    description: Option<&str>,
    service_type: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut update = TenderUpdateBuilder::new();
    if let Some(name) = name {
        update = update.name(name);
    }
    if let Some(description) = description {
        update = update.description(description);
    }
    if let Some(service_type) = service_type {
        update = update.service_type(parse_enum::<ServiceType>(service_type, "service type")?);
    }

    let tender = ctx.tenders.edit_tender(id, username, update.build()).await?;
    output(&tender, flags.format)
}
