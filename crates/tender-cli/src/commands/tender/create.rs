use tender_core::entities::NewTender;
use tender_core::enums::ServiceType;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    name: &str,
    description: &str,
    service_type: &str,
    organization_id: &str,
    creator_username: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service_type = parse_enum::<ServiceType>(service_type, "service type")?;
    let tender = ctx
        .tenders
        .create_tender(NewTender {
            name: name.to_string(),
            description: description.to_string(),
            service_type,
            organization_id: organization_id.to_string(),
            creator_username: creator_username.to_string(),
        })
        .await?;
    output(&tender, flags.format)
}
