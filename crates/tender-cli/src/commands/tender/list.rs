use tender_core::enums::ServiceType;
use tender_core::errors::CoreError;
use tender_core::listing::ServiceTypeFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::page::effective_page;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run_published(
    service_types: &[String],
    offset: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = effective_page(offset, ctx, flags)?;
    let filter = parse_filter(service_types)?;
    let tenders = ctx.tenders.list_tenders(page, &filter).await?;
    output(&tenders, flags.format)
}

pub async fn run_mine(
    username: &str,
    offset: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let page = effective_page(offset, ctx, flags)?;
    let tenders = ctx.tenders.list_user_tenders(page, username).await?;
    output(&tenders, flags.format)
}

fn parse_filter(raw: &[String]) -> Result<ServiceTypeFilter, CoreError> {
    let types = raw
        .iter()
        .map(|value| parse_enum::<ServiceType>(value, "service type"))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ServiceTypeFilter::from_types(types))
}

#[cfg(test)]
mod tests {
    use tender_core::enums::ServiceType;
    use tender_core::listing::ServiceTypeFilter;

    use super::parse_filter;

    #[test]
    fn no_types_means_no_filter() {
        assert_eq!(parse_filter(&[]).unwrap(), ServiceTypeFilter::Any);
    }

    #[test]
    fn subset_restricts() {
        let filter = parse_filter(&["Delivery".into()]).unwrap();
        assert!(filter.matches(ServiceType::Delivery));
        assert!(!filter.matches(ServiceType::Construction));
    }
}
