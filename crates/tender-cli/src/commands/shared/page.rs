use tender_core::errors::CoreError;
use tender_core::listing::Page;

use crate::cli::GlobalFlags;
use crate::context::AppContext;

/// Page window with precedence: `--limit` flag, then `general.default_limit`.
pub fn effective_page(
    offset: Option<i64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> Result<Page, CoreError> {
    let limit = flags
        .limit
        .unwrap_or_else(|| i64::from(ctx.config.general.default_limit));
    Page::parse(Some(limit), offset)
}
