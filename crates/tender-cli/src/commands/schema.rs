use schemars::schema_for;
use tender_core::entities::{Bid, Employee, Organization, Tender};
use tender_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `tndr schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "tender" => schema_for!(Tender),
        "bid" => schema_for!(Bid),
        "employee" => schema_for!(Employee),
        "organization" => schema_for!(Organization),
        other => {
            return Err(CoreError::BadRequest(format!(
                "unknown schema type '{other}' (expected tender, bid, employee or organization)"
            ))
            .into());
        }
    };
    output(&schema, flags.format)
}
