use serde::Serialize;
use serde_json::{Value, json};
use tender_core::errors::CoreError;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Error body for a classified failure, carrying the transport status code.
pub fn failure_body(error: &CoreError) -> Value {
    let kind = error.kind();
    json!({
        "reason": error.to_string(),
        "kind": kind.as_str(),
        "status": kind.status_code(),
    })
}
