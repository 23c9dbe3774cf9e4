use serde::de::DeserializeOwned;
use tender_core::errors::CoreError;

/// Parse an enum value in its wire spelling (`Published`, `Construction`, ...).
///
/// Anything else is a `BadRequest`.
pub fn parse_enum<T>(raw: &str, field: &str) -> Result<T, CoreError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(serde_json::Value::String(raw.to_string()))
        .map_err(|_| CoreError::BadRequest(format!("invalid {field} '{raw}'")))
}
