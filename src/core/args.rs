//! Argument extraction over untyped JSON call-argument maps.
//!
//! Tool parameters and prompt arguments share the same wire shape (a JSON
//! object) but report different error variants, so both extractors live here
//! and the typed request structs at each dispatch boundary call into them.

use serde_json::Value as JsonValue;

use crate::core::error::ArgumentError;

/// Extract a required string under `key`, trimmed.
///
/// Fails with `MissingParameter` when absent, `NullParameter` when null,
/// `EmptyParameter` when blank after trimming. Non-string scalars are
/// coerced to their JSON text rather than rejected.
pub fn required_string(args: &JsonValue, key: &'static str) -> Result<String, ArgumentError> {
    let value = args
        .get(key)
        .ok_or(ArgumentError::MissingParameter(key))?;
    if value.is_null() {
        return Err(ArgumentError::NullParameter(key));
    }
    let text = match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ArgumentError::EmptyParameter(key));
    }
    tracing::debug!(parameter = key, "validated call argument");
    Ok(trimmed.to_string())
}

/// Extract a required prompt argument. Absent and present-but-null are both
/// `MissingArgument`, matching the validator's stance on nulls.
pub fn required_arg(args: &JsonValue, key: &'static str) -> Result<String, ArgumentError> {
    let value = match args.get(key) {
        None | Some(JsonValue::Null) => return Err(ArgumentError::MissingArgument(key)),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    tracing::debug!(argument = key, "validated prompt argument");
    Ok(value)
}

/// Extract an optional prompt argument. Absent and present-but-null both
/// yield `None`.
pub fn optional_arg(args: &JsonValue, key: &str) -> Option<String> {
    let value = match args.get(key) {
        None | Some(JsonValue::Null) => return None,
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    tracing::debug!(argument = key, "validated prompt argument");
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_string_returns_trimmed_value() {
        let args = json!({ "city": "  Dublin  " });
        assert_eq!(required_string(&args, "city").unwrap(), "Dublin");
    }

    #[test]
    fn required_string_missing_key() {
        let args = json!({});
        assert_eq!(
            required_string(&args, "city"),
            Err(ArgumentError::MissingParameter("city"))
        );
    }

    #[test]
    fn required_string_null_value() {
        let args = json!({ "city": null });
        assert_eq!(
            required_string(&args, "city"),
            Err(ArgumentError::NullParameter("city"))
        );
    }

    #[test]
    fn required_string_empty_and_blank() {
        assert_eq!(
            required_string(&json!({ "city": "" }), "city"),
            Err(ArgumentError::EmptyParameter("city"))
        );
        assert_eq!(
            required_string(&json!({ "city": "   " }), "city"),
            Err(ArgumentError::EmptyParameter("city"))
        );
    }

    #[test]
    fn required_string_coerces_scalars() {
        let args = json!({ "city": 42 });
        assert_eq!(required_string(&args, "city").unwrap(), "42");
    }

    #[test]
    fn required_arg_treats_null_as_missing() {
        let args = json!({ "location": null });
        assert_eq!(
            required_arg(&args, "location"),
            Err(ArgumentError::MissingArgument("location"))
        );
        assert_eq!(
            required_arg(&json!({}), "location"),
            Err(ArgumentError::MissingArgument("location"))
        );
    }

    #[test]
    fn optional_arg_null_and_absent_are_none() {
        assert_eq!(optional_arg(&json!({}), "travel_date"), None);
        assert_eq!(optional_arg(&json!({ "travel_date": null }), "travel_date"), None);
        assert_eq!(
            optional_arg(&json!({ "travel_date": "2025-05-01" }), "travel_date"),
            Some("2025-05-01".to_string())
        );
    }
}
