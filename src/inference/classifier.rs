//! Value type classifier
//!
//! Classifies each JSON value into a SQL column type via an ordered decision
//! cascade. The first matching rule wins; the order encodes intentional
//! precedence (numeric tests before string tests, the boolean test before
//! the date cascade) and must not be rearranged.

use serde_json::Value;
use tracing::debug;

use super::config::InferenceConfig;
use super::error::InferenceError;
use super::formats;
use super::types::{ColumnType, SchemaField};
use crate::validation::clean_identifier;

// Date cascade, evaluated after the null/numeric/char/boolean rules. One
// strict pass, three lenient date-time shapes, then a looser date pass that
// catches rolled-over components the strict pass rejects.
static DATE_RULES: &[(fn(&str) -> bool, ColumnType)] = &[
    (formats::is_strict_sql_date, ColumnType::Date),
    (formats::matches_common_datetime, ColumnType::DateTime),
    (formats::is_rfc822_datetime, ColumnType::DateTime),
    (formats::is_mdy_datetime, ColumnType::DateTime),
    (formats::is_loose_date, ColumnType::Date),
];

/// Classify a JSON value into a SQL column type
///
/// Total: every value resolves to a concrete type. Unrecognized shapes fall
/// through to `VARCHAR(len + padding)`, where the width is computed from
/// this value only.
pub fn classify(value: &Value, config: &InferenceConfig) -> ColumnType {
    if value.is_null() {
        return ColumnType::Varchar {
            width: config.null_width,
        };
    }

    if let Value::Number(n) = value {
        if let Some(i) = lossless_i64(n) {
            return if i32::try_from(i).is_ok() {
                ColumnType::Int
            } else {
                ColumnType::Long
            };
        }
    }

    let text = text_rendering(value);

    if text.chars().count() <= 1 {
        return ColumnType::Char;
    }

    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        return ColumnType::Boolean;
    }

    for (matches, column_type) in DATE_RULES {
        if matches(&text) {
            return *column_type;
        }
    }

    ColumnType::Varchar {
        width: text.chars().count() + config.padding_factor,
    }
}

/// Infer a schema field for every top-level entry of a JSON document
///
/// Fields are returned in document order. Fails on malformed JSON or a
/// non-object root; classification of individual fields cannot fail.
pub fn infer_fields(
    json: &str,
    config: &InferenceConfig,
) -> Result<Vec<SchemaField>, InferenceError> {
    let root: Value = serde_json::from_str(json)?;

    let map = match root {
        Value::Object(map) => map,
        other => {
            return Err(InferenceError::InvalidStructure(
                value_type_name(&other).to_string(),
            ));
        }
    };

    let fields: Vec<SchemaField> = map
        .iter()
        .map(|(key, value)| SchemaField {
            raw_name: key.clone(),
            clean_name: clean_identifier(key),
            column_type: classify(value, config),
        })
        .collect();

    debug!(fields = fields.len(), "classified top-level fields");

    Ok(fields)
}

/// Textual rendering used by the string-probing rules
///
/// Strings render as their content, scalars as their JSON spelling, and
/// nested objects/arrays as their compact JSON serialization.
fn text_rendering(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The value as an i64 if the conversion is lossless
fn lossless_i64(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Integral floats convert when they round-trip exactly
    if let Some(f) = n.as_f64() {
        if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
            let i = f as i64;
            if i as f64 == f {
                return Some(i);
            }
        }
    }
    None
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn classify_default(value: Value) -> ColumnType {
        classify(&value, &InferenceConfig::default())
    }

    #[test]
    fn test_null_is_wide_varchar() {
        assert_eq!(
            classify_default(Value::Null),
            ColumnType::Varchar { width: 50 }
        );
    }

    #[test]
    fn test_int_boundaries() {
        assert_eq!(classify_default(json!(0)), ColumnType::Int);
        assert_eq!(classify_default(json!(2147483647)), ColumnType::Int);
        assert_eq!(classify_default(json!(-2147483648)), ColumnType::Int);
        assert_eq!(classify_default(json!(2147483648i64)), ColumnType::Long);
        assert_eq!(classify_default(json!(-2147483649i64)), ColumnType::Long);
        assert_eq!(
            classify_default(json!(9223372036854775807i64)),
            ColumnType::Long
        );
    }

    #[test]
    fn test_integral_float_is_numeric() {
        assert_eq!(classify_default(json!(2.0)), ColumnType::Int);
        assert_eq!(classify_default(json!(4294967296.0)), ColumnType::Long);
    }

    #[test]
    fn test_fractional_float_falls_through() {
        // "1.5" renders as three characters
        assert_eq!(
            classify_default(json!(1.5)),
            ColumnType::Varchar { width: 15 }
        );
    }

    #[test]
    fn test_short_strings_are_char() {
        assert_eq!(classify_default(json!("A")), ColumnType::Char);
        assert_eq!(classify_default(json!("")), ColumnType::Char);
        // numeric content in a string is still text
        assert_eq!(classify_default(json!("5")), ColumnType::Char);
    }

    #[test]
    fn test_boolean_detection() {
        assert_eq!(classify_default(json!(true)), ColumnType::Boolean);
        assert_eq!(classify_default(json!(false)), ColumnType::Boolean);
        assert_eq!(classify_default(json!("true")), ColumnType::Boolean);
        assert_eq!(classify_default(json!("FALSE")), ColumnType::Boolean);
        assert_eq!(classify_default(json!("True")), ColumnType::Boolean);
    }

    #[test]
    fn test_date_cascade() {
        assert_eq!(classify_default(json!("2021-01-05")), ColumnType::Date);
        assert_eq!(
            classify_default(json!("Mon, 02 Jan 2006 15:04:05 -0700")),
            ColumnType::DateTime
        );
        assert_eq!(
            classify_default(json!("12/25/2021 10:30:00")),
            ColumnType::DateTime
        );
        assert_eq!(
            classify_default(json!("2024-01-15T10:30:00Z")),
            ColumnType::DateTime
        );
        // loose pass accepts what the strict literal check rejects
        assert_eq!(classify_default(json!("2021-13-45")), ColumnType::Date);
    }

    #[test]
    fn test_varchar_fallback_width() {
        assert_eq!(
            classify_default(json!("Bob")),
            ColumnType::Varchar { width: 15 }
        );
        assert_eq!(
            classify_default(json!("hello world")),
            ColumnType::Varchar { width: 23 }
        );
    }

    #[test]
    fn test_nested_values_render_as_text() {
        // {"a":1} serializes to seven characters
        assert_eq!(
            classify_default(json!({"a": 1})),
            ColumnType::Varchar { width: 19 }
        );
        assert_eq!(
            classify_default(json!([1, 2, 3])),
            ColumnType::Varchar { width: 19 }
        );
    }

    #[test]
    fn test_config_overrides() {
        let config = InferenceConfig::builder()
            .padding_factor(0)
            .null_width(10)
            .build();
        assert_eq!(
            classify(&json!("Bob"), &config),
            ColumnType::Varchar { width: 3 }
        );
        assert_eq!(
            classify(&Value::Null, &config),
            ColumnType::Varchar { width: 10 }
        );
    }

    #[test]
    fn test_infer_fields_order_and_names() {
        let config = InferenceConfig::default();
        let fields = infer_fields(r#"{"z": 1, "user.name:1": "xyz"}"#, &config).unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].raw_name, "z");
        assert_eq!(fields[0].clean_name, "z");
        assert_eq!(fields[0].column_type, ColumnType::Int);
        assert_eq!(fields[1].raw_name, "user.name:1");
        assert_eq!(fields[1].clean_name, "username1");
    }

    #[test]
    fn test_infer_fields_rejects_malformed_json() {
        let config = InferenceConfig::default();
        let err = infer_fields("{not json", &config).unwrap_err();
        assert!(matches!(err, InferenceError::JsonParse(_)));
    }

    #[test]
    fn test_infer_fields_rejects_non_object_root() {
        let config = InferenceConfig::default();
        let err = infer_fields("[1, 2, 3]", &config).unwrap_err();
        assert!(matches!(err, InferenceError::InvalidStructure(_)));
    }
}
