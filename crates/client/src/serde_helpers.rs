//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Normalize Splunk's boolean flags (`true`, `"1"`, `1`, `"true"`) to `bool`.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - Job flags such as `isDone` arrive as booleans in JSON output but as `"1"`/`"0"` elsewhere.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagValue {
    Bool(bool),
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64OrString {
    F64(f64),
    String(String),
}

pub fn usize_from_string_or_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => usize::try_from(v).map_err(D::Error::custom),
        U64OrString::I64(v) => usize::try_from(v).map_err(D::Error::custom),
        U64OrString::String(s) => s.trim().parse::<usize>().map_err(D::Error::custom),
    }
}

pub fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match F64OrString::deserialize(deserializer)? {
        F64OrString::F64(v) => Ok(v),
        F64OrString::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

/// Deserialize Splunk's boolean flag conventions.
///
/// `"1"` is the backend's canonical true value; `"0"` and the empty string are false.
pub fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match FlagValue::deserialize(deserializer)? {
        FlagValue::Bool(b) => Ok(b),
        FlagValue::U64(v) => Ok(v != 0),
        FlagValue::I64(v) => Ok(v != 0),
        FlagValue::String(s) => match s.trim() {
            "1" => Ok(true),
            "0" | "" => Ok(false),
            other if other.eq_ignore_ascii_case("true") => Ok(true),
            other if other.eq_ignore_ascii_case("false") => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag value: {other}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Count {
        #[serde(deserialize_with = "usize_from_string_or_number")]
        value: usize,
    }

    #[derive(Deserialize)]
    struct Progress {
        #[serde(deserialize_with = "f64_from_string_or_number")]
        value: f64,
    }

    #[derive(Deserialize)]
    struct Flag {
        #[serde(deserialize_with = "bool_from_flag")]
        value: bool,
    }

    #[test]
    fn test_usize_from_string_or_number_accepts_number_and_string() {
        let parsed: Count = serde_json::from_str(r#"{ "value": 3 }"#).unwrap();
        assert_eq!(parsed.value, 3);

        let parsed: Count = serde_json::from_str(r#"{ "value": "65000" }"#).unwrap();
        assert_eq!(parsed.value, 65000);
    }

    #[test]
    fn test_usize_from_string_or_number_rejects_negative() {
        assert!(serde_json::from_str::<Count>(r#"{ "value": -1 }"#).is_err());
    }

    #[test]
    fn test_f64_from_string_or_number() {
        let parsed: Progress = serde_json::from_str(r#"{ "value": 0.25 }"#).unwrap();
        assert_eq!(parsed.value, 0.25);

        let parsed: Progress = serde_json::from_str(r#"{ "value": "1.0" }"#).unwrap();
        assert_eq!(parsed.value, 1.0);
    }

    #[test]
    fn test_bool_from_flag_string_convention() {
        let parsed: Flag = serde_json::from_str(r#"{ "value": "1" }"#).unwrap();
        assert!(parsed.value);

        let parsed: Flag = serde_json::from_str(r#"{ "value": "0" }"#).unwrap();
        assert!(!parsed.value);
    }

    #[test]
    fn test_bool_from_flag_bool_and_number() {
        let parsed: Flag = serde_json::from_str(r#"{ "value": true }"#).unwrap();
        assert!(parsed.value);

        let parsed: Flag = serde_json::from_str(r#"{ "value": 0 }"#).unwrap();
        assert!(!parsed.value);
    }

    #[test]
    fn test_bool_from_flag_rejects_garbage() {
        assert!(serde_json::from_str::<Flag>(r#"{ "value": "maybe" }"#).is_err());
    }
}
