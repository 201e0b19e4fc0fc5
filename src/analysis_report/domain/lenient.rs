//! Field-level tolerant deserialization
//!
//! Reports are untrusted input. A field holding the wrong JSON type decodes
//! as absent instead of failing the whole document, and sequence elements
//! that cannot be decoded are skipped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes `T`, yielding `None` when the value has the wrong shape
///
/// Use together with `#[serde(default)]` so a missing key is also `None`.
pub fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decodes an array of `T`, dropping elements that fail to decode
///
/// Yields `None` when the value is not an array at all.
pub fn sequence<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "optional")]
        name: Option<String>,
        #[serde(default, deserialize_with = "optional")]
        score: Option<f64>,
        #[serde(default, deserialize_with = "sequence")]
        tags: Option<Vec<String>>,
    }

    #[test]
    fn test_optional_accepts_matching_type() {
        let probe: Probe = serde_json::from_value(json!({"name": "x", "score": 3})).unwrap();
        assert_eq!(probe.name.as_deref(), Some("x"));
        assert_eq!(probe.score, Some(3.0));
    }

    #[test]
    fn test_optional_wrong_type_is_none() {
        let probe: Probe =
            serde_json::from_value(json!({"name": 12, "score": "high", "tags": "a"})).unwrap();
        assert!(probe.name.is_none());
        assert!(probe.score.is_none());
        assert!(probe.tags.is_none());
    }

    #[test]
    fn test_missing_and_null_fields_are_none() {
        let probe: Probe = serde_json::from_value(json!({"name": null})).unwrap();
        assert!(probe.name.is_none());
        assert!(probe.score.is_none());
        assert!(probe.tags.is_none());
    }

    #[test]
    fn test_sequence_skips_bad_elements() {
        let probe: Probe = serde_json::from_value(json!({"tags": ["os", 3, "sys", null]})).unwrap();
        assert_eq!(
            probe.tags,
            Some(vec!["os".to_string(), "sys".to_string()])
        );
    }
}
