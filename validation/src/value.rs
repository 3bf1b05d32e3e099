//! Dynamically typed values of unknown origin.
//!
//! Values arriving from deserialized JSON or user-supplied configuration
//! have no compile-time shape. `RawValue` is the tagged representation the
//! type guards inspect. Absence is not a variant: a missed map lookup yields
//! `None`, which keeps "key not present" distinguishable from an explicit
//! null.

use std::collections::BTreeMap;

/// A runtime value of unknown shape.
///
/// Numbers are always `f64`. The source of these values does not
/// distinguish integer from float at the type level, and non-JSON origins
/// can produce `NaN` or the infinities, so a NaN-free number type would be
/// too narrow here.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<RawValue>),
    Object(BTreeMap<String, RawValue>),
}

impl RawValue {
    /// Look up `key` on an object value.
    ///
    /// Returns `None` for missing keys and for non-object values, mirroring
    /// an absent-key read in the host runtime.
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        match self {
            RawValue::Object(entries) => entries.get(key),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for RawValue {
    /// JSON integers wider than the f64-exact range (2^53) convert lossily.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawValue::Null,
            serde_json::Value::Bool(flag) => RawValue::Bool(flag),
            serde_json::Value::Number(number) => {
                RawValue::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => RawValue::String(text),
            serde_json::Value::Array(items) => {
                RawValue::Array(items.into_iter().map(RawValue::from).collect())
            }
            serde_json::Value::Object(entries) => RawValue::Object(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, RawValue::from(item)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_distinguishes_missing_keys_from_null() {
        let value = RawValue::from(json!({ "present": null, "name": "test" }));

        assert_eq!(value.get("present"), Some(&RawValue::Null));
        assert_eq!(value.get("name"), Some(&RawValue::String("test".to_string())));
        assert_eq!(value.get("missing"), None);
    }

    #[test]
    fn get_on_non_objects_is_none() {
        assert_eq!(RawValue::from("text").get("anything"), None);
        assert_eq!(RawValue::Null.get("anything"), None);
        assert_eq!(RawValue::from(json!([1, 2, 3])).get("0"), None);
    }

    #[test]
    fn json_conversion_preserves_structure() {
        let value = RawValue::from(json!({
            "enabled": true,
            "count": 3,
            "ratio": 0.5,
            "tags": ["a", "b"],
        }));

        assert_eq!(value.get("enabled"), Some(&RawValue::Bool(true)));
        assert_eq!(value.get("count"), Some(&RawValue::Number(3.0)));
        assert_eq!(value.get("ratio"), Some(&RawValue::Number(0.5)));
        assert_eq!(
            value.get("tags"),
            Some(&RawValue::Array(vec![
                RawValue::from("a"),
                RawValue::from("b"),
            ]))
        );
    }
}
