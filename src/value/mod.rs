//! Submitted value model
//!
//! The engine never probes runtime types. Callers decode submitted data into
//! an explicit value-variant type up front; the passes then compare variant
//! tags. Truthiness and length follow the semantics form controllers expect:
//! zero and NaN numbers, `false`, and the empty string are absent-like;
//! sequences and structured values are always truthy; only text and
//! sequences have a length.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One submitted field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean toggle state
    Boolean(bool),
    /// Numeric input
    Number(f64),
    /// Free-form text
    Text(String),
    /// Sequence of selected entries
    List(Vec<String>),
    /// Structured editor payload (rich text and the like)
    Structured(Map<String, Value>),
}

/// Submitted data keyed by field name.
pub type ValueBag = HashMap<String, FieldValue>;

impl FieldValue {
    /// Decodes a raw JSON value. `null` decodes to absent.
    ///
    /// Non-string sequence elements are rendered to their JSON text; the
    /// engine only ever inspects sequence length.
    pub fn from_json(value: &Value) -> Option<FieldValue> {
        match value {
            Value::Null => None,
            Value::Bool(flag) => Some(FieldValue::Boolean(*flag)),
            Value::Number(number) => Some(FieldValue::Number(number.as_f64().unwrap_or_default())),
            Value::String(text) => Some(FieldValue::Text(text.clone())),
            Value::Array(items) => Some(FieldValue::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            )),
            Value::Object(map) => Some(FieldValue::Structured(map.clone())),
        }
    }

    /// Truthiness in the source-form sense.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Boolean(flag) => *flag,
            FieldValue::Number(number) => *number != 0.0 && !number.is_nan(),
            FieldValue::Text(text) => !text.is_empty(),
            // Containers are truthy even when empty
            FieldValue::List(_) | FieldValue::Structured(_) => true,
        }
    }

    /// Length of text (in characters) or sequence values.
    pub fn length(&self) -> Option<usize> {
        match self {
            FieldValue::Text(text) => Some(text.chars().count()),
            FieldValue::List(items) => Some(items.len()),
            _ => None,
        }
    }

    /// Numeric view, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Text view, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the variant name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::Text(_) => "string",
            FieldValue::List(_) => "list",
            FieldValue::Structured(_) => "object",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Boolean(flag)
    }
}

impl From<f64> for FieldValue {
    fn from(number: f64) -> Self {
        FieldValue::Number(number)
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        FieldValue::Number(number as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Decodes a JSON object into a value bag, skipping `null` entries.
///
/// Anything other than an object decodes to an empty bag.
pub fn bag_from_json(value: &Value) -> ValueBag {
    let mut bag = ValueBag::new();
    if let Value::Object(entries) = value {
        for (name, raw) in entries {
            if let Some(decoded) = FieldValue::from_json(raw) {
                bag.insert(name.clone(), decoded);
            }
        }
    }
    bag
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_scalars() {
        assert_eq!(
            FieldValue::from_json(&json!(10)),
            Some(FieldValue::Number(10.0))
        );
        assert_eq!(
            FieldValue::from_json(&json!(true)),
            Some(FieldValue::Boolean(true))
        );
        assert_eq!(
            FieldValue::from_json(&json!("hi")),
            Some(FieldValue::Text("hi".into()))
        );
        assert_eq!(FieldValue::from_json(&json!(null)), None);
    }

    #[test]
    fn test_decode_containers() {
        assert_eq!(
            FieldValue::from_json(&json!(["a", "b"])),
            Some(FieldValue::List(vec!["a".into(), "b".into()]))
        );

        let decoded = FieldValue::from_json(&json!({"blocks": []})).unwrap();
        assert_eq!(decoded.type_name(), "object");
    }

    #[test]
    fn test_decode_stringifies_non_string_elements() {
        assert_eq!(
            FieldValue::from_json(&json!([1, "x"])),
            Some(FieldValue::List(vec!["1".into(), "x".into()]))
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(FieldValue::Number(10.0).is_truthy());
        assert!(!FieldValue::Number(0.0).is_truthy());
        assert!(!FieldValue::Number(f64::NAN).is_truthy());
        assert!(FieldValue::Boolean(true).is_truthy());
        assert!(!FieldValue::Boolean(false).is_truthy());
        assert!(FieldValue::Text("x".into()).is_truthy());
        assert!(!FieldValue::Text(String::new()).is_truthy());
        // Containers are truthy even when empty
        assert!(FieldValue::List(vec![]).is_truthy());
        assert!(FieldValue::Structured(Map::new()).is_truthy());
    }

    #[test]
    fn test_length() {
        assert_eq!(FieldValue::Text("abc".into()).length(), Some(3));
        assert_eq!(FieldValue::List(vec!["a".into()]).length(), Some(1));
        assert_eq!(FieldValue::Number(3.0).length(), None);
        assert_eq!(FieldValue::Boolean(true).length(), None);
        assert_eq!(FieldValue::Structured(Map::new()).length(), None);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert_eq!(FieldValue::Text("héllo".into()).length(), Some(5));
    }

    #[test]
    fn test_bag_from_json() {
        let bag = bag_from_json(&json!({
            "age": 30,
            "name": "Alice",
            "tags": ["a"],
            "gone": null
        }));

        assert_eq!(bag.len(), 3);
        assert_eq!(bag.get("age"), Some(&FieldValue::Number(30.0)));
        assert!(!bag.contains_key("gone"));
    }

    #[test]
    fn test_bag_from_non_object() {
        assert!(bag_from_json(&json!("nope")).is_empty());
        assert!(bag_from_json(&json!(null)).is_empty());
    }
}
