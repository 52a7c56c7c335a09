//! Classification of configuration values
//!
//! Mappings and lists are both collections, but the merge rules treat them
//! differently. A mapping counts as *associative* only when at least one of
//! its keys is not an index key; an empty collection is list-like.
//!
//! ```
//! use nestconf_store::value::{is_associative, list_items};
//! use serde_json::json;
//!
//! assert!(is_associative(&json!({"host": "localhost"})));
//! assert!(!is_associative(&json!({})));
//! assert!(!is_associative(&json!({"0": "a", "1": "b"})));
//!
//! assert_eq!(list_items(&json!({"0": "a", "1": "b"})), Some(vec![&json!("a"), &json!("b")]));
//! assert_eq!(list_items(&json!({"host": "localhost"})), None);
//! ```

use serde_json::{Map, Value};

/// Check whether a key is the canonical decimal form of an integer.
///
/// `"0"`, `"42"` and `"-7"` are index keys. `"01"`, `"+1"`, `"-0"`, `" 1"`
/// and the empty string are not.
pub fn is_index_key(key: &str) -> bool {
    let digits = key.strip_prefix('-').unwrap_or(key);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return false;
    }
    if key.starts_with('-') && digits == "0" {
        return false;
    }

    key.parse::<i64>().is_ok()
}

/// Check whether a mapping has at least one non-index key.
pub fn is_associative_map(map: &Map<String, Value>) -> bool {
    map.keys().any(|key| !is_index_key(key))
}

/// Check whether a value is an associative mapping.
///
/// Arrays, scalars and empty objects are never associative.
pub fn is_associative(value: &Value) -> bool {
    match value {
        Value::Object(map) => is_associative_map(map),
        _ => false,
    }
}

/// Get the elements of a list-like value in order.
///
/// Arrays yield their elements. Objects yield their values when they are
/// not associative (empty, or keyed only by indices). Scalars and
/// associative objects yield `None`.
pub fn list_items(value: &Value) -> Option<Vec<&Value>> {
    match value {
        Value::Array(items) => Some(items.iter().collect()),
        Value::Object(map) if !is_associative_map(map) => Some(map.values().collect()),
        _ => None,
    }
}

/// Name of a value's variant, used in error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_keys() {
        for key in ["0", "1", "42", "-7", "9223372036854775807"] {
            assert!(is_index_key(key), "{key} should be an index key");
        }
    }

    #[test]
    fn non_index_keys() {
        for key in ["", "-", "01", "+1", "-0", " 1", "1.5", "1e3", "key", "99999999999999999999"] {
            assert!(!is_index_key(key), "{key} should not be an index key");
        }
    }

    #[test]
    fn mixed_keys_are_associative() {
        assert!(is_associative(&json!({"0": 1, "name": 2})));
    }

    #[test]
    fn scalars_are_not_associative() {
        assert!(!is_associative(&json!(null)));
        assert!(!is_associative(&json!("text")));
        assert!(!is_associative(&json!([1, 2])));
    }

    #[test]
    fn empty_collections_are_list_like() {
        assert_eq!(list_items(&json!([])), Some(vec![]));
        assert_eq!(list_items(&json!({})), Some(vec![]));
    }

    #[test]
    fn scalars_are_not_list_like() {
        assert_eq!(list_items(&json!(3)), None);
    }
}
