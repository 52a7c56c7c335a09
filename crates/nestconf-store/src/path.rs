//! Path parsing and traversal utilities
//!
//! Paths are dot-separated keys: `database.primary.host`. Every segment
//! addresses one level of nesting; segments are taken literally, so the empty
//! path is a single empty segment and `a..b` contains an empty middle
//! segment.
//!
//! # Examples
//!
//! ```
//! use nestconf_store::path::{get_at_path, parse_path};
//! use serde_json::json;
//!
//! assert_eq!(parse_path("config.database.host"), vec!["config", "database", "host"]);
//! assert_eq!(parse_path(""), vec![""]);
//!
//! let value = json!({"config": {"database": {"host": "localhost"}}});
//! let root = value.as_object().unwrap();
//! assert_eq!(
//!     get_at_path(root, &parse_path("config.database.host")),
//!     Some(&json!("localhost"))
//! );
//! ```

use serde_json::{Map, Value};

use crate::value::{is_associative, is_index_key};

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Split a path into its segments.
///
/// Never returns an empty vector.
pub fn parse_path(path: &str) -> Vec<&str> {
    path.split(SEPARATOR).collect()
}

/// Get a reference to the value at the given path.
///
/// Mappings are walked by key and lists by index segment (`"0"`, `"1"`).
/// Returns `None` as soon as a segment is missing or an intermediate value
/// is a scalar.
pub fn get_at_path<'a>(root: &'a Map<String, Value>, segments: &[&str]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = root.get(*first)?;

    for segment in rest {
        current = match current {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(list_index(segment)?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Position in a list addressed by a segment, if it is a non-negative
/// index key.
fn list_index(segment: &str) -> Option<usize> {
    if !is_index_key(segment) {
        return None;
    }
    segment.parse().ok()
}

/// Set the value at the given path, creating intermediate mappings.
///
/// Any intermediate value that is not an associative mapping is replaced
/// by an empty mapping before descending into it. That includes scalars,
/// lists and index-keyed mappings.
pub fn set_at_path(root: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            root.insert((*last).to_string(), value);
        }
        [first, rest @ ..] => {
            let slot = root.entry(*first).or_insert(Value::Null);
            if !is_associative(slot) {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(child) = slot {
                set_at_path(child, rest, value);
            }
        }
    }
}

/// Remove the value at the given path.
///
/// Returns the removed value, or `None` when the path did not resolve. The
/// parent mapping is left in place even when it becomes empty. Removing
/// from a list shifts the following elements down.
pub fn remove_at_path(root: &mut Map<String, Value>, segments: &[&str]) -> Option<Value> {
    match segments {
        [] => None,
        [last] => root.shift_remove(*last),
        [first, rest @ ..] => remove_from_value(root.get_mut(*first)?, rest),
    }
}

fn remove_from_value(value: &mut Value, segments: &[&str]) -> Option<Value> {
    match value {
        Value::Object(map) => remove_at_path(map, segments),
        Value::Array(items) => {
            let (first, rest) = segments.split_first()?;
            let index = list_index(first)?;
            if rest.is_empty() {
                (index < items.len()).then(|| items.remove(index))
            } else {
                remove_from_value(items.get_mut(index)?, rest)
            }
        }
        _ => None,
    }
}
