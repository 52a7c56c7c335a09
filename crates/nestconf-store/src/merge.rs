//! Deep merge of configuration mappings
//!
//! The incoming mapping wins on conflict. For every key of the incoming
//! mapping, in order:
//!
//! 1. A key missing from the base is copied as is.
//! 2. Two associative mappings are merged recursively.
//! 3. Under [`MergeStrategy::MergeIndexed`], two list-like values are
//!    concatenated and deduplicated.
//! 4. Anything else is replaced by the incoming value.
//!
//! Keys present only in the base are kept untouched.
//!
//! # Examples
//!
//! ```
//! use nestconf_store::{merge::merge_maps, MergeStrategy};
//! use serde_json::json;
//!
//! let base = json!({"server": {"port": 80, "hosts": ["a", "b"]}});
//! let incoming = json!({"server": {"port": 8080, "hosts": ["b", "c"]}});
//!
//! let merged = merge_maps(
//!     base.as_object().unwrap().clone(),
//!     incoming.as_object().unwrap(),
//!     MergeStrategy::MergeIndexed,
//! );
//! assert_eq!(
//!     serde_json::Value::Object(merged),
//!     json!({"server": {"port": 8080, "hosts": ["a", "b", "c"]}})
//! );
//! ```

use serde_json::{Map, Value};

use crate::strategy::MergeStrategy;
use crate::value::{is_associative, list_items};

/// Merge `incoming` on top of `base` and return the result.
pub fn merge_maps(
    mut base: Map<String, Value>,
    incoming: &Map<String, Value>,
    strategy: MergeStrategy,
) -> Map<String, Value> {
    merge_into(&mut base, incoming, strategy);
    base
}

/// Merge `incoming` on top of `base` in place.
pub fn merge_into(
    base: &mut Map<String, Value>,
    incoming: &Map<String, Value>,
    strategy: MergeStrategy,
) {
    for (key, value) in incoming {
        match base.get_mut(key) {
            Some(existing) => merge_value(key, existing, value, strategy),
            None => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_value(key: &str, existing: &mut Value, incoming: &Value, strategy: MergeStrategy) {
    if is_associative(existing) && is_associative(incoming) {
        if let (Value::Object(existing), Value::Object(incoming)) = (&mut *existing, incoming) {
            tracing::trace!(key, "Merging nested mappings");
            merge_into(existing, incoming, strategy);
        }
        return;
    }

    if strategy.merges_lists() {
        let combined = match (list_items(existing), list_items(incoming)) {
            (Some(left), Some(right)) => Some(dedup_values(left.into_iter().chain(right))),
            _ => None,
        };
        if let Some(combined) = combined {
            *existing = Value::Array(combined);
            return;
        }
    }

    *existing = incoming.clone();
}

/// Collect values in order, dropping any value equal to one already kept.
///
/// `Value` is not `Hash`, so this compares against every kept value;
/// quadratic in list length.
fn dedup_values<'a>(values: impl IntoIterator<Item = &'a Value>) -> Vec<Value> {
    let mut unique: Vec<Value> = Vec::new();
    for value in values {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    }
    unique
}
