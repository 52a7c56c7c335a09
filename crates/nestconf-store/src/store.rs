//! The nested configuration store

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::merge::{merge_into, merge_maps};
use crate::path::{get_at_path, parse_path, remove_at_path, set_at_path};
use crate::strategy::MergeStrategy;
use crate::value::{is_associative_map, kind_name};
use crate::{Error, Result};

/// A tree of configuration values addressed by dot-separated paths.
///
/// The root is always a mapping. Reads walk mappings by key and lists by
/// index segment; writes create missing levels on the way down.
///
/// # Examples
///
/// ```
/// use nestconf_store::NestedStore;
/// use serde_json::json;
///
/// let mut store = NestedStore::new();
/// store.set("database.host", "localhost");
/// store.set("database.port", 5432);
///
/// assert!(store.has("database.host"));
/// assert_eq!(store.get("database.port"), Some(&json!(5432)));
/// assert_eq!(store.get_or("database.user", json!("admin")), json!("admin"));
/// assert_eq!(store.all(), json!({"database": {"host": "localhost", "port": 5432}}));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NestedStore {
    root: Map<String, Value>,
}

impl NestedStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given mapping.
    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Get a snapshot of the whole store as a single mapping value.
    ///
    /// The returned value is a deep copy; changing it does not affect the
    /// store. Use [`NestedStore::as_map`] to read without copying.
    pub fn all(&self) -> Value {
        Value::Object(self.root.clone())
    }

    /// Borrow the root mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Consume the store and return its root mapping.
    pub fn into_map(self) -> Map<String, Value> {
        self.root
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Check whether the store has no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Check whether every segment of the path resolves.
    pub fn has(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Get the value at the given path.
    ///
    /// Returns `None` when a segment is missing or an intermediate value is
    /// a scalar. A stored `null` is returned as `Some(&Value::Null)`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get_at_path(&self.root, &parse_path(path))
    }

    /// Get a copy of the value at the given path, or `default` when the
    /// path does not resolve.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Deserialize the value at the given path into `T`.
    ///
    /// Returns `Ok(None)` when the path does not resolve.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        self.get(path)
            .map(|value| {
                serde_json::from_value(value.clone()).map_err(|e| Error::deserialize(path, e))
            })
            .transpose()
    }

    /// Set the value at the given path.
    ///
    /// Every level on the way down that does not hold an associative
    /// mapping (the root included) is replaced by an empty mapping first,
    /// discarding whatever scalar or list was there.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        if !is_associative_map(&self.root) {
            self.root.clear();
        }
        set_at_path(&mut self.root, &parse_path(path), value.into());
    }

    /// Remove the value at the given path.
    ///
    /// Does nothing when the path does not resolve. The parent mapping is
    /// kept even if it ends up empty.
    pub fn remove(&mut self, path: &str) {
        if remove_at_path(&mut self.root, &parse_path(path)).is_some() {
            tracing::trace!(path, "Removed configuration value");
        }
    }

    /// Remove every value from the store.
    pub fn clear(&mut self) {
        self.root = Map::new();
    }

    /// Merge another store into this one.
    ///
    /// With `path` set to `None` the other store is merged at the root.
    /// Otherwise it is merged on top of the mapping found at `path`; a list
    /// there is treated as a mapping keyed by index and anything else as an
    /// empty mapping. See [`crate::merge`] for the rules.
    pub fn merge(&mut self, other: &NestedStore, path: Option<&str>, strategy: MergeStrategy) {
        let Some(path) = path else {
            merge_into(&mut self.root, &other.root, strategy);
            return;
        };

        let base = match self.get(path) {
            Some(Value::Object(map)) => map.clone(),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item.clone()))
                .collect(),
            _ => Map::new(),
        };

        let merged = merge_maps(base, &other.root, strategy);
        self.set(path, Value::Object(merged));
    }
}

impl From<Map<String, Value>> for NestedStore {
    fn from(root: Map<String, Value>) -> Self {
        Self::from_map(root)
    }
}

impl TryFrom<Value> for NestedStore {
    type Error = Error;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(root) => Ok(Self::from_map(root)),
            other => Err(Error::NotAMapping {
                found: kind_name(&other),
            }),
        }
    }
}

impl From<NestedStore> for Value {
    fn from(store: NestedStore) -> Self {
        Value::Object(store.root)
    }
}
