//! Nested configuration store for nestconf
//!
//! Holds configuration values in a tree of mappings addressed by
//! dot-separated paths, and merges trees under a selectable strategy for
//! conflicting lists.

pub mod error;
pub mod merge;
pub mod path;
pub mod store;
pub mod strategy;
pub mod value;

pub use error::{Error, Result};
pub use merge::{merge_into, merge_maps};
pub use store::NestedStore;
pub use strategy::MergeStrategy;

pub use serde_json::{Map, Value};
