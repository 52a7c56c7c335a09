//! Hierarchical configuration assembled from layered sources
//!
//! Register sources on a [`ConfigBuilder`], optionally binding each one
//! to a target path, then build a [`NestedStore`] by merging them in
//! registration order.
//!
//! # Example
//!
//! ```
//! use nestconf::{ConfigBuilder, MapSource, MergeStrategy};
//! use serde_json::json;
//!
//! let defaults = MapSource::try_from(json!({"server": {"port": 80, "tags": ["web"]}}))?;
//! let overrides = MapSource::try_from(json!({"server": {"port": 8080, "tags": ["api"]}}))?;
//! let plugin = MapSource::try_from(json!({"enabled": true}))?;
//!
//! let config = ConfigBuilder::new()
//!     .add_source(defaults)
//!     .add_source(overrides)
//!     .add_source_at(plugin, "plugins.audit")
//!     .build_with(MergeStrategy::MergeIndexed)?;
//!
//! assert_eq!(config.get("server.port"), Some(&json!(8080)));
//! assert_eq!(config.get("server.tags"), Some(&json!(["web", "api"])));
//! assert!(config.has("plugins.audit.enabled"));
//! # Ok::<(), nestconf::SourceError>(())
//! ```

pub mod builder;

pub use builder::ConfigBuilder;
pub use nestconf_source::{
    ContentParser, Error as SourceError, FileSource, MapSource, Result, Source,
};
pub use nestconf_store::{Error as StoreError, Map, MergeStrategy, NestedStore, Value};
