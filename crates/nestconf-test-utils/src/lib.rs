//! Shared test utilities for the nestconf workspace.
//!
//! Test-only crate, never published.
//!
//! # Modules
//!
//! - [`dir`]: [`ConfigDir`] temporary directory for configuration files
//! - [`parsers`]: small [`ContentParser`](nestconf_source::ContentParser) implementations
//! - [`sources`]: sources that fail or record how often they were fetched

pub mod dir;
pub mod parsers;
pub mod sources;

pub use dir::ConfigDir;
pub use parsers::{JsonParser, TextParser, TomlParser};
pub use sources::{CountingSource, FailingSource};
