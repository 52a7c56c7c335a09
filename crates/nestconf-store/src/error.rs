//! Error types for nestconf-store

/// Result type for nestconf-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nestconf-store operations
///
/// Path accessors on [`crate::NestedStore`] never fail; these errors only
/// come from conversions into and out of the store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown merge strategy: {strategy}")]
    InvalidStrategy { strategy: String },

    #[error("Expected a mapping at the store root, found {found}")]
    NotAMapping { found: &'static str },

    #[error("Failed to deserialize value at {path}: {source}")]
    Deserialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn deserialize(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Deserialize {
            path: path.into(),
            source,
        }
    }
}
