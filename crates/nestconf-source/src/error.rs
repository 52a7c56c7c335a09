//! Error types for nestconf-source

use std::path::PathBuf;

/// Result type for nestconf-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching configuration from a source
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to fetch content from file: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} content from {origin}: {message}")]
    Format {
        origin: String,
        format: String,
        message: String,
    },

    #[error("Configuration from {origin} is not a mapping")]
    NotAMapping { origin: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(
        origin: impl Into<String>,
        format: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Format {
            origin: origin.into(),
            format: format.into(),
            message: message.into(),
        }
    }
}
