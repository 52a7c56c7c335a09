//! File-backed configuration sources
//!
//! Reading a file and interpreting its content are separate steps.
//! [`FileSource`] does the reading; a [`ContentParser`] turns the text into
//! a mapping. Supporting a new file format means writing a parser, not a
//! new source.
//!
//! # Examples
//!
//! ```no_run
//! use nestconf_source::{ContentParser, FileSource, Result, Source};
//! use serde_json::{Map, Value};
//! use std::path::Path;
//!
//! struct LineParser;
//!
//! impl ContentParser for LineParser {
//!     fn format(&self) -> &str {
//!         "lines"
//!     }
//!
//!     fn parse(&self, content: &str, _origin: &Path) -> Result<Map<String, Value>> {
//!         Ok(content
//!             .lines()
//!             .filter_map(|line| line.split_once('='))
//!             .map(|(key, value)| (key.trim().to_string(), Value::from(value.trim())))
//!             .collect())
//!     }
//! }
//!
//! let source = FileSource::new("settings.conf", LineParser);
//! let settings = source.fetch()?;
//! # Ok::<(), nestconf_source::Error>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::{Error, Result, Source};

/// Turns the raw text of a configuration file into a mapping.
pub trait ContentParser {
    /// Name of the format, used in error messages and logs.
    fn format(&self) -> &str;

    /// Parse file content into a mapping.
    ///
    /// `origin` is the file the content was read from. Implementations
    /// should report failures with [`Error::format`].
    fn parse(&self, content: &str, origin: &Path) -> Result<Map<String, Value>>;
}

impl<P: ContentParser + ?Sized> ContentParser for Box<P> {
    fn format(&self) -> &str {
        (**self).format()
    }

    fn parse(&self, content: &str, origin: &Path) -> Result<Map<String, Value>> {
        (**self).parse(content, origin)
    }
}

/// A source that reads a file and hands its content to a parser.
#[derive(Debug, Clone)]
pub struct FileSource<P> {
    path: PathBuf,
    parser: P,
}

impl<P: ContentParser> FileSource<P> {
    pub fn new(path: impl Into<PathBuf>, parser: P) -> Self {
        Self {
            path: path.into(),
            parser,
        }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parser applied to the file content.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Read the raw text of the file.
    ///
    /// Fails with [`Error::Io`] naming the path when the file cannot be
    /// read.
    pub fn fetch_content(&self) -> Result<String> {
        tracing::debug!(path = ?self.path, "Reading configuration file");
        fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))
    }
}

impl<P: ContentParser> Source for FileSource<P> {
    fn fetch(&self) -> Result<Map<String, Value>> {
        let content = self.fetch_content()?;
        self.parser.parse(&content, &self.path)
    }

    fn describe(&self) -> String {
        format!("{} file {}", self.parser.format(), self.path.display())
    }
}
