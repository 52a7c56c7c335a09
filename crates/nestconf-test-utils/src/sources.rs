//! Sources with observable behaviour for builder tests.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use nestconf_source::{Error, MapSource, Result, Source};
use serde_json::{Map, Value};

/// Always fails with a not-found I/O error for `path`.
#[derive(Debug, Clone)]
pub struct FailingSource {
    path: PathBuf,
}

impl FailingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Source for FailingSource {
    fn fetch(&self) -> Result<Map<String, Value>> {
        Err(Error::io(
            &self.path,
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        ))
    }
}

/// Returns a fixed mapping and counts how often it was fetched.
///
/// Clones share the counter, so a test can keep one handle and give the
/// other to a builder.
#[derive(Debug, Clone)]
pub struct CountingSource {
    inner: MapSource,
    fetches: Rc<Cell<usize>>,
}

impl CountingSource {
    /// # Panics
    ///
    /// Panics when `content` is not a JSON object.
    pub fn new(content: Value) -> Self {
        Self {
            inner: MapSource::try_from(content).expect("CountingSource::new: expected an object"),
            fetches: Rc::new(Cell::new(0)),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl Source for CountingSource {
    fn fetch(&self) -> Result<Map<String, Value>> {
        self.fetches.set(self.fetches.get() + 1);
        self.inner.fetch()
    }
}
