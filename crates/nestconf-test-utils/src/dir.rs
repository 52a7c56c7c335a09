//! [`ConfigDir`] fixture for file-backed source tests.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding configuration files.
///
/// # Example
///
/// ```rust,no_run
/// use nestconf_test_utils::ConfigDir;
///
/// let dir = ConfigDir::new();
/// let path = dir.write("app.json", r#"{"debug": true}"#);
/// assert!(path.is_file());
/// ```
pub struct ConfigDir {
    temp_dir: TempDir,
}

impl Default for ConfigDir {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigDir {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("ConfigDir::new: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `name` (relative to the root), creating parent
    /// directories. Returns the absolute path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("ConfigDir::write: failed to create parent");
        }
        fs::write(&path, content).expect("ConfigDir::write: failed to write file");
        path
    }

    /// Path of a file that does not exist in this directory.
    pub fn missing(&self, name: &str) -> PathBuf {
        let path = self.root().join(name);
        assert!(!path.exists(), "ConfigDir::missing: {} exists", path.display());
        path
    }
}
