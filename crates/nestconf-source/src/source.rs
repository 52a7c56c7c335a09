//! The configuration source capability

use serde_json::{Map, Value};

use crate::Result;

/// Anything that can produce a mapping of configuration values.
///
/// Sources are fetched once per build, in registration order. A failed
/// fetch aborts the build.
pub trait Source {
    /// Produce the configuration mapping.
    fn fetch(&self) -> Result<Map<String, Value>>;

    /// Human-readable description of where the configuration comes from.
    fn describe(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<S: Source + ?Sized> Source for Box<S> {
    fn fetch(&self) -> Result<Map<String, Value>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn fetch(&self) -> Result<Map<String, Value>> {
        (**self).fetch()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
