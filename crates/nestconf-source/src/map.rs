//! In-memory configuration source

use serde_json::{Map, Value};

use crate::{Error, Result, Source};

/// A source that hands out a mapping built in memory.
///
/// # Examples
///
/// ```
/// use nestconf_source::{MapSource, Source};
/// use serde_json::json;
///
/// let source = MapSource::try_from(json!({"key": "value"})).unwrap();
/// assert_eq!(source.fetch().unwrap()["key"], json!("value"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSource {
    content: Map<String, Value>,
}

impl MapSource {
    /// Create a source that returns `content` on every fetch.
    pub fn new(content: Map<String, Value>) -> Self {
        Self { content }
    }

    /// Borrow the mapping this source returns.
    pub fn content(&self) -> &Map<String, Value> {
        &self.content
    }
}

impl Source for MapSource {
    fn fetch(&self) -> Result<Map<String, Value>> {
        Ok(self.content.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory mapping ({} keys)", self.content.len())
    }
}

impl From<Map<String, Value>> for MapSource {
    fn from(content: Map<String, Value>) -> Self {
        Self::new(content)
    }
}

impl TryFrom<Value> for MapSource {
    type Error = Error;

    fn try_from(value: Value) -> std::result::Result<Self, Self::Error> {
        match value {
            Value::Object(content) => Ok(Self::new(content)),
            _ => Err(Error::NotAMapping {
                origin: "in-memory value".to_string(),
            }),
        }
    }
}
