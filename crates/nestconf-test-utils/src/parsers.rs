//! Parsers used to exercise [`FileSource`](nestconf_source::FileSource).

use std::path::Path;

use nestconf_source::{ContentParser, Error, Result};
use serde_json::{Map, Value};

/// Wraps the whole file as `{"content": <text>}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextParser;

impl ContentParser for TextParser {
    fn format(&self) -> &str {
        "text"
    }

    fn parse(&self, content: &str, _origin: &Path) -> Result<Map<String, Value>> {
        let mut map = Map::new();
        map.insert("content".to_string(), Value::from(content));
        Ok(map)
    }
}

/// Parses a JSON object.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl ContentParser for JsonParser {
    fn format(&self) -> &str {
        "JSON"
    }

    fn parse(&self, content: &str, origin: &Path) -> Result<Map<String, Value>> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| Error::format(origin.display().to_string(), self.format(), e.to_string()))?;

        match value {
            Value::Object(map) => Ok(map),
            _ => Err(Error::NotAMapping {
                origin: origin.display().to_string(),
            }),
        }
    }
}

/// Parses a TOML document.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl ContentParser for TomlParser {
    fn format(&self) -> &str {
        "TOML"
    }

    fn parse(&self, content: &str, origin: &Path) -> Result<Map<String, Value>> {
        toml::from_str::<Map<String, Value>>(content)
            .map_err(|e| Error::format(origin.display().to_string(), self.format(), e.to_string()))
    }
}
