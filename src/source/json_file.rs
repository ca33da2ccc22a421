use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::KeyValueSource;
use crate::error::SourceError;

/// A dump of a key-value store as one JSON object.
///
/// String members are the stored values. Any other member is kept as its
/// compact JSON text, which is what a string store would have held for it.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_object(&self) -> Result<serde_json::Map<String, Value>, SourceError> {
        let text = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        if text.trim().is_empty() {
            return Ok(serde_json::Map::new());
        }
        let value: Value = serde_json::from_str(&text).map_err(|source| SourceError::Format {
            path: self.path.clone(),
            source,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(SourceError::NotAnObject {
                path: self.path.clone(),
            }),
        }
    }
}

fn stored_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl KeyValueSource for JsonFileSource {
    fn keys(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.read_object()?.into_iter().map(|(key, _)| key).collect())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        let mut map = self.read_object()?;
        Ok(map.remove(key).map(stored_text))
    }

    fn entries(&self) -> Result<Vec<(String, String)>, SourceError> {
        Ok(self
            .read_object()?
            .into_iter()
            .map(|(key, value)| (key, stored_text(value)))
            .collect())
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}
