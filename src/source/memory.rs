use indexmap::IndexMap;

use super::KeyValueSource;
use crate::error::SourceError;

/// In-memory store, enumerated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: IndexMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl KeyValueSource for MemorySource {
    fn keys(&self) -> Result<Vec<String>, SourceError> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, SourceError> {
        Ok(self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn describe(&self) -> String {
        format!("memory ({} entries)", self.entries.len())
    }
}
