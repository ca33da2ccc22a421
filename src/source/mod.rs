mod directory;
mod json_file;
mod memory;

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::SourceError;

pub use directory::DirectorySource;
pub use json_file::JsonFileSource;
pub use memory::MemorySource;

/// Read-only access to an external string-keyed, string-valued store.
pub trait KeyValueSource {
    fn keys(&self) -> Result<Vec<String>, SourceError>;

    fn get(&self, key: &str) -> Result<Option<String>, SourceError>;

    /// All entries in enumeration order. Backends that can read everything at
    /// once override this so a load touches the store a single time.
    fn entries(&self) -> Result<Vec<(String, String)>, SourceError> {
        let mut out = Vec::new();
        for key in self.keys()? {
            if let Some(value) = self.get(&key)? {
                out.push((key, value));
            }
        }
        Ok(out)
    }

    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Auto,
    Json,
    Directory,
}

pub fn open_source(path: &Path, kind: SourceKind) -> Result<Box<dyn KeyValueSource>, SourceError> {
    let kind = match kind {
        SourceKind::Auto => {
            let meta = std::fs::metadata(path).map_err(|source| SourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if meta.is_dir() {
                SourceKind::Directory
            } else {
                SourceKind::Json
            }
        }
        other => other,
    };

    Ok(match kind {
        SourceKind::Directory => Box::new(DirectorySource::new(path)),
        _ => Box::new(JsonFileSource::new(path)),
    })
}
