use std::fs;
use std::path::{Path, PathBuf};

use super::KeyValueSource;
use crate::error::SourceError;

/// One regular file per entry: the file name is the key, its contents the value.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn read_value(&self, path: &Path) -> Result<String, SourceError> {
        let bytes = fs::read(path).map_err(|err| io_error(path, err))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SourceError {
    SourceError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn is_entry_name(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('.')
}

impl KeyValueSource for DirectorySource {
    fn keys(&self) -> Result<Vec<String>, SourceError> {
        let read_dir = fs::read_dir(&self.root).map_err(|err| io_error(&self.root, err))?;
        let mut keys = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|err| io_error(&self.root, err))?;
            // Symlinks are followed, as `get` follows them; dangling ones are skipped.
            let is_file = fs::metadata(entry.path()).is_ok_and(|meta| meta.is_file());
            if !is_file {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if is_entry_name(&name) {
                keys.push(name);
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn get(&self, key: &str) -> Result<Option<String>, SourceError> {
        if !is_entry_name(key) || key.contains(['/', '\\']) {
            return Ok(None);
        }
        let path = self.root.join(key);
        if !path.is_file() {
            return Ok(None);
        }
        self.read_value(&path).map(Some)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
