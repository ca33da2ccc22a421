use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse {path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path} does not hold a JSON object")]
    NotAnObject { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("malformed structured value under key {key:?}: {source}")]
    MalformedValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Navigation(#[from] NavError),
}

/// Failures of the navigation stack. Both variants indicate a bug: an active
/// session always holds a root frame whose descendants resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("navigation stack is empty")]
    EmptyStack,
    #[error("frame pointer {pointer:?} does not resolve in the snapshot")]
    DanglingFrame { pointer: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("no key-value source given (pass a path or set `source` in the config)")]
    MissingSource,
    #[error("panel_height must be at least {min}, got {got}")]
    PanelTooSmall { min: u16, got: u16 },
    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("terminal: {0}")]
    Io(#[from] io::Error),
    #[error("encode dump: {0}")]
    Dump(#[from] serde_json::Error),
}
