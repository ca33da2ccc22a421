pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod headless;
pub mod logging;
pub mod runtime;
pub mod source;
pub mod state;
pub mod terminal;
pub mod ui;

pub use config::Config;
pub use error::{AppError, ConfigError, LoadError, NavError, SourceError};
pub use runtime::Runtime;
pub use source::{KeyValueSource, MemorySource, SourceKind};
pub use state::{AppState, ViewerPanel};
