use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::AppError;

/// Installs a file-backed `fmt` subscriber when a log file is configured.
/// The terminal owns stdout and stderr, so without a file nothing is logged.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &Config) -> Result<bool, AppError> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => config.log_filter()?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}
