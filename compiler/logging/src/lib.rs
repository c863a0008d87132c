#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for the Atlas binaries.
//!
//! Log lines go to stderr (or a file) so that snippets and JSON printed on
//! stdout stay clean. `RUST_LOG`, when set, overrides the configured level.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The level is not a valid filter directive.
    #[error("Invalid log level `{level}`: {source}")]
    Level {
        /// Rejected level
        level: String,
        /// Parser error
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    /// The log file could not be created.
    #[error("Failed to open log file: {0}")]
    File(#[from] std::io::Error),
}

/// Build the filter for `level`, letting `RUST_LOG` win when present.
pub fn filter(level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|source| LoggingError::Level { level: level.to_string(), source })
}

/// Install a stderr subscriber at `level`.
///
/// A second call is a no-op; the first subscriber stays in place.
pub fn init(level: &str) -> Result<(), LoggingError> {
    let filter = filter(level)?;
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
    Ok(())
}

/// Install a subscriber at `level` that appends to `path`.
pub fn init_with_file(level: &str, path: &Path) -> Result<(), LoggingError> {
    let filter = filter(level)?;
    let file = File::options().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}
