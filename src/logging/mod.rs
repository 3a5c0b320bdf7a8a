//! Tracing subscriber initialization.
//!
//! The design view core only emits `tracing` events; the host decides where
//! they go. The demo shell writes them to a file (watch it with `tail -f`)
//! or to stderr.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file, creating its directory if needed.
    File(PathBuf),
    /// Write to stderr at `warn` unless `RUST_LOG` says otherwise.
    Stderr,
}

/// Filter from `RUST_LOG`, falling back to `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Split a log file path into its directory and file name.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name.to_string()))
}

/// Initialize the global tracing subscriber.
///
/// Respects `RUST_LOG`, defaulting to `info`.
///
/// # Errors
/// * [`LoggingError::InvalidPath`] if a file target has no file name
/// * [`LoggingError::DirectoryCreation`] if the log directory can't be created
/// * [`LoggingError::SubscriberAlreadySet`] if a subscriber is already installed
pub fn init(target: &LogTarget) -> Result<(), LoggingError> {
    match target {
        LogTarget::File(log_path) => {
            let (directory, file_name) = split_log_path(log_path)?;
            std::fs::create_dir_all(&directory).map_err(|source| {
                LoggingError::DirectoryCreation {
                    path: directory.clone(),
                    source,
                }
            })?;

            let file_appender = tracing_appender::rolling::never(&directory, file_name);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter("info"))
                .with_writer(file_appender)
                .with_ansi(false)
                .try_init()
                .map_err(|_| LoggingError::SubscriberAlreadySet)
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|_| LoggingError::SubscriberAlreadySet),
    }
}
