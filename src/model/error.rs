//! Error types for the designview crate.
//!
//! The design view core itself has no recoverable failures: view modes are a
//! closed enum and every capability lookup fails soft. Errors only arise in the
//! ambient layers around it.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the `designview` binary
//!   - [`ConfigError`](crate::config::ConfigError) - config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - tracing setup failures
//!   - `std::io::Error` - writing the preview to stdout
//! - [`ParseEnumError`] - unknown name for one of the model enums

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Top-level error for the demo shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Output failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An enum name that did not match any variant.
///
/// # Examples
///
/// ```
/// use designview::model::ViewMode;
///
/// let err = "triple".parse::<ViewMode>().unwrap_err();
/// assert!(err.to_string().contains("dual-vertical"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    /// Human name of the enum being parsed.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    /// Comma-separated accepted names.
    pub expected: &'static str,
}

impl ParseEnumError {
    /// Build an error for `value` rejected by the `kind` parser.
    pub fn new(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}
