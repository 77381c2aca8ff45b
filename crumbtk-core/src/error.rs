//! # Error Types
//!
//! Breadcrumb operations themselves never fail: underflow clamps and
//! malformed items degrade to empty values. The types here cover the
//! fallible edges around them, which are configuration and strict context
//! encoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in crumbtk.
#[derive(Error, Debug)]
pub enum CrumbError {
    /// Configuration file was not found.
    #[error("Config file not found: {path:?}")]
    ConfigFileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Error parsing a configuration source.
    #[error("Failed to parse config {source_name}: {details}")]
    ConfigParse {
        /// Where the configuration came from (file path or env var).
        source_name: String,
        /// Details about the parse error.
        details: String,
    },

    /// Configuration parsed, but holds a value the widget cannot use.
    #[error("Invalid config: {message}")]
    InvalidConfig {
        /// Error message describing what is wrong.
        message: String,
    },

    /// A context value could not be serialized to JSON.
    #[error("Failed to encode segment context: {0}")]
    ContextEncode(#[source] serde_json::Error),

    /// A context attribute could not be decoded from JSON.
    #[error("Failed to decode segment context: {0}")]
    ContextDecode(#[source] serde_json::Error),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for crumbtk operations.
pub type CrumbResult<T> = Result<T, CrumbError>;

impl CrumbError {
    /// Create a config file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigFileNotFound { path: path.into() }
    }

    /// Create a config parse error.
    pub fn parse_error(source_name: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigParse {
            source_name: source_name.into(),
            details: details.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
