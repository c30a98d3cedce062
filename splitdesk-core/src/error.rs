//! Error types for Splitdesk
//!
//! Each concern has its own `thiserror` enum; [`SplitdeskError`] wraps them
//! for callers that just want to bubble errors up.

use std::path::PathBuf;

use thiserror::Error;

pub use crate::content::{ContentError, ContentResult};
pub use crate::tracing::{TracingError, TracingResult};
pub use crate::workspace::SplitError;

/// Errors related to loading and saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a settings file
    #[error("Failed to read settings from {path}: {reason}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying error message
        reason: String,
    },

    /// Failed to parse a settings file
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    /// Failed to write a settings file
    #[error("Failed to write settings: {0}")]
    Write(String),

    /// A setting has an unusable value
    #[error("Invalid setting '{field}': {reason}")]
    Validation {
        /// Setting name
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// No platform configuration directory could be determined
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
}

/// Result type for settings operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum SplitdeskError {
    /// Settings error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Content provider error
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Pane structure error
    #[error("Layout error: {0}")]
    Split(#[from] SplitError),

    /// Logging setup error
    #[error("Tracing error: {0}")]
    Tracing(#[from] TracingError),
}

/// Result type using [`SplitdeskError`]
pub type Result<T> = std::result::Result<T, SplitdeskError>;
