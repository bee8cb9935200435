//! Core error types for opptime-core.
//!
//! Each concern (timer, storage, export, configuration) has its own
//! thiserror enum; [`CoreError`] aggregates them for callers that do not
//! care which layer failed.

use std::path::PathBuf;
use thiserror::Error;

use crate::timer::TimerState;

/// Core error type for opptime-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer transition errors
    #[error("Timer error: {0}")]
    Timer(#[from] TimerError),

    /// Persistence errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validation errors raised before a state change is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was empty
    #[error("Missing required field '{field}': {message}")]
    MissingField { field: String, message: String },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl ValidationError {
    pub fn missing(field: &str, message: &str) -> Self {
        ValidationError::MissingField {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Errors returned by [`crate::TimerSession`] commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command is not valid in the current state
    #[error("cannot {action} while timer is {from:?}")]
    InvalidTransition {
        from: TimerState,
        action: &'static str,
    },
}

/// Persistence port errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read the log document
    #[error("Failed to load time logs from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the log document
    #[error("Failed to save time logs to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document exists but is not a valid record list
    #[error("Corrupt time log document: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Failure reported by a non-file backend
    #[error("{0}")]
    Backend(String),
}

/// Errors raised while writing export files.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
