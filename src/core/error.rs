//! Error types for core module
//!
//! Provides custom error types for settings loading and validation.
//! None of these stop the application: callers fall back to defaults and log.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// A setting parsed but holds an unusable value
    #[error("Invalid setting: {message}")]
    InvalidSetting { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
