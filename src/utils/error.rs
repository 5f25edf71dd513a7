use thiserror::Error;

/// Errors from the configuration and command-line surfaces.
///
/// Element and sequence operations never fail; they fall back to zero values instead.
#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

impl SequenceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SequenceError::IoError(_) => ErrorCategory::Io,
            SequenceError::ConfigError { .. }
            | SequenceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SequenceError::IoError(e) => format!("Could not read file: {}", e),
            SequenceError::ConfigError { message } => format!("Bad configuration: {}", message),
            SequenceError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;
