//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The logger's line buffer could not be reserved
    #[error("Failed to allocate logger state ({requested} bytes)")]
    Allocation {
        requested: usize,
        #[source]
        source: std::collections::TryReserveError,
    },

    /// Log file could not be opened for writing
    #[error("Failed to open log file '{path}' for writing: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (style configuration) error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LoggerError {
    /// Create an allocation error for a failed reservation
    pub fn allocation(requested: usize, source: std::collections::TryReserveError) -> Self {
        LoggerError::Allocation { requested, source }
    }

    /// Create an open error with the offending path
    pub fn open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Open {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Returns `true` for failures that happened while opening a log file
    pub fn is_open_error(&self) -> bool {
        matches!(self, LoggerError::Open { .. })
    }
}
