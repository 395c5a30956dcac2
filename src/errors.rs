//! Error types for the debug log sink
//!
//! Every stage of a `/log` request (framing, parsing, committing) returns a
//! `SinkError`; the HTTP layer maps it to a status code in `api_errors`.

use thiserror::Error;

/// Main error type for the log sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Framing error: {reason}")]
    Framing { reason: String },

    #[error("Parse error: {reason}")]
    Parse { reason: String },

    #[error("Invalid JSON body: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("Write failed: {operation} - {source}")]
    Write {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Mutex lock failed: {resource}")]
    MutexPoisoned { resource: String },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result alias used throughout the crate
pub type SinkResult<T> = Result<T, SinkError>;

impl SinkError {
    /// Missing or malformed request framing (Content-Length)
    pub fn framing(reason: impl Into<String>) -> Self {
        Self::Framing {
            reason: reason.into(),
        }
    }

    /// Body decoded but does not describe a log record
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    pub fn write(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            operation: operation.into(),
            source,
        }
    }

    pub fn mutex_poisoned(resource: impl Into<String>) -> Self {
        Self::MutexPoisoned {
            resource: resource.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SinkError {
    fn from(source: serde_json::Error) -> Self {
        SinkError::Json { source }
    }
}
