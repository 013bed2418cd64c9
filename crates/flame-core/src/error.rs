//! Error types for the Flame Language dojo

use thiserror::Error;

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for the dojo
#[derive(Error, Debug)]
pub enum Error {
    /// Input that must carry content was blank after trimming
    #[error("{0}")]
    EmptyInput(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Card already answered: {0}")]
    AlreadyAnswered(String),

    #[error("Capability unavailable: {0}")]
    CapabilityUnavailable(String),

    #[error("Capability error: {0}")]
    Capability(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
