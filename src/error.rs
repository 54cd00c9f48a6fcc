//! Error types for the signature pad

use thiserror::Error;

/// Result type alias for pad operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the signature pad
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A stored encoded value could not be decoded as an image
    #[error("Invalid stored value: {0}")]
    InvalidStoredValue(String),

    /// Failed to encode the surface as an image
    #[error("Encoding failed: {0}")]
    EncodeError(String),

    /// Stroke input arrived out of sequence
    #[error("Stroke sequence error: {0}")]
    StrokeSequence(String),

    /// Failed to write an exported file
    #[error("Export failed: {0}")]
    ExportError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ExportError(err.to_string())
    }
}
