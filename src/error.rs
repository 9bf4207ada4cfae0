//! Error types for MFCC extraction

use std::fmt;

/// Errors that can occur while extracting or persisting features
///
/// Numeric edge cases inside the pipeline (zero filter denominators,
/// non-positive energies, too-short input) are not errors; they are guarded
/// in place and yield defined output.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// Configuration rejected before any processing starts
    InvalidConfig(String),

    /// Invalid input parameters (e.g. a zero sample rate)
    InvalidInput(String),

    /// Audio decoding error
    DecodingError(String),

    /// Feature store read/write error
    StorageError(String),
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ExtractionError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            ExtractionError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
            ExtractionError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractionError {}

impl From<std::io::Error> for ExtractionError {
    fn from(err: std::io::Error) -> Self {
        ExtractionError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for ExtractionError {
    fn from(err: serde_json::Error) -> Self {
        ExtractionError::StorageError(err.to_string())
    }
}
