//! Error types for salescope

use thiserror::Error;

/// Main error type for salescope
#[derive(Error, Debug)]
pub enum SalesError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for salescope operations
pub type Result<T> = std::result::Result<T, SalesError>;
