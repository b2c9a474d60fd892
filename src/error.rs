//! Error types for ecb-rates

use thiserror::Error;

/// Main error type for ecb-rates
#[derive(Error, Debug)]
pub enum EcbRatesError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type alias for ecb-rates operations
pub type Result<T> = std::result::Result<T, EcbRatesError>;
