//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid language rules or vocabulary
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    /// Batch scheduling error
    #[error("Processing error: {0}")]
    Processing(#[from] crate::processing::ProcessingError),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Input rejected before processing
    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
