//! Error types for the storefront core

use thiserror::Error;

/// Main error type for storefront core operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Malformed or disallowed API base URL
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// HTTP transport or non-2xx response from a collaborator
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using StoreError
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::InvalidBaseUrl("ftp://x".to_string());
        assert_eq!(format!("{}", err), "Invalid API base URL: ftp://x");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let store_err: StoreError = io_err.into();
        assert!(matches!(store_err, StoreError::Io(_)));
    }
}
