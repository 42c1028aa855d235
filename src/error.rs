// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NormalizerError>;

#[derive(Error, Debug)]
pub enum NormalizerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File operation failed for {path}: {source}")]
    FileOperation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Listing parse error in {file}: {message}")]
    ListingParse { file: String, message: String },

    #[error("Reference data error: {0}")]
    ReferenceData(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NormalizerError::ListingParse {
            file: "feed.json".to_string(),
            message: "expected array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Listing parse error in feed.json: expected array"
        );

        let err = NormalizerError::Config("parallel_workers must be greater than 0".to_string());
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
