//! Error types for the dojo
//!
//! Every failure that can leave a command half-done carries the path it
//! was working on, so the message printed by the binary is actionable.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dojo state handling
#[derive(Error, Debug)]
pub enum DojoError {
    /// Directory skeleton could not be created
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A state document could not be read
    #[error("Failed to read {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A state document or event could not be written
    #[error("Failed to write {}: {source}", path.display())]
    WriteDocument {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A state document exists but does not match its schema
    #[error("Failed to decode {}: {source}", path.display())]
    DecodeDocument {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Document has never been saved
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for dojo operations
pub type Result<T> = std::result::Result<T, DojoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_path() {
        let err = DojoError::CreateDir {
            path: PathBuf::from(".dojo/events"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains(".dojo/events"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_not_found_error() {
        let err = DojoError::NotFound("progress".to_string());
        assert_eq!(err.to_string(), "Document not found: progress");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: DojoError = io.into();
        assert!(matches!(err, DojoError::IoError(_)));
    }
}
