//! # Application Error Types
//!
//! This module defines common error types used throughout the seasoning coverage crate.
//! The analyzer itself never fails; these errors cover configuration, image decoding
//! and file handling around it.

use std::fmt;

/// General application error type for consistent error handling
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Configuration validation errors
    Config(String),
    /// Input validation errors (arguments, paths, etc.)
    Validation(String),
    /// Image bytes could not be decoded
    ImageDecode(String),
    /// Visualization could not be encoded
    ImageEncode(String),
    /// File system errors
    FileSystem(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "[CONFIG] {}", msg),
            AppError::Validation(msg) => write!(f, "[VALIDATION] {}", msg),
            AppError::ImageDecode(msg) => write!(f, "[IMAGE_DECODE] {}", msg),
            AppError::ImageEncode(msg) => write!(f, "[IMAGE_ENCODE] {}", msg),
            AppError::FileSystem(msg) => write!(f, "[FILESYSTEM] {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => AppError::FileSystem(io.to_string()),
            image::ImageError::Encoding(e) => AppError::ImageEncode(e.to_string()),
            other => AppError::ImageDecode(other.to_string()),
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Standardized error logging utilities for consistent error reporting
pub mod error_logging {
    use tracing::error;

    /// Log image decoding/encoding errors with image context
    pub fn log_image_error(
        error: &impl std::fmt::Display,
        operation: &str,
        path: Option<&str>,
        byte_len: Option<usize>,
    ) {
        error!(
            error = %error,
            operation = %operation,
            path = ?path,
            byte_len = ?byte_len,
            "Image operation failed"
        );
    }

    /// Log file system errors with path and operation context
    pub fn log_filesystem_error(error: &impl std::fmt::Display, operation: &str, path: Option<&str>) {
        error!(
            error = %error,
            operation = %operation,
            path = ?path,
            "File system operation failed"
        );
    }

    /// Log configuration errors during startup/initialization
    pub fn log_config_error(error: &impl std::fmt::Display, config_key: &str, operation: &str) {
        error!(
            error = %error,
            config_key = %config_key,
            operation = %operation,
            "Configuration error"
        );
    }
}
