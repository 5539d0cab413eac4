//! Error handling for wavchan
//!
//! Format errors are raised before any payload is transformed, so a failed
//! conversion never produces output.

use thiserror::Error;

/// Result type alias for wavchan operations
pub type Result<T> = std::result::Result<T, WavchanError>;

/// Main error type for wavchan operations
#[derive(Error, Debug)]
pub enum WavchanError {
    // Container Errors
    #[error("Malformed container: {reason}")]
    MalformedContainer { reason: String },

    #[error("Unsupported format: {details}")]
    UnsupportedFormat { details: String },

    #[error("Format mismatch: {details}")]
    FormatMismatch { details: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WavchanError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        WavchanError::MalformedContainer {
            reason: reason.into(),
        }
    }

    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WavchanError::MalformedContainer { .. } => "MALFORMED_CONTAINER",
            WavchanError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            WavchanError::FormatMismatch { .. } => "FORMAT_MISMATCH",
            WavchanError::FileNotFound { .. } => "FILE_NOT_FOUND",
            WavchanError::FileReadError { .. } => "FILE_READ_ERROR",
            WavchanError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            WavchanError::Io(_) => "IO_ERROR",
            WavchanError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::MalformedContainer { .. } => {
                "The file is not a valid PCM WAV file; re-export it as uncompressed WAV"
            }
            Self::UnsupportedFormat { .. } => {
                "Check the input: stereo operations need 16-bit stereo, decoding needs 32-bit mono"
            }
            Self::FormatMismatch { .. } => {
                "Both mono inputs must be 16-bit with the same sample rate and length"
            }
            Self::FileNotFound { .. } => "Check the file path is correct",
            Self::FileWriteError { .. } => "Check the output directory exists and is writable",
            _ => "Check the error details and try again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = WavchanError::malformed("bad tag");
        assert_eq!(err.error_code(), "MALFORMED_CONTAINER");
        assert_eq!(err.to_string(), "Malformed container: bad tag");

        let err = WavchanError::FormatMismatch {
            details: "rates differ".to_string(),
        };
        assert_eq!(err.error_code(), "FORMAT_MISMATCH");
    }

    #[test]
    fn test_recovery_hints() {
        let err = WavchanError::UnsupportedFormat {
            details: "8-bit".to_string(),
        };
        assert!(err.recovery_hint().contains("16-bit stereo"));

        let err = WavchanError::Io(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert_eq!(err.recovery_hint(), "Check the error details and try again");
    }
}
