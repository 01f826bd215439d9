//! Unified error types for chatstat.
//!
//! Segmenting a chat log never fails: unrecognised lines simply become
//! continuation text. Errors only come from the edges of the pipeline,
//! reading the export and writing tables or reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::MessageRecord;
///
/// fn load() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist or can't be read
    /// - The export is not valid UTF-8
    /// - The output file can't be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export file could not be opened.
    #[error("Cannot open chat export {}: {source}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output file could not be created.
    #[error("Cannot create output file {}: {source}", path.display())]
    Create {
        /// Path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A requested format or setting is not usable.
    ///
    /// Raised for unknown output extensions or output formats whose
    /// feature is disabled.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being configured (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for ChatstatError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates an error for an export that could not be opened.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatError::Open {
            path: path.into(),
            source,
        }
    }

    /// Creates an error for an output file that could not be created.
    pub fn create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatstatError::Create {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error, including a failed open or create.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ChatstatError::Io(_) | ChatstatError::Open { .. } | ChatstatError::Create { .. }
        )
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatError::InvalidFormat { .. })
    }
}
