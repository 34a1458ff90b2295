//! Unified error types for chatpulse.
//!
//! The analysis engine itself never fails: malformed transcript lines are
//! dropped silently. Errors only surface at the boundary with the transcript
//! store and when a report is serialized, and they all live in a single
//! [`ChatpulseError`] enum.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Request handlers** get a [`status_code`](ChatpulseError::status_code)
//!   to answer an HTTP caller with
//! - **Developers** get source error chains for debugging

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatpulse operations.
///
/// # Example
///
/// ```rust
/// use chatpulse::error::Result;
/// use chatpulse::Report;
///
/// fn my_function() -> Result<Report> {
///     Ok(chatpulse::analyze_lines(Vec::<&str>::new()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatpulseError>;

/// The error type for all chatpulse operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatpulseError {
    /// The request did not name a transcript.
    #[error("No filename given")]
    MissingFilename,

    /// The request body could not be understood.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },

    /// The store has no transcript under this name.
    #[error("Transcript not found: {filename}")]
    NotFound {
        /// The requested name
        filename: String,
    },

    /// The name cannot be used as a key in a flat store.
    ///
    /// Rejected names include anything with path separators, `..`
    /// components, or control characters.
    #[error("Invalid filename '{filename}': {reason}")]
    InvalidFilename {
        /// The rejected name
        filename: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// An I/O error occurred while reading or writing the store.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A stored transcript is not valid UTF-8.
    #[error("Transcript '{filename}' is not valid UTF-8: {source}")]
    Utf8 {
        /// The transcript name
        filename: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatpulseError {
    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ChatpulseError::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(filename: impl Into<String>) -> Self {
        ChatpulseError::NotFound {
            filename: filename.into(),
        }
    }

    /// Creates an invalid filename error.
    pub fn invalid_filename(filename: impl Into<String>, reason: &'static str) -> Self {
        ChatpulseError::InvalidFilename {
            filename: filename.into(),
            reason,
        }
    }

    /// Creates a UTF-8 error for a stored transcript.
    pub fn utf8(filename: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatpulseError::Utf8 {
            filename: filename.into(),
            source,
        }
    }

    /// Returns `true` if the request had no filename.
    pub fn is_missing_filename(&self) -> bool {
        matches!(self, ChatpulseError::MissingFilename)
    }

    /// Returns `true` if the transcript does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChatpulseError::NotFound { .. })
    }

    /// Returns `true` if the filename was rejected.
    pub fn is_invalid_filename(&self) -> bool {
        matches!(self, ChatpulseError::InvalidFilename { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatpulseError::Io(_))
    }

    /// HTTP status an RPC host should answer with.
    ///
    /// ```rust
    /// use chatpulse::ChatpulseError;
    ///
    /// assert_eq!(ChatpulseError::MissingFilename.status_code(), 400);
    /// assert_eq!(ChatpulseError::not_found("chat.txt").status_code(), 404);
    /// ```
    pub fn status_code(&self) -> u16 {
        match self {
            ChatpulseError::MissingFilename
            | ChatpulseError::InvalidRequest { .. }
            | ChatpulseError::InvalidFilename { .. } => 400,
            ChatpulseError::NotFound { .. } => 404,
            ChatpulseError::Io(_) | ChatpulseError::Utf8 { .. } | ChatpulseError::Json(_) => 500,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
