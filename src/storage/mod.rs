//! Transcript storage.
//!
//! The analysis engine never touches the filesystem. Transcripts are
//! uploaded into, and read back from, a [`TranscriptStore`]: a flat
//! key-value blob store keyed by filename. The store is handed to the
//! request handler explicitly, so each caller decides where uploads live.
//!
//! - [`DirectoryStore`] - one file per transcript inside a directory
//! - [`MemoryStore`] - in-process map, for tests and embedding
//!
//! # Example
//!
//! ```rust
//! use chatpulse::storage::{MemoryStore, TranscriptStore};
//!
//! let store = MemoryStore::new();
//! store.put("sohbet.txt", b"01.01.2024, 10:00 - Ali: selam")?;
//!
//! assert!(store.contains("sohbet.txt")?);
//! assert_eq!(store.read_text("sohbet.txt")?, "01.01.2024, 10:00 - Ali: selam");
//! # Ok::<(), chatpulse::ChatpulseError>(())
//! ```

mod directory;
mod memory;

pub use directory::DirectoryStore;
pub use memory::MemoryStore;

use crate::error::{ChatpulseError, Result};

/// A flat blob store keyed by filename.
///
/// Implementations must reject names that fail [`validate_filename`] and
/// must report a missing blob as [`ChatpulseError::NotFound`].
pub trait TranscriptStore: Send + Sync {
    /// Human-readable store name, used in logs.
    fn name(&self) -> &'static str;

    /// Stores `content` under `filename`, replacing any previous blob.
    fn put(&self, filename: &str, content: &[u8]) -> Result<()>;

    /// Returns the blob stored under `filename`.
    fn get(&self, filename: &str) -> Result<Vec<u8>>;

    /// Returns `true` if a blob is stored under `filename`.
    fn contains(&self, filename: &str) -> Result<bool>;

    /// Names of all stored blobs, sorted.
    fn list(&self) -> Result<Vec<String>>;

    /// Returns the blob decoded as UTF-8.
    fn read_text(&self, filename: &str) -> Result<String> {
        let bytes = self.get(filename)?;
        String::from_utf8(bytes).map_err(|e| ChatpulseError::utf8(filename, e))
    }
}

/// Checks that `filename` is usable as a flat store key.
///
/// Empty names are reported as [`ChatpulseError::MissingFilename`];
/// names with path separators, `..`, or control characters as
/// [`ChatpulseError::InvalidFilename`].
///
/// ```rust
/// use chatpulse::storage::validate_filename;
///
/// assert!(validate_filename("WhatsApp Chat with Ali.txt").is_ok());
/// assert!(validate_filename("../secret").is_err());
/// assert!(validate_filename("").unwrap_err().is_missing_filename());
/// ```
pub fn validate_filename(filename: &str) -> Result<()> {
    if filename.trim().is_empty() {
        return Err(ChatpulseError::MissingFilename);
    }
    if filename.contains(['/', '\\']) {
        return Err(ChatpulseError::invalid_filename(
            filename,
            "path separators are not allowed",
        ));
    }
    if filename == "." || filename == ".." {
        return Err(ChatpulseError::invalid_filename(
            filename,
            "relative path components are not allowed",
        ));
    }
    if filename.chars().any(char::is_control) {
        return Err(ChatpulseError::invalid_filename(
            filename,
            "control characters are not allowed",
        ));
    }
    Ok(())
}
