//! Directory-backed transcript store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{TranscriptStore, validate_filename};
use crate::config::StoreConfig;
use crate::error::{ChatpulseError, Result};

/// Stores each transcript as a file directly inside `root`.
///
/// The directory is created on the first upload.
///
/// ```rust,no_run
/// use chatpulse::storage::{DirectoryStore, TranscriptStore};
///
/// let store = DirectoryStore::new("uploads");
/// store.put("chat.txt", b"01.01.2024, 10:00 - Ali: selam")?;
/// # Ok::<(), chatpulse::ChatpulseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Creates a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a store from configuration.
    pub fn with_config(config: &StoreConfig) -> Self {
        Self::new(config.root.clone())
    }

    /// Returns the store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, filename: &str) -> Result<PathBuf> {
        validate_filename(filename)?;
        Ok(self.root.join(filename))
    }
}

impl Default for DirectoryStore {
    fn default() -> Self {
        Self::with_config(&StoreConfig::default())
    }
}

impl TranscriptStore for DirectoryStore {
    fn name(&self) -> &'static str {
        "directory"
    }

    fn put(&self, filename: &str, content: &[u8]) -> Result<()> {
        let path = self.path_for(filename)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&path, content)?;
        debug!(path = %path.display(), bytes = content.len(), "transcript stored");
        Ok(())
    }

    fn get(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.path_for(filename)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ChatpulseError::not_found(filename))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn contains(&self, filename: &str) -> Result<bool> {
        let path = self.path_for(filename)?;
        Ok(path.is_file())
    }

    fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
