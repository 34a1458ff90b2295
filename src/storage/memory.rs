//! In-memory transcript store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{TranscriptStore, validate_filename};
use crate::error::{ChatpulseError, Result};

/// Keeps transcripts in a map guarded by a lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blobs: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored transcripts.
    pub fn len(&self) -> usize {
        self.blobs.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TranscriptStore for MemoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn put(&self, filename: &str, content: &[u8]) -> Result<()> {
        validate_filename(filename)?;
        self.blobs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(filename.to_string(), content.to_vec());
        Ok(())
    }

    fn get(&self, filename: &str) -> Result<Vec<u8>> {
        validate_filename(filename)?;
        self.blobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(filename)
            .cloned()
            .ok_or_else(|| ChatpulseError::not_found(filename))
    }

    fn contains(&self, filename: &str) -> Result<bool> {
        validate_filename(filename)?;
        Ok(self
            .blobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(filename))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self
            .blobs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        Ok(names)
    }
}
