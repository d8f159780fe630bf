//! Key/value persistence seam.
//!
//! The store only ever needs to load and save opaque byte blobs by key. The
//! SQLite-backed [`crate::db::Database`] is the durable implementation;
//! [`MemoryPersistence`] keeps everything in process and is what tests and
//! the `--ephemeral` CLI mode use.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use crate::error::{Result, WuyuError};

/// Storage key of the persisted user template list.
pub const USER_TEMPLATES_KEY: &str = "userTemplates";

/// Minimal byte-oriented key/value store.
pub trait Persistence {
    /// Returns the stored bytes, or `None` when the key was never written.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Stores `bytes` under `key`, replacing any previous value.
    fn save(&self, key: &str, bytes: &[u8]) -> Result<()>;
}

/// In-process persistence. Clones share the same underlying map, so a clone
/// handed to a second store sees everything the first one saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryPersistence {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| WuyuError::persistence(key, e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| WuyuError::persistence(key, e.to_string()))?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, bytes: &[u8]) -> Result<()> {
        (**self).save(key, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_loads_none() {
        let persistence = MemoryPersistence::new();
        assert_eq!(persistence.load("absent").unwrap(), None);
    }

    #[test]
    fn test_clones_share_entries() {
        let first = MemoryPersistence::new();
        let second = first.clone();

        first.save(USER_TEMPLATES_KEY, b"[]").unwrap();
        assert_eq!(
            second.load(USER_TEMPLATES_KEY).unwrap(),
            Some(b"[]".to_vec())
        );

        second.save(USER_TEMPLATES_KEY, b"[1]").unwrap();
        assert_eq!(first.load(USER_TEMPLATES_KEY).unwrap(), Some(b"[1]".to_vec()));
    }
}
