//! `localStorage`-backed storage. Unavailable storage (disabled,
//! private browsing, quota) maps to soft errors the journey store
//! absorbs; the experience then simply starts at its first phase.

use journey_engine::{StorageBackend, StorageError};
use web_sys::Storage;

pub struct BrowserStorage;

impl BrowserStorage {
    pub fn new() -> Self {
        Self
    }

    /// Boxed, for handing to `JourneyStore`.
    pub fn boxed() -> Box<dyn StorageBackend> {
        Box::new(Self)
    }

    fn local_storage() -> Result<Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|err| StorageError::Backend(format!("{err:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|err| StorageError::Backend(format!("{err:?}")))
    }
}
