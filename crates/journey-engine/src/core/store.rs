//! Durable storage for the journey's progress.
//!
//! A single string-encoded integer lives under one namespaced key. The
//! storage medium may be missing entirely (disabled local storage,
//! private browsing, quota) — every operation here fails soft so the
//! experience degrades to "always start at the first phase".

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::core::phase::Phase;

/// Why a storage operation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store does not exist in this environment.
    Unavailable,
    /// The backing store rejected the operation.
    Backend(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Backend(msg) => write!(f, "storage backend error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// A string key-value store. The browser bridge implements this over
/// `localStorage`; tests and native runs use [`MemoryStorage`].
pub trait StorageBackend {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same cells so a test can keep an
/// inspection handle while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    cells: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value under `key`, for inspection.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.cells.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cells.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.cells
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.cells.borrow_mut().remove(key);
        Ok(())
    }
}

/// Reads and writes the persisted phase rank under a fixed key.
///
/// All failures are absorbed here: `load` answers `None`, `save` and
/// `clear` log and return. Callers are never blocked on storage health.
pub struct JourneyStore {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl JourneyStore {
    pub const DEFAULT_KEY: &'static str = "journey.phase";

    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self::with_key(backend, Self::DEFAULT_KEY)
    }

    pub fn with_key(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The saved phase, or None for a missing key, unreadable store,
    /// non-numeric value, or out-of-range rank.
    pub fn load(&self) -> Option<Phase> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                log::warn!("could not read saved progress: {err}");
                return None;
            }
        };
        match raw.trim().parse::<u32>().ok().and_then(Phase::from_index) {
            Some(phase) => Some(phase),
            None => {
                log::warn!("ignoring invalid saved progress {raw:?}");
                None
            }
        }
    }

    /// Persist `phase`. Failures are logged and swallowed; the caller's
    /// in-memory state is already authoritative.
    pub fn save(&mut self, phase: Phase) {
        if let Err(err) = self.backend.write(&self.key, &phase.index().to_string()) {
            log::warn!("could not persist progress: {err}");
        }
    }

    /// Remove the saved phase, if any.
    pub fn clear(&mut self) {
        if let Err(err) = self.backend.remove(&self.key) {
            log::debug!("could not clear saved progress: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend that fails every operation, for degraded-storage tests.
    pub struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn load_absent_is_none() {
        let store = JourneyStore::new(Box::new(MemoryStorage::new()));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let cells = MemoryStorage::new();
        let mut store = JourneyStore::new(Box::new(cells.clone()));
        store.save(Phase::CatchGame);
        assert_eq!(cells.peek(JourneyStore::DEFAULT_KEY).as_deref(), Some("3"));
        assert_eq!(store.load(), Some(Phase::CatchGame));
    }

    #[test]
    fn garbage_values_load_as_none() {
        let cells = MemoryStorage::new();
        let store = JourneyStore::new(Box::new(cells.clone()));
        for junk in ["banana", "", "6", "42", "-1", "2.5"] {
            cells
                .clone()
                .write(JourneyStore::DEFAULT_KEY, junk)
                .unwrap();
            assert_eq!(store.load(), None, "value {junk:?} should not load");
        }
    }

    #[test]
    fn whitespace_around_value_is_tolerated() {
        let cells = MemoryStorage::new();
        let store = JourneyStore::new(Box::new(cells.clone()));
        cells.clone().write(JourneyStore::DEFAULT_KEY, " 4 ").unwrap();
        assert_eq!(store.load(), Some(Phase::ScratchReveal));
    }

    #[test]
    fn clear_removes_the_key() {
        let cells = MemoryStorage::new();
        let mut store = JourneyStore::new(Box::new(cells.clone()));
        store.save(Phase::Letter);
        store.clear();
        assert_eq!(cells.peek(JourneyStore::DEFAULT_KEY), None);
    }

    #[test]
    fn failing_backend_never_panics() {
        let mut store = JourneyStore::new(Box::new(FailingStorage));
        assert_eq!(store.load(), None);
        store.save(Phase::Gallery);
        store.clear();
    }

    #[test]
    fn custom_key_is_used() {
        let cells = MemoryStorage::new();
        let mut store = JourneyStore::with_key(Box::new(cells.clone()), "keepsake.phase");
        store.save(Phase::HeartFill);
        assert_eq!(cells.peek("keepsake.phase").as_deref(), Some("1"));
        assert_eq!(cells.peek(JourneyStore::DEFAULT_KEY), None);
    }
}
