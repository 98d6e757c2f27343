//! The journey controller: owns the current phase, persists forward
//! transitions, and resets the whole run.

use crate::core::phase::Phase;
use crate::core::store::JourneyStore;

/// Owns the current phase of the experience.
///
/// The in-memory phase is always authoritative; persistence is
/// fire-and-forget with last-write-wins. A failing store degrades to
/// "every visit starts at Gateway", never to an error.
pub struct JourneyController {
    phase: Phase,
    store: JourneyStore,
}

impl JourneyController {
    pub fn new(store: JourneyStore) -> Self {
        Self {
            phase: Phase::Gateway,
            store,
        }
    }

    /// The currently active phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Restore a previous run, if a valid saved phase exists.
    /// Called once at startup; invalid or missing state leaves Gateway.
    pub fn initialize(&mut self) {
        if let Some(saved) = self.store.load() {
            log::info!("resuming journey at phase {}", saved.index());
            self.phase = saved;
        }
    }

    /// Move to `target` and persist the transition.
    ///
    /// The phase change takes effect unconditionally; a persistence
    /// failure is logged inside the store and swallowed. Targets come
    /// from scene completion signals, which by construction name only
    /// the canonical successor.
    pub fn advance(&mut self, target: Phase) {
        self.phase = target;
        self.store.save(target);
    }

    /// Return to Gateway and forget any saved progress.
    pub fn reset(&mut self) {
        self.phase = Phase::Gateway;
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{MemoryStorage, StorageBackend, StorageError};

    struct FailingStorage;

    impl StorageBackend for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }
        fn write(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Backend("quota exceeded".into()))
        }
        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    fn controller_with(cells: MemoryStorage) -> JourneyController {
        JourneyController::new(JourneyStore::new(Box::new(cells)))
    }

    #[test]
    fn fresh_start_is_gateway() {
        let mut c = controller_with(MemoryStorage::new());
        c.initialize();
        assert_eq!(c.phase(), Phase::Gateway);
    }

    #[test]
    fn invalid_saved_values_start_at_gateway() {
        for junk in ["banana", "6", "-1", ""] {
            let cells = MemoryStorage::new();
            cells
                .clone()
                .write(JourneyStore::DEFAULT_KEY, junk)
                .unwrap();
            let mut c = controller_with(cells);
            c.initialize();
            assert_eq!(c.phase(), Phase::Gateway, "saved {junk:?}");
        }
    }

    #[test]
    fn every_valid_saved_value_restores() {
        for phase in Phase::ALL {
            let cells = MemoryStorage::new();
            cells
                .clone()
                .write(JourneyStore::DEFAULT_KEY, &phase.index().to_string())
                .unwrap();
            let mut c = controller_with(cells);
            c.initialize();
            assert_eq!(c.phase(), phase);
        }
    }

    #[test]
    fn unreadable_store_starts_at_gateway() {
        let mut c = JourneyController::new(JourneyStore::new(Box::new(FailingStorage)));
        c.initialize();
        assert_eq!(c.phase(), Phase::Gateway);
    }

    #[test]
    fn advance_takes_effect_and_persists() {
        let cells = MemoryStorage::new();
        let mut c = controller_with(cells.clone());
        c.advance(Phase::HeartFill);
        assert_eq!(c.phase(), Phase::HeartFill);
        assert_eq!(cells.peek(JourneyStore::DEFAULT_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn advance_survives_a_failing_store() {
        let mut c = JourneyController::new(JourneyStore::new(Box::new(FailingStorage)));
        c.advance(Phase::ScratchReveal);
        assert_eq!(c.phase(), Phase::ScratchReveal);
    }

    #[test]
    fn reset_returns_to_gateway_and_clears() {
        let cells = MemoryStorage::new();
        let mut c = controller_with(cells.clone());
        c.advance(Phase::Letter);
        c.reset();
        assert_eq!(c.phase(), Phase::Gateway);
        assert_eq!(cells.peek(JourneyStore::DEFAULT_KEY), None);
    }

    #[test]
    fn reset_survives_a_failing_store() {
        let mut c = JourneyController::new(JourneyStore::new(Box::new(FailingStorage)));
        c.advance(Phase::Letter);
        c.reset();
        assert_eq!(c.phase(), Phase::Gateway);
    }

    #[test]
    fn forward_run_visits_every_phase_in_order() {
        let mut c = controller_with(MemoryStorage::new());
        c.initialize();
        let mut visited = vec![c.phase()];
        while let Some(next) = c.phase().next() {
            c.advance(next);
            visited.push(c.phase());
        }
        assert_eq!(visited, Phase::ALL);
    }
}
