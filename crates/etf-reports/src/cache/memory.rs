use std::sync::RwLock;

use crate::errors::EtfDataError;
use crate::models::Snapshot;

use super::traits::SnapshotStore;

/// Process-local snapshot store.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    snapshot: RwLock<Option<Snapshot>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn id(&self) -> &'static str {
        "MEMORY"
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), EtfDataError> {
        let mut guard = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, EtfDataError> {
        let guard = self.snapshot.read().unwrap_or_else(|e| e.into_inner());
        guard.clone().ok_or(EtfDataError::CacheEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundRecord, Performance};

    #[test]
    fn test_empty_until_saved() {
        let store = InMemorySnapshotStore::new();
        assert!(matches!(store.load(), Err(EtfDataError::CacheEmpty)));

        let snapshot = Snapshot::capture(
            vec![FundRecord::new("VAS", "Vanguard", Performance::default(), 0.1, 1.0)],
            None,
        );
        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), snapshot);
    }
}
