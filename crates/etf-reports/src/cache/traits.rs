use crate::errors::EtfDataError;
use crate::models::Snapshot;

/// Storage for the most recent snapshot.
///
/// Implementations replace the stored snapshot on every [`save`](Self::save);
/// there is no history and no merging.
pub trait SnapshotStore: Send + Sync {
    /// Identifier used in logs and diagnostics.
    fn id(&self) -> &'static str;

    /// Replace the stored snapshot.
    fn save(&self, snapshot: &Snapshot) -> Result<(), EtfDataError>;

    /// The most recently saved snapshot.
    ///
    /// Returns [`EtfDataError::CacheEmpty`] when nothing has been saved.
    fn load(&self) -> Result<Snapshot, EtfDataError>;
}
