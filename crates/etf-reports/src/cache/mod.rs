//! Snapshot persistence.
//!
//! The last successful acquisition is kept as one [`Snapshot`](crate::models::Snapshot)
//! document, replaced wholesale on every save.

mod file;
mod memory;
mod traits;

pub use file::{FileSnapshotStore, DEFAULT_SNAPSHOT_FILE};
pub use memory::InMemorySnapshotStore;
pub use traits::SnapshotStore;
