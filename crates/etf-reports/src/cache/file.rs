//! JSON file snapshot store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

use crate::errors::EtfDataError;
use crate::models::Snapshot;

use super::traits::SnapshotStore;

/// File name of the snapshot inside a data directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "etf_data.json";

/// Snapshot stored as a JSON document at a fixed path.
///
/// Saves write a temporary file next to the target and rename it into place,
/// so a reader sees either the previous document or the new one in full.
#[derive(Clone, Debug)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/etf_data.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_SNAPSHOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn id(&self) -> &'static str {
        "FILE"
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), EtfDataError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, snapshot)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(
            "Saved snapshot with {} records to {}",
            snapshot.records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn load(&self) -> Result<Snapshot, EtfDataError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(EtfDataError::CacheEmpty),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }
}
