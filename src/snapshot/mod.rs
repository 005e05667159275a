//! Snapshot persistence - write and reload the top-N result set.
//!
//! The snapshot is a pretty-printed JSON array of objects keyed by the exact
//! column names, so persist followed by load reproduces the same rows, values
//! and column names. The write is all-or-nothing: the JSON is serialized
//! fully in memory, written to a sibling temp file, then renamed over the
//! target. A failed write never leaves a partial snapshot behind.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SnapshotError, SnapshotResult};
use crate::models::EnrichedRecord;

/// Persist a snapshot to `path`, overwriting any existing file.
///
/// # Errors
/// [`SnapshotError::Write`] on any I/O failure; [`SnapshotError::Json`] if
/// serialization fails.
pub fn persist(snapshot: &[EnrichedRecord], path: &Path) -> SnapshotResult<()> {
    let content = serde_json::to_string_pretty(snapshot)?;

    let tmp_path = sibling_tmp_path(path);
    fs::write(&tmp_path, content).map_err(SnapshotError::Write)?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(SnapshotError::Write(e));
    }

    Ok(())
}

/// Reload a persisted snapshot.
///
/// # Errors
/// [`SnapshotError::Read`] if the file cannot be read,
/// [`SnapshotError::Json`] if it is not a valid snapshot.
pub fn load(path: &Path) -> SnapshotResult<Vec<EnrichedRecord>> {
    let content = fs::read_to_string(path).map_err(SnapshotError::Read)?;
    Ok(serde_json::from_str(&content)?)
}

/// Temp file next to the target, so the rename stays on one filesystem.
fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
