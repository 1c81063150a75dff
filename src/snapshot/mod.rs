//! Snapshot subsystem: the persisted shape of a selection
//!
//! The logical persisted state is an ordered sequence of
//! `(partition_name, host_group, sorted_local_indices)` triples and nothing
//! else; partition order on reload is the insertion order at save time.
//!
//! The on-disk container wraps the JSON-encoded triples in a length prefix
//! and a CRC32 checksum. Every load validates the checksum; a mismatch is a
//! corruption error, never silently ignored.

mod errors;
mod format;

pub use errors::{SnapshotError, SnapshotResult};
pub use format::{SelectionSnapshot, SnapshotEntry};

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::observability::{log_event, log_event_with_fields, Event};
use crate::selection::SelectionSet;

/// Writes a selection's snapshot to `path`, fsyncing before returning.
pub fn save_to(path: &Path, set: &SelectionSet) -> SnapshotResult<()> {
    log_event_with_fields(
        Event::SnapshotSaveStart,
        &[("path", &path.display().to_string())],
    );

    let snapshot = SelectionSnapshot::from_set(set);
    let bytes = snapshot.to_bytes()?;

    let result = (|| -> SnapshotResult<()> {
        let mut file = File::create(path)
            .map_err(|e| SnapshotError::io(format!("create {}", path.display()), e))?;
        file.write_all(&bytes)
            .map_err(|e| SnapshotError::io(format!("write {}", path.display()), e))?;
        // Not acknowledged until synced
        file.sync_all()
            .map_err(|e| SnapshotError::io(format!("sync {}", path.display()), e))?;
        Ok(())
    })();

    match result {
        Ok(()) => {
            log_event_with_fields(
                Event::SnapshotSaveComplete,
                &[
                    ("partitions", &set.len().to_string()),
                    ("records", &set.total_count().to_string()),
                ],
            );
            Ok(())
        }
        Err(e) => {
            log_event(Event::SnapshotSaveFailed);
            Err(e)
        }
    }
}

/// Reads a snapshot from `path` and rebuilds the selection.
///
/// Reconstruction order is the entry order in the file, which is the
/// insertion order at save time.
pub fn load_from(path: &Path) -> SnapshotResult<SelectionSet> {
    log_event_with_fields(
        Event::SnapshotLoadStart,
        &[("path", &path.display().to_string())],
    );

    let bytes = std::fs::read(path)
        .map_err(|e| SnapshotError::io(format!("read {}", path.display()), e))?;

    let snapshot = match SelectionSnapshot::from_bytes(&bytes) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            if e.is_fatal() {
                log_event_with_fields(
                    Event::SnapshotCorruption,
                    &[("path", &path.display().to_string())],
                );
            }
            return Err(e);
        }
    };

    let set = snapshot.into_set();
    log_event_with_fields(
        Event::SnapshotLoadComplete,
        &[
            ("partitions", &set.len().to_string()),
            ("records", &set.total_count().to_string()),
        ],
    );
    Ok(set)
}
