//! Snapshot payload and container format
//!
//! Container layout:
//!
//! ```text
//! +------------------+
//! | Payload Length   | (u32 LE)
//! +------------------+
//! | Payload          | (JSON bytes)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32)
//! +------------------+
//! ```
//!
//! Checksum covers the length prefix and the payload.

use serde::{Deserialize, Serialize};

use crate::selection::{PartitionId, PartitionSelection, SelectionSet};

use super::errors::{SnapshotError, SnapshotResult};

/// Length prefix + checksum
const FRAME_OVERHEAD: usize = 8;

/// One persisted partition: identity plus its sorted selected indices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    /// The partition's own name
    pub partition_name: String,
    /// The name of the group hosting the partition
    pub host_group: String,
    /// Selected local indices, ascending
    pub indices: Vec<u64>,
}

/// The complete persisted shape of one selection.
///
/// Entries are ordered; that order is the selection's insertion order and
/// is reproduced on reload. No other chain metadata is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    /// Persisted partitions in insertion order
    pub entries: Vec<SnapshotEntry>,
}

impl SelectionSnapshot {
    /// Captures a selection's current contents
    pub fn from_set(set: &SelectionSet) -> Self {
        let entries = set
            .partitions()
            .map(|(id, sel)| SnapshotEntry {
                partition_name: id.partition_name().to_string(),
                host_group: id.host_group().to_string(),
                indices: sel.iter().collect(),
            })
            .collect();
        Self { entries }
    }

    /// Rebuilds the selection, preserving entry order
    pub fn into_set(self) -> SelectionSet {
        let mut set = SelectionSet::new();
        for entry in self.entries {
            set.add_partition(
                PartitionId::new(entry.partition_name, entry.host_group),
                PartitionSelection::from_sorted_indices(entry.indices),
            );
        }
        set
    }

    /// Serializes the snapshot into its framed container.
    pub fn to_bytes(&self) -> SnapshotResult<Vec<u8>> {
        let payload = serde_json::to_vec(self)?;

        let mut framed = Vec::with_capacity(payload.len() + FRAME_OVERHEAD);
        framed.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        framed.extend_from_slice(&payload);

        let checksum = crc32fast::hash(&framed);
        framed.extend_from_slice(&checksum.to_le_bytes());
        Ok(framed)
    }

    /// Parses a framed container, verifying length and checksum.
    ///
    /// # Errors
    ///
    /// `SEL_SNAPSHOT_CORRUPTION` on truncation, trailing garbage, or a
    /// checksum mismatch; `SEL_SNAPSHOT_ENCODING` if the payload is not a
    /// valid snapshot document.
    pub fn from_bytes(data: &[u8]) -> SnapshotResult<Self> {
        if data.len() < FRAME_OVERHEAD {
            return Err(SnapshotError::Corruption(format!(
                "container too short: {} bytes",
                data.len()
            )));
        }

        let payload_len = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
        let expected_len = payload_len + FRAME_OVERHEAD;
        if data.len() != expected_len {
            return Err(SnapshotError::Corruption(format!(
                "container length mismatch: expected {} bytes, got {}",
                expected_len,
                data.len()
            )));
        }

        let checksum_at = data.len() - 4;
        let stored = u32::from_le_bytes([
            data[checksum_at],
            data[checksum_at + 1],
            data[checksum_at + 2],
            data[checksum_at + 3],
        ]);
        let computed = crc32fast::hash(&data[..checksum_at]);
        if computed != stored {
            return Err(SnapshotError::Corruption(format!(
                "checksum mismatch: computed {:08x}, stored {:08x}",
                computed, stored
            )));
        }

        let snapshot = serde_json::from_slice(&data[4..checksum_at])?;
        Ok(snapshot)
    }
}
