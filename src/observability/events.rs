//! Observable lifecycle events
//!
//! Events are explicit and typed; free-form event names do not appear at
//! call sites.

/// Observable events in chainsel.
///
/// The engine core is pure; only the snapshot layer has a lifecycle worth
/// reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Snapshot write begins
    SnapshotSaveStart,
    /// Snapshot written and synced
    SnapshotSaveComplete,
    /// Snapshot write failed
    SnapshotSaveFailed,
    /// Snapshot read begins
    SnapshotLoadStart,
    /// Snapshot decoded and selection rebuilt
    SnapshotLoadComplete,
    /// Snapshot container failed its checksum (FATAL)
    SnapshotCorruption,
}

impl Event {
    /// Returns the event's wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::SnapshotSaveStart => "SNAPSHOT_SAVE_START",
            Event::SnapshotSaveComplete => "SNAPSHOT_SAVE_COMPLETE",
            Event::SnapshotSaveFailed => "SNAPSHOT_SAVE_FAILED",
            Event::SnapshotLoadStart => "SNAPSHOT_LOAD_START",
            Event::SnapshotLoadComplete => "SNAPSHOT_LOAD_COMPLETE",
            Event::SnapshotCorruption => "SNAPSHOT_CORRUPTION",
        }
    }

    /// Returns whether the event reports an unrecoverable condition
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::SnapshotCorruption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SnapshotSaveStart.as_str(), "SNAPSHOT_SAVE_START");
        assert_eq!(Event::SnapshotCorruption.as_str(), "SNAPSHOT_CORRUPTION");
    }

    #[test]
    fn test_only_corruption_is_fatal() {
        assert!(Event::SnapshotCorruption.is_fatal());
        assert!(!Event::SnapshotSaveFailed.is_fatal());
        assert!(!Event::SnapshotLoadComplete.is_fatal());
    }
}
