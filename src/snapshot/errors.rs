//! Snapshot error types
//!
//! Error codes:
//! - SEL_SNAPSHOT_IO_ERROR (ERROR severity)
//! - SEL_SNAPSHOT_ENCODING (ERROR severity)
//! - SEL_SNAPSHOT_CORRUPTION (FATAL severity)

use std::io;
use thiserror::Error;

/// Result type for snapshot operations
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Snapshot errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// File I/O failure while writing or reading a snapshot
    #[error("snapshot I/O failed: {context}")]
    Io {
        /// What was being attempted
        context: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The container's checksum or framing does not match its contents
    #[error("snapshot corruption: {0}")]
    Corruption(String),

    /// The payload could not be encoded or decoded
    #[error("snapshot encoding failed: {0}")]
    Encoding(String),
}

impl SnapshotError {
    /// Create an I/O error with context
    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            SnapshotError::Io { .. } => "SEL_SNAPSHOT_IO_ERROR",
            SnapshotError::Corruption(_) => "SEL_SNAPSHOT_CORRUPTION",
            SnapshotError::Encoding(_) => "SEL_SNAPSHOT_ENCODING",
        }
    }

    /// Corruption means the persisted state cannot be trusted
    pub fn is_fatal(&self) -> bool {
        matches!(self, SnapshotError::Corruption(_))
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encoding(e.to_string())
    }
}
