//! Cursor error types
//!
//! Error codes:
//! - SEL_CURSOR_INVALID_STATE (ERROR severity, recoverable)
//! - SEL_CURSOR_OUT_OF_RANGE (ERROR severity, recoverable)

use thiserror::Error;

/// Result type for cursor operations
pub type CursorResult<T> = Result<T, CursorError>;

/// Cursor errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// Position query before the first advance or after exhaustion
    #[error("cursor is {state} and has no current record")]
    InvalidState {
        /// The state the cursor was in when queried
        state: &'static str,
    },

    /// Selected-record query beyond the number of records the cursor covers
    #[error("selected-record query out of range: requested {index}, available {available}")]
    OutOfRange {
        /// The requested position
        index: u64,
        /// The number of selected records the cursor covers
        available: u64,
    },
}

impl CursorError {
    /// Returns the stable string code for this error
    pub fn code(&self) -> &'static str {
        match self {
            CursorError::InvalidState { .. } => "SEL_CURSOR_INVALID_STATE",
            CursorError::OutOfRange { .. } => "SEL_CURSOR_OUT_OF_RANGE",
        }
    }

    /// Cursor errors are always recoverable
    pub fn is_fatal(&self) -> bool {
        false
    }
}
