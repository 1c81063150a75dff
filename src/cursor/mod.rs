//! Chain traversal for filtered record consumption
//!
//! A `ChainLayout` describes one concrete chain: partition order plus
//! per-partition record counts, supplied by the caller (the engine never
//! touches record payloads). A `ChainCursor` walks a `SelectionSet` in
//! layout order and translates each selected (partition, local index) pair
//! into a global record number.
//!
//! # Invariants
//!
//! - Cursor state is derived, never persisted; a cursor immutably borrows
//!   its selection and layout for its whole lifetime, so neither can change
//!   under it
//! - Layout partitions absent from the selection contribute zero records;
//!   selection entries absent from the layout are skipped — neither is an
//!   error

mod chain;
mod errors;
mod layout;

pub use chain::ChainCursor;
pub use errors::{CursorError, CursorResult};
pub use layout::ChainLayout;
