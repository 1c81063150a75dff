//! Selection subsystem for chainsel
//!
//! A selection is a secondary, independent index over a chain of record
//! partitions: it records which local indices of which partitions are
//! selected, and owns nothing of the underlying records.
//!
//! # Design Principles
//!
//! - Identity by name: partitions are joined by `PartitionId`, never by
//!   position within a chain
//! - Deterministic: sorted-unique index runs, insertion-ordered partitions
//! - Present implies non-empty: a `SelectionSet` never holds a zero-count
//!   partition entry
//!
//! # Invariants
//!
//! - `PartitionSelection` indices are strictly increasing, no duplicates
//! - At most one `PartitionSelection` per identity in a `SelectionSet`
//! - Partition iteration follows first-population order, not a sort

mod errors;
mod identity;
mod partition;
mod set;

pub use errors::{SelectionError, SelectionResult};
pub use identity::PartitionId;
pub use partition::PartitionSelection;
pub use set::SelectionSet;
