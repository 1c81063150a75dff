//! chainsel - a deterministic entry-selection engine for partitioned record chains

pub mod algebra;
pub mod cursor;
pub mod observability;
pub mod recombine;
pub mod selection;
pub mod snapshot;
