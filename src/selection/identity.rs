//! Partition identity keys
//!
//! The same physical partition can appear at different positions in
//! different chains, so joins between selections always go through this
//! composite key and never through array position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Composite identity key for one partition.
///
/// A partition is one named sub-collection of records hosted inside a named
/// group (e.g. one record collection inside one data container). Two
/// `PartitionId`s are equal iff both names match; the key is never reused to
/// mean two different physical partitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PartitionId {
    partition_name: String,
    host_group: String,
}

impl PartitionId {
    /// Create an identity key from the partition name and its host group
    pub fn new(partition_name: impl Into<String>, host_group: impl Into<String>) -> Self {
        Self {
            partition_name: partition_name.into(),
            host_group: host_group.into(),
        }
    }

    /// The partition's own name
    pub fn partition_name(&self) -> &str {
        &self.partition_name
    }

    /// The name of the group hosting the partition
    pub fn host_group(&self) -> &str {
        &self.host_group
    }
}

impl fmt::Display for PartitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.host_group, self.partition_name)
    }
}
