//! Chain layouts: partition order and record counts

use std::collections::HashSet;

use crate::selection::PartitionId;

/// One concrete chain: an ordered sequence of partitions with their record
/// counts, logically concatenated into a single addressable run of records.
///
/// The caller supplies counts; the engine never inspects record payloads.
/// A partition's global offset is the sum of all preceding record counts.
#[derive(Debug, Clone, Default)]
pub struct ChainLayout {
    entries: Vec<(PartitionId, u64)>,
}

impl ChainLayout {
    /// Creates an empty layout
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Builds a layout from `(identity, record_count)` pairs in chain order
    pub fn from_entries(entries: impl IntoIterator<Item = (PartitionId, u64)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Appends a partition at the end of the chain
    pub fn push(&mut self, id: PartitionId, record_count: u64) {
        self.entries.push((id, record_count));
    }

    /// Number of partitions in the chain
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the chain has no partitions
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(identity, record_count)` in chain order
    pub fn entries(&self) -> impl Iterator<Item = (&PartitionId, u64)> {
        self.entries.iter().map(|(id, count)| (id, *count))
    }

    /// Total records across all partitions
    pub fn total_records(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// The identities of this chain's partitions, for selection restriction
    pub fn identity_set(&self) -> HashSet<PartitionId> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }

    /// Records contributed by all partitions preceding `id` in chain order.
    ///
    /// `None` if the chain does not contain `id`.
    pub fn offset_of(&self, id: &PartitionId) -> Option<u64> {
        let mut offset = 0u64;
        for (entry_id, count) in &self.entries {
            if entry_id == id {
                return Some(offset);
            }
            offset += count;
        }
        None
    }

    /// The record count of one partition, if the chain contains it
    pub fn record_count_of(&self, id: &PartitionId) -> Option<u64> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, count)| *count)
    }

    /// Translates a global record number into (partition, local index).
    ///
    /// `None` when `global` lies past the end of the chain.
    pub fn locate(&self, global: u64) -> Option<(&PartitionId, u64)> {
        let mut offset = 0u64;
        for (id, count) in &self.entries {
            if global < offset + count {
                return Some((id, global - offset));
            }
            offset += count;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_partition_layout() -> ChainLayout {
        ChainLayout::from_entries([
            (PartitionId::new("tree1", "f0"), 100),
            (PartitionId::new("tree2", "f0"), 50),
        ])
    }

    #[test]
    fn test_offsets() {
        let layout = two_partition_layout();

        assert_eq!(layout.offset_of(&PartitionId::new("tree1", "f0")), Some(0));
        assert_eq!(
            layout.offset_of(&PartitionId::new("tree2", "f0")),
            Some(100)
        );
        assert_eq!(layout.offset_of(&PartitionId::new("tree3", "f0")), None);
        assert_eq!(layout.total_records(), 150);
        assert_eq!(
            layout.record_count_of(&PartitionId::new("tree2", "f0")),
            Some(50)
        );
        assert_eq!(layout.record_count_of(&PartitionId::new("tree3", "f0")), None);
    }

    #[test]
    fn test_push_appends_in_chain_order() {
        let mut layout = ChainLayout::new();
        assert!(layout.is_empty());

        layout.push(PartitionId::new("tree1", "f0"), 100);
        layout.push(PartitionId::new("tree2", "f0"), 50);

        assert_eq!(layout.len(), 2);
        let order: Vec<&PartitionId> = layout.entries().map(|(id, _)| id).collect();
        assert_eq!(
            order,
            vec![
                &PartitionId::new("tree1", "f0"),
                &PartitionId::new("tree2", "f0")
            ]
        );
    }

    #[test]
    fn test_locate() {
        let layout = two_partition_layout();

        let (id, local) = layout.locate(5).unwrap();
        assert_eq!(id, &PartitionId::new("tree1", "f0"));
        assert_eq!(local, 5);

        let (id, local) = layout.locate(102).unwrap();
        assert_eq!(id, &PartitionId::new("tree2", "f0"));
        assert_eq!(local, 2);

        assert!(layout.locate(150).is_none());
    }

    #[test]
    fn test_locate_on_boundary() {
        let layout = two_partition_layout();

        let (id, local) = layout.locate(100).unwrap();
        assert_eq!(id, &PartitionId::new("tree2", "f0"));
        assert_eq!(local, 0);

        let (id, local) = layout.locate(99).unwrap();
        assert_eq!(id, &PartitionId::new("tree1", "f0"));
        assert_eq!(local, 99);
    }

    #[test]
    fn test_identity_set() {
        let layout = two_partition_layout();
        let ids = layout.identity_set();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&PartitionId::new("tree1", "f0")));
    }

    #[test]
    fn test_zero_count_partition() {
        let layout = ChainLayout::from_entries([
            (PartitionId::new("tree1", "f0"), 0),
            (PartitionId::new("tree2", "f0"), 10),
        ]);

        assert_eq!(
            layout.offset_of(&PartitionId::new("tree2", "f0")),
            Some(0)
        );
        let (id, _) = layout.locate(0).unwrap();
        assert_eq!(id, &PartitionId::new("tree2", "f0"));
    }
}
