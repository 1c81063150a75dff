//! Selection sets over whole chains

use std::collections::HashMap;

use super::identity::PartitionId;
use super::partition::PartitionSelection;

/// The selection over an entire chain: one `PartitionSelection` per
/// partition that has at least one selected record.
///
/// Entries keep first-population order. That order is what makes "the same
/// selection, assembled via different filter passes" reproducible, and it
/// doubles as the default traversal grouping when no chain-specific layout
/// is supplied at cursor-creation time.
///
/// Structural equality is deliberately not derived: two sets with different
/// entry order but identical identity-to-index-set mappings are semantically
/// equal for algebra purposes. Use `algebra::same_contents` for that check.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// Entries in first-population order
    entries: Vec<(PartitionId, PartitionSelection)>,
    /// Identity lookup into `entries`
    slots: HashMap<PartitionId, usize>,
}

impl SelectionSet {
    /// Creates an empty selection set
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Adds a per-partition selection.
    ///
    /// If an entry for `id` already exists its contents are merged (union of
    /// local indices), never replaced: overlapping selection passes
    /// accumulate. An empty incoming selection creates no entry, preserving
    /// the present-implies-non-empty invariant.
    pub fn add_partition(&mut self, id: PartitionId, selection: PartitionSelection) {
        if selection.is_empty() {
            return;
        }
        match self.slots.get(&id) {
            Some(&slot) => self.entries[slot].1.merge(&selection),
            None => {
                self.slots.insert(id.clone(), self.entries.len());
                self.entries.push((id, selection));
            }
        }
    }

    /// The selection for one partition, if any records of it are selected
    pub fn get(&self, id: &PartitionId) -> Option<&PartitionSelection> {
        self.slots.get(id).map(|&slot| &self.entries[slot].1)
    }

    /// Sum of selected-record counts over all partitions
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|(_, sel)| sel.count()).sum()
    }

    /// Iterates entries in first-population order.
    ///
    /// Finite and restartable; the set is not consumed.
    pub fn partitions(&self) -> impl Iterator<Item = (&PartitionId, &PartitionSelection)> {
        self.entries.iter().map(|(id, sel)| (id, sel))
    }

    /// Number of partitions with at least one selected record
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no partition has a selected record
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(partition: &str, group: &str) -> PartitionId {
        PartitionId::new(partition, group)
    }

    #[test]
    fn test_add_partition_accumulates() {
        let mut set = SelectionSet::new();
        set.add_partition(
            id("tree1", "file_0"),
            PartitionSelection::from_sorted_indices([1, 3]),
        );
        set.add_partition(
            id("tree1", "file_0"),
            PartitionSelection::from_sorted_indices([3, 5]),
        );

        assert_eq!(set.len(), 1);
        let sel = set.get(&id("tree1", "file_0")).unwrap();
        assert_eq!(sel.as_slice(), &[1, 3, 5]);
        assert_eq!(set.total_count(), 3);
    }

    #[test]
    fn test_empty_selection_creates_no_entry() {
        let mut set = SelectionSet::new();
        set.add_partition(id("tree1", "file_0"), PartitionSelection::new());

        assert!(set.is_empty());
        assert_eq!(set.get(&id("tree1", "file_0")), None);
    }

    #[test]
    fn test_iteration_in_population_order() {
        let mut set = SelectionSet::new();
        set.add_partition(
            id("tree2", "file_1"),
            PartitionSelection::from_sorted_indices([0]),
        );
        set.add_partition(
            id("tree1", "file_0"),
            PartitionSelection::from_sorted_indices([4]),
        );
        set.add_partition(
            id("tree2", "file_1"),
            PartitionSelection::from_sorted_indices([9]),
        );

        let order: Vec<&PartitionId> = set.partitions().map(|(id, _)| id).collect();
        assert_eq!(order, vec![&id("tree2", "file_1"), &id("tree1", "file_0")]);
    }

    #[test]
    fn test_total_count() {
        let mut set = SelectionSet::new();
        set.add_partition(
            id("tree1", "file_0"),
            PartitionSelection::from_sorted_indices([5, 10]),
        );
        set.add_partition(
            id("tree2", "file_0"),
            PartitionSelection::from_sorted_indices([2]),
        );

        assert_eq!(set.total_count(), 3);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_get_unknown_identity() {
        let set = SelectionSet::new();
        assert!(set.get(&id("tree1", "nowhere")).is_none());
    }
}
