//! Per-partition selected-position sets

use super::errors::{SelectionError, SelectionResult};

/// The selected local record indices of exactly one partition.
///
/// Indices are kept strictly increasing with no duplicates, so membership is
/// a binary search and set operations are linear merges. This is a sorted
/// set, not a multiset: inserting a present index is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSelection {
    indices: Vec<u64>,
}

impl PartitionSelection {
    /// Creates an empty selection
    pub fn new() -> Self {
        Self {
            indices: Vec::new(),
        }
    }

    /// Builds a selection from evaluator output.
    ///
    /// The predicate evaluator is expected to hand over sorted indices, but
    /// the sorted-unique invariant belongs to this type, so the input is
    /// normalized rather than trusted or rejected.
    pub fn from_sorted_indices(indices: impl IntoIterator<Item = u64>) -> Self {
        let mut indices: Vec<u64> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Insert a local index, maintaining sorted-unique order.
    ///
    /// Idempotent: inserting an already-present index changes nothing.
    pub fn insert(&mut self, local_index: u64) {
        match self.indices.binary_search(&local_index) {
            Ok(_) => {} // Already selected
            Err(pos) => self.indices.insert(pos, local_index),
        }
    }

    /// Returns whether the local index is selected
    pub fn contains(&self, local_index: u64) -> bool {
        self.indices.binary_search(&local_index).is_ok()
    }

    /// Number of selected records in this partition
    pub fn count(&self) -> u64 {
        self.indices.len() as u64
    }

    /// Returns whether no records are selected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The k-th selected local index in increasing order.
    ///
    /// # Errors
    ///
    /// Returns `SEL_OUT_OF_RANGE` if `k >= count()`.
    pub fn nth(&self, k: u64) -> SelectionResult<u64> {
        self.indices
            .get(k as usize)
            .copied()
            .ok_or(SelectionError::OutOfRange {
                index: k,
                count: self.count(),
            })
    }

    /// Removes every index present in `other`.
    pub fn remove_all(&mut self, other: &PartitionSelection) {
        self.indices.retain(|index| !other.contains(*index));
    }

    /// Unions `other`'s indices into this selection.
    ///
    /// Linear merge of the two sorted runs.
    pub fn merge(&mut self, other: &PartitionSelection) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.indices = other.indices.clone();
            return;
        }

        let mut merged = Vec::with_capacity(self.indices.len() + other.indices.len());
        let (mut i, mut j) = (0, 0);
        while i < self.indices.len() && j < other.indices.len() {
            let (a, b) = (self.indices[i], other.indices[j]);
            if a < b {
                merged.push(a);
                i += 1;
            } else if b < a {
                merged.push(b);
                j += 1;
            } else {
                merged.push(a);
                i += 1;
                j += 1;
            }
        }
        merged.extend_from_slice(&self.indices[i..]);
        merged.extend_from_slice(&other.indices[j..]);
        self.indices = merged;
    }

    /// Ascending iteration over the selected local indices
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.indices.iter().copied()
    }

    /// The selected local indices as a sorted slice
    pub fn as_slice(&self) -> &[u64] {
        &self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_sorted_unique() {
        let mut sel = PartitionSelection::new();
        sel.insert(30);
        sel.insert(10);
        sel.insert(20);

        assert_eq!(sel.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn test_insert_idempotent() {
        let mut sel = PartitionSelection::new();
        sel.insert(5);
        sel.insert(5);

        assert_eq!(sel.count(), 1);
        assert_eq!(sel.nth(0).unwrap(), 5);
        assert!(sel.nth(1).is_err());
    }

    #[test]
    fn test_contains() {
        let sel = PartitionSelection::from_sorted_indices([2, 4, 8]);
        assert!(sel.contains(4));
        assert!(!sel.contains(3));
    }

    #[test]
    fn test_nth_out_of_range() {
        let sel = PartitionSelection::from_sorted_indices([1, 2]);
        assert_eq!(sel.nth(1).unwrap(), 2);

        let err = sel.nth(2).unwrap_err();
        assert_eq!(err, SelectionError::OutOfRange { index: 2, count: 2 });
    }

    #[test]
    fn test_remove_all() {
        let mut sel = PartitionSelection::from_sorted_indices([1, 2, 3, 4]);
        let other = PartitionSelection::from_sorted_indices([2, 4, 6]);

        sel.remove_all(&other);
        assert_eq!(sel.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_merge_overlapping() {
        let mut sel = PartitionSelection::from_sorted_indices([1, 3]);
        let other = PartitionSelection::from_sorted_indices([3, 5]);

        sel.merge(&other);
        assert_eq!(sel.as_slice(), &[1, 3, 5]);
        assert_eq!(sel.count(), 3);
    }

    #[test]
    fn test_merge_into_empty() {
        let mut sel = PartitionSelection::new();
        let other = PartitionSelection::from_sorted_indices([7, 9]);

        sel.merge(&other);
        assert_eq!(sel.as_slice(), &[7, 9]);
    }

    #[test]
    fn test_from_sorted_indices_normalizes() {
        let sel = PartitionSelection::from_sorted_indices([5, 1, 5, 3, 1]);
        assert_eq!(sel.as_slice(), &[1, 3, 5]);
    }
}
