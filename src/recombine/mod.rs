//! Splitting and reassembling selections across differently-shaped chains
//!
//! A selection built while traversing one chain can be applied to another
//! chain whose partition list is a superset, subset, or reordering of the
//! first, as long as partition identities overlap. These operations carve
//! out the relevant pieces; name equality, never position, is the join key.
//!
//! No partition-shape validation happens here: an identity the source
//! selection never saw simply contributes zero selected records.

use std::collections::HashSet;

use crate::selection::{PartitionId, SelectionSet};

/// Restricts a selection to the given partition identities.
///
/// Used when applying a chain-wide selection to a narrower chain. Kept
/// entries preserve their order in the source set. Identities in `ids` that
/// the selection does not cover are not errors; they are simply absent from
/// the result.
pub fn restrict_to(selection: &SelectionSet, ids: &HashSet<PartitionId>) -> SelectionSet {
    let mut result = SelectionSet::new();
    for (id, sel) in selection.partitions() {
        if ids.contains(id) {
            result.add_partition(id.clone(), sel.clone());
        }
    }
    result
}

/// Extracts every entry whose partition name matches, across all host groups.
///
/// Used when assembling a selection for one chain out of per-partition
/// pieces picked from a selection built for a larger chain: the same
/// physical partition can sit at different positions in different chains,
/// so the pieces are joined by name equality.
pub fn extract_by_name(selection: &SelectionSet, partition_name: &str) -> SelectionSet {
    let mut result = SelectionSet::new();
    for (id, sel) in selection.partitions() {
        if id.partition_name() == partition_name {
            result.add_partition(id.clone(), sel.clone());
        }
    }
    result
}
