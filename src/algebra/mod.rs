//! Set algebra over selection sets
//!
//! Stateless, pure operations combining two `SelectionSet`s partition by
//! partition. Both are total: disjoint partition sets are not errors, they
//! degenerate to copies or empty results.
//!
//! # Invariants
//!
//! - Inputs are never mutated
//! - Per-partition index sets of `union(a, b)` and `union(b, a)` are
//!   identical; only entry enumeration order may differ, which is not a
//!   correctness criterion
//! - Result sets never hold empty partition entries

use crate::selection::SelectionSet;

/// Union of two selections.
///
/// For every identity appearing in `a` or `b`, the result holds the union
/// of the two index sets, using the accumulate semantics of
/// `SelectionSet::add_partition`. Commutative and associative per partition
/// contents by construction.
pub fn union(a: &SelectionSet, b: &SelectionSet) -> SelectionSet {
    let mut result = SelectionSet::new();
    for (id, sel) in a.partitions() {
        result.add_partition(id.clone(), sel.clone());
    }
    for (id, sel) in b.partitions() {
        result.add_partition(id.clone(), sel.clone());
    }
    result
}

/// Difference of two selections.
///
/// For every identity in `a`, the result holds `a`'s indices with `b`'s
/// indices for the same identity removed. Identities that end up empty are
/// dropped entirely: consumers assume present implies non-empty.
pub fn difference(a: &SelectionSet, b: &SelectionSet) -> SelectionSet {
    let mut result = SelectionSet::new();
    for (id, sel) in a.partitions() {
        let mut kept = sel.clone();
        if let Some(removed) = b.get(id) {
            kept.remove_all(removed);
        }
        result.add_partition(id.clone(), kept);
    }
    result
}

/// Semantic equality of two selections.
///
/// True iff both map the same identities to the same index sets, regardless
/// of entry order. This is the only equality the algebra defines; structural
/// comparison of `SelectionSet`s is intentionally unavailable.
pub fn same_contents(a: &SelectionSet, b: &SelectionSet) -> bool {
    difference(a, b).is_empty() && difference(b, a).is_empty()
}
