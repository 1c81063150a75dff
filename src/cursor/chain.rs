//! The chain cursor state machine

use crate::selection::{PartitionId, PartitionSelection, SelectionSet};

use super::errors::{CursorError, CursorResult};
use super::layout::ChainLayout;

/// One traversal slot: a layout partition that has selected records.
#[derive(Debug)]
struct Slot<'a> {
    id: &'a PartitionId,
    selection: &'a PartitionSelection,
    /// Records contributed by all preceding layout partitions
    offset: u64,
}

/// Cursor position within the slot list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    BeforeStart,
    Positioned { slot: usize, pos: usize },
    Exhausted,
}

/// A stateful iterator over the selected records of one chain.
///
/// Maps a monotonically increasing logical position to successive
/// (partition, local index) pairs in layout order, and reports each pair's
/// global record number. The cursor borrows its selection and layout for
/// its whole lifetime, so neither can be mutated during a traversal; each
/// concurrent consumer owns an independent cursor.
///
/// Layout partitions the selection does not cover contribute nothing, and
/// selection entries outside the layout are skipped; neither is an error.
#[derive(Debug)]
pub struct ChainCursor<'a> {
    slots: Vec<Slot<'a>>,
    total: u64,
    state: State,
}

impl<'a> ChainCursor<'a> {
    /// Builds a cursor over `set` traversed in `layout` order.
    ///
    /// Running offsets are precomputed here; `reset()` returns to the same
    /// derived state without recomputation because the borrowed inputs
    /// cannot have changed.
    pub fn new(set: &'a SelectionSet, layout: &'a ChainLayout) -> Self {
        let mut slots = Vec::new();
        let mut offset = 0u64;
        let mut total = 0u64;
        for (id, record_count) in layout.entries() {
            if let Some(selection) = set.get(id) {
                if !selection.is_empty() {
                    total += selection.count();
                    slots.push(Slot {
                        id,
                        selection,
                        offset,
                    });
                }
            }
            offset += record_count;
        }
        Self {
            slots,
            total,
            state: State::BeforeStart,
        }
    }

    /// Moves to the next selected (partition, local index) pair.
    ///
    /// Returns `false` once the traversal is exhausted; further calls keep
    /// returning `false`.
    pub fn advance(&mut self) -> bool {
        let next = match self.state {
            State::BeforeStart => (0, 0),
            State::Positioned { slot, pos } => {
                if ((pos + 1) as u64) < self.slots[slot].selection.count() {
                    (slot, pos + 1)
                } else {
                    (slot + 1, 0)
                }
            }
            State::Exhausted => return false,
        };
        // Slots are non-empty by construction, so slot bounds are the only check
        if next.0 < self.slots.len() {
            self.state = State::Positioned {
                slot: next.0,
                pos: next.1,
            };
            true
        } else {
            self.state = State::Exhausted;
            false
        }
    }

    /// Returns to `BeforeStart`.
    pub fn reset(&mut self) {
        self.state = State::BeforeStart;
    }

    /// Returns whether the traversal has ended
    pub fn is_exhausted(&self) -> bool {
        self.state == State::Exhausted
    }

    /// Total selected records this cursor will visit
    pub fn total_selected(&self) -> u64 {
        self.total
    }

    /// The current record's global number within the chain.
    ///
    /// # Errors
    ///
    /// `SEL_CURSOR_INVALID_STATE` before the first `advance()` or after
    /// exhaustion.
    pub fn global_record_number(&self) -> CursorResult<u64> {
        let (slot, local) = self.current()?;
        Ok(slot.offset + local)
    }

    /// The current record's partition identity
    pub fn current_partition(&self) -> CursorResult<&'a PartitionId> {
        let (slot, _) = self.current()?;
        Ok(slot.id)
    }

    /// The current record's local index within its partition
    pub fn current_local_index(&self) -> CursorResult<u64> {
        let (_, local) = self.current()?;
        Ok(local)
    }

    /// The k-th selected record's global number in layout order.
    ///
    /// Independent of the cursor's own position.
    ///
    /// # Errors
    ///
    /// `SEL_CURSOR_OUT_OF_RANGE` if `k >= total_selected()`.
    pub fn nth_selected(&self, k: u64) -> CursorResult<u64> {
        let out_of_range = CursorError::OutOfRange {
            index: k,
            available: self.total,
        };
        let mut remaining = k;
        for slot in &self.slots {
            let count = slot.selection.count();
            if remaining < count {
                return slot
                    .selection
                    .nth(remaining)
                    .map(|local| slot.offset + local)
                    .map_err(|_| out_of_range);
            }
            remaining -= count;
        }
        Err(out_of_range)
    }

    fn current(&self) -> CursorResult<(&Slot<'a>, u64)> {
        match self.state {
            State::Positioned { slot, pos } => {
                let slot = &self.slots[slot];
                match slot.selection.as_slice().get(pos) {
                    Some(&local) => Ok((slot, local)),
                    None => Err(CursorError::InvalidState { state: "exhausted" }),
                }
            }
            State::BeforeStart => Err(CursorError::InvalidState {
                state: "before start",
            }),
            State::Exhausted => Err(CursorError::InvalidState { state: "exhausted" }),
        }
    }
}
