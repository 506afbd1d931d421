//! Max-priority queue over arena indices.
//!
//! Keys only ever increase during relaxation, so instead of removing and
//! reinserting a node we push a fresh entry stamped with the new sum and let
//! [`MaxQueue::pop`] discard entries whose stamp no longer matches the node.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A queued `(sum, index)` stamp.
///
/// Ordered by sum, then by index, both ascending, so that the max-heap pops
/// the largest sum first and the larger index first among equal sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueEntry {
    pub sum: Option<i64>,
    pub index: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sum
            .cmp(&other.sum)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary max-heap with stale-entry skipping.
#[derive(Debug, Default)]
pub struct MaxQueue {
    heap: BinaryHeap<QueueEntry>,
    stale: usize,
}

impl MaxQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            stale: 0,
        }
    }

    /// Queue `index` with priority `sum`.
    pub fn push(&mut self, index: usize, sum: Option<i64>) {
        self.heap.push(QueueEntry { sum, index });
    }

    /// Pop the highest-priority live entry.
    ///
    /// `current_sum(index)` must return the node's present key; entries whose
    /// stamp differs were superseded by a later push and are dropped.
    pub fn pop<F>(&mut self, current_sum: F) -> Option<QueueEntry>
    where
        F: FnMut(usize) -> Option<i64>,
    {
        self.pop_with(current_sum, |_| {})
    }

    /// Like [`pop`](Self::pop), handing every discarded entry to `on_stale`.
    pub fn pop_with<F, S>(
        &mut self,
        mut current_sum: F,
        mut on_stale: S,
    ) -> Option<QueueEntry>
    where
        F: FnMut(usize) -> Option<i64>,
        S: FnMut(QueueEntry),
    {
        while let Some(entry) = self.heap.pop() {
            if entry.sum == current_sum(entry.index) {
                return Some(entry);
            }
            self.stale += 1;
            on_stale(entry);
        }
        None
    }

    /// Entries still in the heap, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// How many superseded entries have been discarded so far.
    pub fn stale_skipped(&self) -> usize {
        self.stale
    }
}
