//! Min-priority frontier for best-first search.
//!
//! A vertex is pushed again every time its tentative distance improves.
//! Older entries stay in the heap and are discarded by the caller's
//! finalized check when popped; there is no decrease-key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct FrontierEntry<V> {
    priority: f64,
    seq: u64,
    vertex: V,
}

// Reversed so that `BinaryHeap` pops the lowest priority first.
// Equal priorities pop in insertion order.
impl<V> Ord for FrontierEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<V> PartialOrd for FrontierEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V> PartialEq for FrontierEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V> Eq for FrontierEntry<V> {}

pub(crate) struct Frontier<V> {
    heap: BinaryHeap<FrontierEntry<V>>,
    next_seq: u64,
}

impl<V> Frontier<V> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, vertex: V, priority: f64) {
        self.heap.push(FrontierEntry {
            priority,
            seq: self.next_seq,
            vertex,
        });
        self.next_seq += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<V> {
        self.heap.pop().map(|entry| entry.vertex)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
