//! Min-priority queue keyed by tentative distance.
//!
//! Entries with equal distance come out in the order they were pushed, so a
//! shortest-path run is reproducible regardless of heap internals.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::routing::shortest_path::Distance;
use crate::topology::NodeId;

// Field order drives the derived ordering: distance, then push sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry {
    distance: Distance,
    sequence: u64,
    node: NodeId,
}

#[derive(Debug, Default)]
pub struct DistanceQueue {
    heap: BinaryHeap<Reverse<Entry>>,
    next_sequence: u64,
}

impl DistanceQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, distance: Distance, node: NodeId) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Entry {
            distance,
            sequence,
            node,
        }));
    }

    /// Removes the entry with the smallest distance, earliest push first on ties.
    pub fn pop(&mut self) -> Option<(Distance, NodeId)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.distance, entry.node))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_distance_order() {
        let mut queue = DistanceQueue::new();
        queue.push(7, 1);
        queue.push(3, 2);
        queue.push(9, 3);
        queue.push(0, 4);

        let order: Vec<NodeId> = std::iter::from_fn(|| queue.pop()).map(|(_, n)| n).collect();
        assert_eq!(order, vec![4, 2, 1, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_break_by_insertion_order() {
        let mut queue = DistanceQueue::new();
        queue.push(5, 9);
        queue.push(5, 1);
        queue.push(5, 4);
        queue.push(2, 7);
        assert_eq!(queue.len(), 4);

        assert_eq!(queue.pop(), Some((2, 7)));
        assert_eq!(queue.pop(), Some((5, 9)));
        assert_eq!(queue.pop(), Some((5, 1)));
        assert_eq!(queue.pop(), Some((5, 4)));
        assert_eq!(queue.pop(), None);
    }
}
