use std::collections::BinaryHeap;

use bitvec::slice::BitSlice;

use super::{Discovery, FrontierStrategy, HeapEntry};
use crate::memory::EntityIndex;
use crate::NodeIndex;

/// Frontier that pushes every offered edge onto a min-heap.
///
/// Edges are never deduplicated. Entries that point at a visited node are
/// discarded when they reach the top of the heap. The frontier stops after
/// `node_count - 1` discoveries, since no spanning tree has more edges.
#[derive(Debug, Clone)]
pub(crate) struct HeapFrontier<W> {
    heap: BinaryHeap<HeapEntry<W>>,
    sequence: usize,
    remaining: usize,
}

impl<W: Ord + Clone> FrontierStrategy<W> for HeapFrontier<W> {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequence: 0,
            remaining: node_count.saturating_sub(1),
        }
    }

    fn offer(&mut self, from: NodeIndex, weight: &W, to: NodeIndex, _visited: &BitSlice) {
        self.heap.push(HeapEntry {
            weight: weight.clone(),
            sequence: self.sequence,
            from,
            to,
        });
        self.sequence += 1;
    }

    fn advance(&mut self, visited: &BitSlice) -> Option<Discovery<W>> {
        if self.remaining == 0 {
            return None;
        }

        while let Some(entry) = self.heap.pop() {
            if visited[entry.to.index()] {
                continue;
            }
            self.remaining -= 1;
            return Some(entry.into());
        }

        None
    }
}

#[cfg(test)]
mod test {
    use bitvec::prelude::*;

    use super::*;

    #[test]
    fn stale_entries_are_skipped() {
        let mut visited = bitvec![1, 0, 0];
        let mut frontier = HeapFrontier::with_nodes(3);

        frontier.offer(NodeIndex::new(0), &1u8, NodeIndex::new(1), &visited);
        frontier.offer(NodeIndex::new(0), &2u8, NodeIndex::new(1), &visited);
        frontier.offer(NodeIndex::new(0), &5u8, NodeIndex::new(2), &visited);

        let first = frontier.advance(&visited).unwrap();
        assert_eq!(first, Discovery::new(NodeIndex::new(1), 1, NodeIndex::new(0)));
        visited.set(1, true);

        let second = frontier.advance(&visited).unwrap();
        assert_eq!(second, Discovery::new(NodeIndex::new(2), 5, NodeIndex::new(0)));
        visited.set(2, true);

        assert_eq!(frontier.advance(&visited), None);
    }

    #[test]
    fn stops_after_spanning_edge_count() {
        let visited = bitvec![1, 0];
        let mut frontier = HeapFrontier::with_nodes(2);

        frontier.offer(NodeIndex::new(0), &1u8, NodeIndex::new(1), &visited);
        assert!(frontier.advance(&visited).is_some());

        // The budget is spent even though the heap is not.
        frontier.offer(NodeIndex::new(0), &1u8, NodeIndex::new(1), &visited);
        assert_eq!(frontier.advance(&visited), None);
    }
}
