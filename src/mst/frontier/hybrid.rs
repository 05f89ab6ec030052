use std::collections::BinaryHeap;

use bitvec::slice::BitSlice;

use super::{Discovery, FrontierStrategy, HeapEntry};
use crate::memory::{EntityIndex, SecondaryMap};
use crate::NodeIndex;

/// Frontier that pairs a per-node table of the best known weight with a
/// min-heap of edges.
///
/// An edge is pushed only when it improves on the table, so the heap stays
/// smaller than in [`HeapFrontier`], but superseded entries are still left
/// behind and filtered when popped. The number of nodes in the table tells
/// when the reachable part of the graph is exhausted.
///
/// [`HeapFrontier`]: super::HeapFrontier
#[derive(Debug, Clone)]
pub(crate) struct HybridFrontier<W> {
    optimal: SecondaryMap<NodeIndex, Option<W>>,
    pending: usize,
    heap: BinaryHeap<HeapEntry<W>>,
    sequence: usize,
}

impl<W: Ord + Clone> FrontierStrategy<W> for HybridFrontier<W> {
    fn with_nodes(node_count: usize) -> Self {
        Self {
            optimal: SecondaryMap::with_capacity(node_count),
            pending: 0,
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    fn offer(&mut self, from: NodeIndex, weight: &W, to: NodeIndex, visited: &BitSlice) {
        if visited[to.index()] {
            return;
        }

        let slot = &mut self.optimal[to];
        match slot {
            Some(best) if *best <= *weight => return,
            Some(_) => {}
            None => self.pending += 1,
        }
        *slot = Some(weight.clone());

        self.heap.push(HeapEntry {
            weight: weight.clone(),
            sequence: self.sequence,
            from,
            to,
        });
        self.sequence += 1;
    }

    fn advance(&mut self, visited: &BitSlice) -> Option<Discovery<W>> {
        if self.pending == 0 {
            return None;
        }

        while let Some(entry) = self.heap.pop() {
            if visited[entry.to.index()] {
                continue;
            }
            if self.optimal.take(entry.to).is_some() {
                self.pending -= 1;
            }
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
    fn only_improvements_are_pushed() {
        let visited = bitvec![1, 1, 0];
        let mut frontier = HybridFrontier::with_nodes(3);

        frontier.offer(NodeIndex::new(0), &4u8, NodeIndex::new(2), &visited);
        frontier.offer(NodeIndex::new(1), &4u8, NodeIndex::new(2), &visited);
        frontier.offer(NodeIndex::new(1), &6u8, NodeIndex::new(2), &visited);
        assert_eq!(frontier.heap.len(), 1);

        frontier.offer(NodeIndex::new(1), &2u8, NodeIndex::new(2), &visited);
        assert_eq!(frontier.heap.len(), 2);
        assert_eq!(frontier.pending, 1);

        assert_eq!(
            frontier.advance(&visited),
            Some(Discovery::new(NodeIndex::new(2), 2, NodeIndex::new(1)))
        );
    }

    #[test]
    fn empty_table_ends_the_walk() {
        let mut visited = bitvec![1, 0];
        let mut frontier = HybridFrontier::with_nodes(2);

        frontier.offer(NodeIndex::new(0), &3u8, NodeIndex::new(1), &visited);
        frontier.offer(NodeIndex::new(0), &1u8, NodeIndex::new(1), &visited);
        assert!(frontier.advance(&visited).is_some());
        visited.set(1, true);

        // The superseded entry is still queued but the table is empty.
        assert_eq!(frontier.heap.len(), 1);
        assert_eq!(frontier.advance(&visited), None);
    }
}
