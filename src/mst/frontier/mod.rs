//! Frontiers for Prim's algorithm.
//!
//! A frontier tracks the edges that connect the visited nodes to the rest of
//! the graph and hands out the cheapest one on request. The three
//! implementations differ in what they keep around:
//!
//!  - [`MapFrontier`] keeps only the cheapest known edge per unvisited node
//!    and scans for the minimum.
//!  - [`HeapFrontier`] keeps every edge it was offered in a binary heap and
//!    drops edges into visited nodes when they surface.
//!  - [`HybridFrontier`] keeps the per-node table for bookkeeping and a heap
//!    of improving edges for extraction.

mod heap;
mod hybrid;
mod map;

use std::cmp::Ordering;

use bitvec::slice::BitSlice;

use crate::NodeIndex;

pub(crate) use heap::HeapFrontier;
pub(crate) use hybrid::HybridFrontier;
pub(crate) use map::MapFrontier;

/// The edge through which a node was discovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Link<W> {
    pub weight: W,
    pub from: NodeIndex,
}

/// A node together with the edge that discovered it. Roots have no edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Discovery<W> {
    pub node: NodeIndex,
    pub via: Option<Link<W>>,
}

impl<W> Discovery<W> {
    pub fn root(node: NodeIndex) -> Self {
        Self { node, via: None }
    }

    pub fn new(node: NodeIndex, weight: W, from: NodeIndex) -> Self {
        Self {
            node,
            via: Some(Link { weight, from }),
        }
    }
}

pub(crate) trait FrontierStrategy<W> {
    /// Creates an empty frontier for a graph with `node_count` nodes.
    fn with_nodes(node_count: usize) -> Self;

    /// Offers the edge `from -> to`, where `from` has just been visited.
    fn offer(&mut self, from: NodeIndex, weight: &W, to: NodeIndex, visited: &BitSlice);

    /// Removes the cheapest edge into an unvisited node.
    ///
    /// Returns `None` once no unvisited node is reachable.
    fn advance(&mut self, visited: &BitSlice) -> Option<Discovery<W>>;
}

/// Heap entry ordered by weight, then by the order in which it was pushed.
///
/// The ordering is reversed so that [`std::collections::BinaryHeap`] yields
/// the cheapest, earliest entry first.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry<W> {
    pub weight: W,
    pub sequence: usize,
    pub from: NodeIndex,
    pub to: NodeIndex,
}

impl<W: Ord> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<W: Ord> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Ord> Eq for HeapEntry<W> {}

impl<W> From<HeapEntry<W>> for Discovery<W> {
    fn from(entry: HeapEntry<W>) -> Self {
        Discovery::new(entry.to, entry.weight, entry.from)
    }
}

#[cfg(test)]
mod test {
    use std::collections::BinaryHeap;

    use bitvec::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::memory::EntityIndex;

    fn n(index: usize) -> NodeIndex {
        NodeIndex::new(index)
    }

    #[test]
    fn heap_yields_cheapest_then_earliest() {
        let mut heap = BinaryHeap::new();
        for (sequence, weight) in [5, 1, 3, 1].into_iter().enumerate() {
            heap.push(HeapEntry {
                weight,
                sequence,
                from: n(0),
                to: n(sequence + 1),
            });
        }

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|entry| (entry.weight, entry.sequence))
            .collect();
        assert_eq!(order, [(1, 1), (1, 3), (3, 2), (5, 0)]);
    }

    fn drain<F: FrontierStrategy<u32>>() -> Vec<Discovery<u32>> {
        // Star around node 0 with a competing, cheaper edge into node 2 from node 1.
        let mut visited = bitvec![0; 4];
        let mut frontier = F::with_nodes(4);
        let mut discovered = Vec::new();

        visited.set(0, true);
        frontier.offer(n(0), &4, n(1), &visited);
        frontier.offer(n(0), &9, n(2), &visited);
        frontier.offer(n(0), &6, n(3), &visited);

        let first = frontier.advance(&visited).unwrap();
        visited.set(first.node.index(), true);
        frontier.offer(n(1), &2, n(2), &visited);
        frontier.offer(n(1), &4, n(0), &visited);
        discovered.push(first);

        while let Some(next) = frontier.advance(&visited) {
            visited.set(next.node.index(), true);
            discovered.push(next);
        }
        discovered
    }

    #[rstest]
    #[case::map(drain::<MapFrontier<u32>>())]
    #[case::heap(drain::<HeapFrontier<u32>>())]
    #[case::hybrid(drain::<HybridFrontier<u32>>())]
    fn frontiers_pick_cheapest_crossing_edge(#[case] discovered: Vec<Discovery<u32>>) {
        assert_eq!(
            discovered,
            [
                Discovery::new(n(1), 4, n(0)),
                Discovery::new(n(2), 2, n(1)),
                Discovery::new(n(3), 6, n(0)),
            ]
        );
    }
}
