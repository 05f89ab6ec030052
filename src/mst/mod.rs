//! Minimum spanning trees.
//!
//! [`prim`] and [`prim_at`] grow a tree from a single node and therefore span
//! only the connected component of that node. [`kruskal`] spans every
//! component of the graph.
//!
//! The result is always a new [`Graph`] whose edges point away from the root:
//! every node apart from the root has exactly one head, and every head is
//! matched by a tail at its predecessor. The input is never modified.
//!
//! # Example
//!
//! ```
//! use spantree::mst::{Frontier, Prim};
//! use spantree::Graph;
//!
//! let mut graph = Graph::new();
//! for node in 0..4 {
//!     graph.add_node(node);
//! }
//! graph.add_undirected_edge(&0, 4, &1).unwrap();
//! graph.add_undirected_edge(&0, 1, &2).unwrap();
//! graph.add_undirected_edge(&2, 2, &1).unwrap();
//! graph.add_undirected_edge(&2, 5, &3).unwrap();
//! graph.add_undirected_edge(&1, 3, &3).unwrap();
//!
//! let tree = Prim::with_frontier(Frontier::Map).run_at(&0, &graph);
//! assert_eq!(tree.total_weight::<i32>(), 6);
//! assert_eq!(tree.edge_count(), 3);
//! ```

mod frontier;
mod kruskal;
mod tree;

use std::fmt::Debug;
use std::hash::Hash;

use bitvec::prelude::*;

use self::frontier::{
    Discovery, FrontierStrategy, HeapFrontier, HybridFrontier, MapFrontier,
};
use crate::graph::Graph;
use crate::memory::EntityIndex;
use crate::NodeIndex;

/// Data structure used by Prim's algorithm to find the next cheapest edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frontier {
    /// Cheapest known edge per node, found by a linear scan.
    Map,
    /// Binary heap holding every edge seen so far.
    Heap,
    /// Cheapest known weight per node alongside a heap of improving edges.
    #[default]
    Hybrid,
}

/// Configurable runner for Prim's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Prim {
    frontier: Frontier,
}

impl Prim {
    /// A runner using the default [`Frontier::Hybrid`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frontier(frontier: Frontier) -> Self {
        Self { frontier }
    }

    pub fn frontier(&self) -> Frontier {
        self.frontier
    }

    /// Computes a minimum spanning tree starting from an arbitrary node.
    ///
    /// An empty graph is returned unchanged.
    pub fn run<K, W>(&self, graph: &Graph<K, W>) -> Graph<K, W>
    where
        K: Eq + Hash + Clone + Debug,
        W: Ord + Clone,
    {
        match graph.any_node() {
            Some((start, _)) => self.run_at(start, graph),
            None => {
                log::debug!("prim: empty graph, nothing to span");
                graph.clone()
            }
        }
    }

    /// Computes a minimum spanning tree of the component containing `start`.
    ///
    /// When `start` is not part of the graph, the graph is returned unchanged.
    pub fn run_at<K, W>(&self, start: &K, graph: &Graph<K, W>) -> Graph<K, W>
    where
        K: Eq + Hash + Clone + Debug,
        W: Ord + Clone,
    {
        let Some(start) = graph.node_index(start) else {
            log::debug!("prim: start node {start:?} is not in the graph, returning it unchanged");
            return graph.clone();
        };

        let discoveries = match self.frontier {
            Frontier::Map => discover::<MapFrontier<W>, K, W>(graph, start),
            Frontier::Heap => discover::<HeapFrontier<W>, K, W>(graph, start),
            Frontier::Hybrid => discover::<HybridFrontier<W>, K, W>(graph, start),
        };

        log::debug!(
            "prim: spanned {} of {} nodes using the {:?} frontier",
            discoveries.len(),
            graph.node_count(),
            self.frontier
        );

        tree::reconstruct(graph, discoveries)
    }
}

/// Visits the component of `start` in the order Prim's algorithm adds nodes.
fn discover<F, K, W>(graph: &Graph<K, W>, start: NodeIndex) -> Vec<Discovery<W>>
where
    F: FrontierStrategy<W>,
    K: Eq + Hash + Clone + Debug,
    W: Ord + Clone,
{
    let node_count = graph.node_count();
    let mut visited = bitvec![0; node_count];
    let mut frontier = F::with_nodes(node_count);
    let mut discoveries = vec![Discovery::root(start)];
    let mut current = start;

    loop {
        visited.set(current.index(), true);

        for tail in graph.context_at(current).tails() {
            let to = graph.expect_index(&tail.node);
            frontier.offer(current, &tail.weight, to, &visited);
        }

        let Some(next) = frontier.advance(&visited) else {
            break;
        };
        log::trace!("prim: reached {:?}", graph.key(next.node));
        current = next.node;
        discoveries.push(next);
    }

    discoveries
}

/// Computes a minimum spanning tree from an arbitrary node using
/// [`Frontier::Hybrid`].
///
/// An empty graph is returned unchanged.
pub fn prim<K, W>(graph: &Graph<K, W>) -> Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Ord + Clone,
{
    Prim::new().run(graph)
}

/// Computes a minimum spanning tree of the component containing `start` using
/// [`Frontier::Hybrid`].
///
/// When `start` is not part of the graph, the graph is returned unchanged.
pub fn prim_at<K, W>(start: &K, graph: &Graph<K, W>) -> Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Ord + Clone,
{
    Prim::new().run_at(start, graph)
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are considered in ascending weight, with ties in the order they are
/// enumerated from the graph. Unlike Prim's algorithm, every component of the
/// graph is spanned; each tree is rooted at its earliest inserted node.
///
/// An empty graph is returned unchanged.
pub fn kruskal<K, W>(graph: &Graph<K, W>) -> Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Ord + Clone,
{
    kruskal::kruskal(graph)
}
