//! Minimum spanning trees over weighted adjacency graphs.
//!
//! A [`Graph`] maps every node key to a [`Context`]: the set of edges that
//! lead into the node (its heads) and the set of edges that leave it (its
//! tails). An undirected connection is stored as two directed edges so that
//! it is visible from both endpoints.
//!
//! The [`mst`] module computes spanning trees with Prim's algorithm, using one
//! of three interchangeable frontiers, and with Kruskal's algorithm.
//!
//! # Example
//!
//! ```
//! use spantree::{mst, Graph};
//!
//! let mut graph = Graph::new();
//! for node in ["a", "b", "c"] {
//!     graph.add_node(node);
//! }
//! graph.add_undirected_edge(&"a", 1, &"b").unwrap();
//! graph.add_undirected_edge(&"b", 2, &"c").unwrap();
//! graph.add_undirected_edge(&"a", 5, &"c").unwrap();
//!
//! let tree = mst::prim_at(&"a", &graph);
//! assert_eq!(tree.node_count(), 3);
//! assert_eq!(tree.edge_count(), 2);
//! assert_eq!(tree.total_weight::<i32>(), 3);
//! ```

pub mod graph;
pub mod memory;
pub mod mst;

pub use graph::{Context, Edge, Graph, GraphError, HalfEdge, Head, Tail};

/// Direction of a half-edge relative to the node that stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The edge points into the node. These are the node's heads.
    Incoming = 0,
    /// The edge points out of the node. These are the node's tails.
    Outgoing = 1,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Incoming, Direction::Outgoing];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The direction in which the other endpoint sees the same edge.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Incoming => Direction::Outgoing,
            Direction::Outgoing => Direction::Incoming,
        }
    }
}

/// Position of a node in the insertion order of a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NodeIndex(u32);

entity_impl!(NodeIndex, u32);
