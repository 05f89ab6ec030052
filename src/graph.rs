//! Weighted adjacency graph keyed by arbitrary node identifiers.
//!
//! Every node owns a [`Context`] with two sets of half-edges: the heads, which
//! record the edges arriving at the node, and the tails, which record the
//! edges leaving it. A directed edge `from -> to` of weight `w` is stored as a
//! tail `(w, to)` at `from` and a head `(w, from)` at `to`. Undirected edges
//! are stored as a pair of directed edges, one in each direction.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::{FusedIterator, Sum};
use std::ops::Index;

use thiserror::Error;

use crate::memory::EntityIndex;
pub use crate::{Direction, NodeIndex};

/// One endpoint's view of an edge: its weight and the node at the other end.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HalfEdge<K, W> {
    pub weight: W,
    pub node: K,
}

impl<K, W> HalfEdge<K, W> {
    pub fn new(weight: W, node: K) -> Self {
        Self { weight, node }
    }
}

/// Incoming half-edge. `node` is the predecessor.
pub type Head<K, W> = HalfEdge<K, W>;

/// Outgoing half-edge. `node` is the successor.
pub type Tail<K, W> = HalfEdge<K, W>;

/// A directed edge `from -> to` with a weight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<K, W> {
    pub from: K,
    pub weight: W,
    pub to: K,
}

impl<K, W> Edge<K, W> {
    pub fn new(from: K, weight: W, to: K) -> Self {
        Self { from, weight, to }
    }
}

/// The adjacency of a single node.
///
/// Heads and tails behave as sets: inserting a half-edge that is already
/// present does nothing. Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct Context<K, W> {
    /// Indexed by [`Direction`]: heads first, then tails.
    edges: [Vec<HalfEdge<K, W>>; 2],
}

impl<K, W> Context<K, W> {
    /// Creates a context without any edges.
    pub fn new() -> Self {
        Self {
            edges: [Vec::new(), Vec::new()],
        }
    }

    /// Creates a context with the given heads and no tails.
    pub fn with_heads(heads: impl IntoIterator<Item = Head<K, W>>) -> Self
    where
        K: PartialEq,
        W: PartialEq,
    {
        let mut context = Self::new();
        for head in heads {
            context.insert(Direction::Incoming, head);
        }
        context
    }

    /// The half-edges in the given direction.
    #[inline]
    pub fn half_edges(&self, direction: Direction) -> &[HalfEdge<K, W>] {
        &self.edges[direction.index()]
    }

    /// Shorthand for [`Context::half_edges`] in the incoming direction.
    #[inline]
    pub fn heads(&self) -> &[Head<K, W>] {
        self.half_edges(Direction::Incoming)
    }

    /// Shorthand for [`Context::half_edges`] in the outgoing direction.
    #[inline]
    pub fn tails(&self) -> &[Tail<K, W>] {
        self.half_edges(Direction::Outgoing)
    }

    /// Inserts a half-edge unless an equal one is already present.
    ///
    /// Returns whether the context changed.
    pub fn insert(&mut self, direction: Direction, half_edge: HalfEdge<K, W>) -> bool
    where
        K: PartialEq,
        W: PartialEq,
    {
        let set = &mut self.edges[direction.index()];
        if set.contains(&half_edge) {
            return false;
        }
        set.push(half_edge);
        true
    }

    /// Whether the context holds an equal half-edge in the given direction.
    pub fn contains(&self, direction: Direction, half_edge: &HalfEdge<K, W>) -> bool
    where
        K: PartialEq,
        W: PartialEq,
    {
        self.half_edges(direction).contains(half_edge)
    }
}

impl<K, W> Default for Context<K, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, W: PartialEq> PartialEq for Context<K, W> {
    fn eq(&self, other: &Self) -> bool {
        Direction::ALL.into_iter().all(|direction| {
            let ours = self.half_edges(direction);
            let theirs = other.half_edges(direction);
            ours.len() == theirs.len() && ours.iter().all(|half| theirs.contains(half))
        })
    }
}

impl<K: Eq, W: Eq> Eq for Context<K, W> {}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("the node is not part of the graph")]
    UnknownNode,
    #[error("the node was already added to the graph")]
    DuplicateNode,
}

#[derive(Debug, Clone)]
struct NodeData<K, W> {
    key: K,
    context: Context<K, W>,
}

/// A graph that maps node keys to their adjacency [`Context`].
///
/// Nodes are stored in insertion order and can be addressed either by key or
/// by their [`NodeIndex`].
#[derive(Debug, Clone)]
pub struct Graph<K, W> {
    nodes: Vec<NodeData<K, W>>,
    indices: HashMap<K, NodeIndex>,
}

impl<K, W> Default for Graph<K, W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            indices: HashMap::new(),
        }
    }
}

impl<K, W> Graph<K, W>
where
    K: Eq + Hash + Clone,
    W: PartialEq,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty graph with preallocated capacity for nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            indices: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from a collection of node contexts and a batch of
    /// edges to splice in.
    ///
    /// The contexts are taken as given. Each edge adds a tail at its source
    /// and a head at its target, skipping half-edges that are already present.
    /// The result satisfies the symmetry invariant when every head and tail
    /// in `contexts` is covered by one of the `edges`.
    ///
    /// # Errors
    ///
    ///  - When a key appears twice in `contexts`.
    ///  - When an edge refers to a node that is not in `contexts`.
    ///
    /// # Example
    ///
    /// ```
    /// # use spantree::{Context, Edge, Graph, HalfEdge};
    /// let graph = Graph::from_parts(
    ///     [
    ///         ("a", Context::new()),
    ///         ("b", Context::with_heads([HalfEdge::new(3, "a")])),
    ///     ],
    ///     [Edge::new("a", 3, "b")],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(graph.edge_count(), 1);
    /// assert_eq!(graph[&"a"].tails(), [HalfEdge::new(3, "b")]);
    /// assert!(graph.is_symmetric());
    /// ```
    pub fn from_parts(
        contexts: impl IntoIterator<Item = (K, Context<K, W>)>,
        edges: impl IntoIterator<Item = Edge<K, W>>,
    ) -> Result<Self, GraphError>
    where
        W: Clone,
    {
        let contexts = contexts.into_iter();
        let mut graph = Self::with_capacity(contexts.size_hint().0);

        for (key, context) in contexts {
            if graph.contains_node(&key) {
                return Err(GraphError::DuplicateNode);
            }
            graph.push_node(key, context);
        }

        for edge in edges {
            graph.add_edge(&edge.from, edge.weight, &edge.to)?;
        }

        Ok(graph)
    }

    /// Add a node to the graph.
    ///
    /// Adding a key that is already present leaves the graph unchanged and
    /// returns the existing index.
    pub fn add_node(&mut self, key: K) -> NodeIndex {
        match self.indices.get(&key) {
            Some(index) => *index,
            None => self.push_node(key, Context::new()),
        }
    }

    pub(crate) fn push_node(&mut self, key: K, context: Context<K, W>) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        self.indices.insert(key.clone(), index);
        self.nodes.push(NodeData { key, context });
        index
    }

    /// Add a directed edge `from -> to`.
    ///
    /// # Errors
    ///
    /// When either endpoint is not part of the graph. In that case the graph
    /// is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// # use spantree::{Graph, HalfEdge};
    /// let mut graph = Graph::new();
    /// graph.add_node(0);
    /// graph.add_node(1);
    /// graph.add_edge(&0, 'x', &1).unwrap();
    ///
    /// assert_eq!(graph[&0].tails(), [HalfEdge::new('x', 1)]);
    /// assert_eq!(graph[&1].heads(), [HalfEdge::new('x', 0)]);
    /// assert!(graph.add_edge(&0, 'y', &2).is_err());
    /// ```
    pub fn add_edge(&mut self, from: &K, weight: W, to: &K) -> Result<(), GraphError>
    where
        W: Clone,
    {
        let from = self.node_index(from).ok_or(GraphError::UnknownNode)?;
        let to = self.node_index(to).ok_or(GraphError::UnknownNode)?;
        self.splice(from, weight, to);
        Ok(())
    }

    /// Add an undirected edge between `a` and `b`, stored as one directed edge
    /// in each direction.
    ///
    /// # Errors
    ///
    /// When either endpoint is not part of the graph. In that case the graph
    /// is unchanged.
    pub fn add_undirected_edge(&mut self, a: &K, weight: W, b: &K) -> Result<(), GraphError>
    where
        W: Clone,
    {
        let a = self.node_index(a).ok_or(GraphError::UnknownNode)?;
        let b = self.node_index(b).ok_or(GraphError::UnknownNode)?;
        self.splice(a, weight.clone(), b);
        self.splice(b, weight, a);
        Ok(())
    }

    /// Records a directed edge at both of its endpoints.
    pub(crate) fn splice(&mut self, from: NodeIndex, weight: W, to: NodeIndex)
    where
        W: Clone,
    {
        let from_key = self.nodes[from.index()].key.clone();
        let to_key = self.nodes[to.index()].key.clone();
        self.nodes[from.index()]
            .context
            .insert(Direction::Outgoing, HalfEdge::new(weight.clone(), to_key));
        self.nodes[to.index()]
            .context
            .insert(Direction::Incoming, HalfEdge::new(weight, from_key));
    }

    /// Returns whether the graph has a node with the given key.
    #[inline]
    pub fn contains_node(&self, key: &K) -> bool {
        self.indices.contains_key(key)
    }

    /// Returns the index of the node with the given key.
    #[inline]
    pub fn node_index(&self, key: &K) -> Option<NodeIndex> {
        self.indices.get(key).copied()
    }

    /// Returns the index of a node that must be present.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist. Every key reached through an edge
    /// of a consistent graph exists, so this indicates a broken graph.
    pub(crate) fn expect_index(&self, key: &K) -> NodeIndex
    where
        K: Debug,
    {
        match self.node_index(key) {
            Some(index) => index,
            None => panic!("node {key:?} is referenced by an edge but missing from the graph"),
        }
    }

    /// Borrows the context of the node with the given key.
    #[inline]
    pub fn context(&self, key: &K) -> Option<&Context<K, W>> {
        let index = self.node_index(key)?;
        Some(&self.nodes[index.index()].context)
    }

    /// Returns one node of the graph, or `None` when the graph is empty.
    ///
    /// The node returned is the earliest inserted one.
    pub fn any_node(&self) -> Option<(&K, &Context<K, W>)> {
        self.nodes.first().map(|node| (&node.key, &node.context))
    }

    /// The key of the node at `index`.
    #[inline]
    pub(crate) fn key(&self, index: NodeIndex) -> &K {
        &self.nodes[index.index()].key
    }

    /// The context of the node at `index`.
    #[inline]
    pub(crate) fn context_at(&self, index: NodeIndex) -> &Context<K, W> {
        &self.nodes[index.index()].context
    }

    /// Iterates over the node indices in insertion order.
    pub(crate) fn node_indices(&self) -> impl ExactSizeIterator<Item = NodeIndex> {
        (0..self.nodes.len()).map(NodeIndex::new)
    }

    /// Iterates over the nodes with their contexts in insertion order.
    pub fn nodes(&self) -> Nodes<'_, K, W> {
        Nodes(self.nodes.iter())
    }

    /// Iterates over every directed edge, once per head.
    ///
    /// # Example
    ///
    /// ```
    /// # use spantree::{Edge, Graph};
    /// let mut graph = Graph::new();
    /// graph.add_node('a');
    /// graph.add_node('b');
    /// graph.add_undirected_edge(&'a', 2, &'b').unwrap();
    ///
    /// let edges: Vec<_> = graph.edges().collect();
    /// assert_eq!(edges, [Edge::new(&'b', &2, &'a'), Edge::new(&'a', &2, &'b')]);
    /// ```
    pub fn edges(&self) -> impl Iterator<Item = Edge<&K, &W>> + '_ {
        self.nodes.iter().flat_map(|node| {
            node.context
                .heads()
                .iter()
                .map(move |head| Edge::new(&head.node, &head.weight, &node.key))
        })
    }

    /// Returns the number of nodes in the graph.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of directed edges in the graph, counting every head once.
    ///
    /// An undirected edge added with [`Graph::add_undirected_edge`] counts twice.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.context.heads().len()).sum()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Sums the weights of every directed edge.
    pub fn total_weight<S>(&self) -> S
    where
        S: for<'a> Sum<&'a W>,
    {
        self.nodes
            .iter()
            .flat_map(|node| node.context.heads().iter().map(|head| &head.weight))
            .sum()
    }

    /// Checks that every edge is visible from both of its endpoints: each tail
    /// `(w, s)` at `n` has a head `(w, n)` at `s`, and each head has the
    /// matching tail.
    pub fn is_symmetric(&self) -> bool {
        self.nodes.iter().all(|node| {
            Direction::ALL.into_iter().all(|direction| {
                node.context.half_edges(direction).iter().all(|half| {
                    self.context(&half.node).map_or(false, |other| {
                        other
                            .half_edges(direction.reverse())
                            .iter()
                            .any(|h| h.weight == half.weight && h.node == node.key)
                    })
                })
            })
        })
    }
}

impl<K, W> Index<&K> for Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: PartialEq,
{
    type Output = Context<K, W>;

    /// Unconditional context lookup.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    fn index(&self, key: &K) -> &Self::Output {
        self.context_at(self.expect_index(key))
    }
}

impl<K, W> PartialEq for Graph<K, W>
where
    K: Eq + Hash + Clone,
    W: PartialEq,
{
    /// Graphs are equal when they have the same node keys and every node has
    /// the same heads and tails, regardless of insertion order.
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self
                .nodes
                .iter()
                .all(|node| other.context(&node.key) == Some(&node.context))
    }
}

impl<K, W> Eq for Graph<K, W>
where
    K: Eq + Hash + Clone,
    W: Eq,
{
}

/// Iterator over the nodes of a graph, created by [`Graph::nodes`].
#[derive(Debug, Clone)]
pub struct Nodes<'a, K, W>(std::slice::Iter<'a, NodeData<K, W>>);

impl<'a, K, W> Iterator for Nodes<'a, K, W> {
    type Item = (&'a K, &'a Context<K, W>);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|node| (&node.key, &node.context))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, K, W> ExactSizeIterator for Nodes<'a, K, W> {}
impl<'a, K, W> FusedIterator for Nodes<'a, K, W> {}
