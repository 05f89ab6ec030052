//! Rebuilding a graph from the order in which a traversal discovered its nodes.

use std::hash::Hash;

use super::frontier::Discovery;
use crate::graph::{Context, Graph, HalfEdge};
use crate::memory::SecondaryMap;
use crate::NodeIndex;

/// Builds the tree (or forest) described by a sequence of discoveries.
///
/// Every discovery names a node of `graph` together with the edge that led to
/// it; roots carry no edge. A discovery must come after the discovery of its
/// predecessor. The nodes of the result appear in discovery order.
///
/// Traversals only record how a node was reached, so each node first receives
/// its head. The matching tails are then added at the predecessors, which
/// makes every edge visible from both endpoints.
pub(crate) fn reconstruct<K, W>(
    graph: &Graph<K, W>,
    discoveries: impl IntoIterator<Item = Discovery<W>>,
) -> Graph<K, W>
where
    K: Eq + Hash + Clone,
    W: PartialEq + Clone,
{
    let discoveries: Vec<_> = discoveries.into_iter().collect();
    let mut tree = Graph::with_capacity(discoveries.len());
    let mut renamed: SecondaryMap<NodeIndex, Option<NodeIndex>> =
        SecondaryMap::with_capacity(graph.node_count());

    for discovery in &discoveries {
        let heads = discovery
            .via
            .iter()
            .map(|link| HalfEdge::new(link.weight.clone(), graph.key(link.from).clone()));
        let index = tree.push_node(graph.key(discovery.node).clone(), Context::with_heads(heads));
        renamed[discovery.node] = Some(index);
    }

    for discovery in discoveries {
        let Some(link) = discovery.via else { continue };
        if let (Some(from), Some(to)) = (renamed[link.from], renamed[discovery.node]) {
            tree.splice(from, link.weight, to);
        }
    }

    debug_assert!(tree.is_symmetric());
    tree
}
