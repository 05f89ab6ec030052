//! Kruskal's algorithm over a [`Graph`].

use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

use bitvec::prelude::*;

use super::frontier::Discovery;
use super::tree;
use crate::graph::Graph;
use crate::memory::EntityIndex;
use crate::NodeIndex;

/// Disjoint sets over node indices with path compression and union by rank.
#[derive(Debug, Clone)]
pub(crate) struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSets {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they already were the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let a = self.find(a);
        let b = self.find(b);
        if a == b {
            return false;
        }
        match self.rank[a].cmp(&self.rank[b]) {
            std::cmp::Ordering::Less => self.parent[a] = b,
            std::cmp::Ordering::Greater => self.parent[b] = a,
            std::cmp::Ordering::Equal => {
                self.parent[b] = a;
                self.rank[a] += 1;
            }
        }
        true
    }
}

/// Collects each undirected edge once as `(from, weight, to)`.
///
/// Edges are enumerated in node order and then in tail order. A tail whose
/// reciprocal was already enumerated from the other endpoint is skipped.
/// Self-loops never join two sets and are left out.
fn undirected_edges<K, W>(graph: &Graph<K, W>) -> Vec<(NodeIndex, W, NodeIndex)>
where
    K: Eq + Hash + Clone + Debug,
    W: Ord + Clone,
{
    let mut edges = Vec::new();

    for from in graph.node_indices() {
        let from_key = graph.key(from);
        for tail in graph.context_at(from).tails() {
            let to = graph.expect_index(&tail.node);
            if to == from {
                continue;
            }
            let seen = to < from
                && graph
                    .context_at(to)
                    .tails()
                    .iter()
                    .any(|back| back.weight == tail.weight && back.node == *from_key);
            if !seen {
                edges.push((from, tail.weight.clone(), to));
            }
        }
    }

    edges
}

pub(crate) fn kruskal<K, W>(graph: &Graph<K, W>) -> Graph<K, W>
where
    K: Eq + Hash + Clone + Debug,
    W: Ord + Clone,
{
    let node_count = graph.node_count();
    if node_count == 0 {
        log::debug!("kruskal: empty graph, nothing to span");
        return graph.clone();
    }

    let mut edges = undirected_edges(graph);
    edges.sort_by(|a, b| a.1.cmp(&b.1));

    let mut sets = DisjointSets::new(node_count);
    let mut accepted: Vec<Vec<(NodeIndex, W)>> = vec![Vec::new(); node_count];
    let mut accepted_count = 0;

    for (a, weight, b) in edges {
        if accepted_count + 1 == node_count {
            break;
        }
        if sets.union(a.index(), b.index()) {
            accepted[a.index()].push((b, weight.clone()));
            accepted[b.index()].push((a, weight));
            accepted_count += 1;
        }
    }

    log::debug!(
        "kruskal: accepted {accepted_count} edges over {node_count} nodes, {} component(s)",
        node_count - accepted_count
    );

    // Orient the forest away from the earliest node of each component.
    let mut visited = bitvec![0; node_count];
    let mut discoveries = Vec::with_capacity(node_count);
    let mut queue = VecDeque::new();

    for root in graph.node_indices() {
        if visited[root.index()] {
            continue;
        }
        visited.set(root.index(), true);
        discoveries.push(Discovery::root(root));
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            for (next, weight) in &accepted[node.index()] {
                if visited[next.index()] {
                    continue;
                }
                visited.set(next.index(), true);
                discoveries.push(Discovery::new(*next, weight.clone(), node));
                queue.push_back(*next);
            }
        }
    }

    tree::reconstruct(graph, discoveries)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disjoint_sets_union() {
        let mut sets = DisjointSets::new(4);

        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_ne!(sets.find(0), sets.find(3));

        assert!(sets.union(1, 3));
        assert_eq!(sets.find(0), sets.find(2));
    }

    #[test]
    fn reciprocal_halves_are_collected_once() {
        let mut graph = Graph::<u8, u8>::new();
        for node in 0..3 {
            graph.add_node(node);
        }
        graph.add_undirected_edge(&0, 1, &1).unwrap();
        graph.add_undirected_edge(&1, 1, &2).unwrap();
        graph.add_edge(&2, 4, &0).unwrap();
        graph.add_edge(&0, 0, &0).unwrap();

        let edges = undirected_edges(&graph);
        assert_eq!(
            edges,
            [
                (NodeIndex::new(0), 1, NodeIndex::new(1)),
                (NodeIndex::new(1), 1, NodeIndex::new(2)),
                (NodeIndex::new(2), 4, NodeIndex::new(0)),
            ]
        );
    }

    #[test]
    fn spans_every_component() {
        let mut graph = Graph::<char, u32>::new();
        for node in ['a', 'b', 'c', 'd', 'e'] {
            graph.add_node(node);
        }
        graph.add_undirected_edge(&'a', 3, &'b').unwrap();
        graph.add_undirected_edge(&'b', 1, &'c').unwrap();
        graph.add_undirected_edge(&'a', 2, &'c').unwrap();
        graph.add_undirected_edge(&'d', 7, &'e').unwrap();

        let forest = kruskal(&graph);

        assert_eq!(forest.node_count(), 5);
        assert_eq!(forest.edge_count(), 3);
        assert_eq!(forest.total_weight::<u32>(), 10);
        assert!(forest.is_symmetric());
        assert!(forest[&'a'].heads().is_empty());
        assert!(forest[&'d'].heads().is_empty());
    }
}
