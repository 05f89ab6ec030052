use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use bitvec::slice::BitSlice;

use super::{Discovery, FrontierStrategy, Link};
use crate::memory::EntityIndex;
use crate::NodeIndex;

/// Frontier that remembers the cheapest known edge into every reachable,
/// unvisited node.
///
/// Extraction scans the whole table, so a run costs *O*(V·E) in the worst
/// case. Equal weights resolve towards the node that was inserted into the
/// graph first.
#[derive(Debug, Clone)]
pub(crate) struct MapFrontier<W> {
    optimal: BTreeMap<NodeIndex, Link<W>>,
}

impl<W: Ord + Clone> FrontierStrategy<W> for MapFrontier<W> {
    fn with_nodes(_node_count: usize) -> Self {
        Self {
            optimal: BTreeMap::new(),
        }
    }

    fn offer(&mut self, from: NodeIndex, weight: &W, to: NodeIndex, visited: &BitSlice) {
        if visited[to.index()] {
            return;
        }

        match self.optimal.entry(to) {
            Entry::Vacant(entry) => {
                entry.insert(Link {
                    weight: weight.clone(),
                    from,
                });
            }
            Entry::Occupied(mut entry) => {
                if *weight < entry.get().weight {
                    entry.insert(Link {
                        weight: weight.clone(),
                        from,
                    });
                }
            }
        }
    }

    fn advance(&mut self, _visited: &BitSlice) -> Option<Discovery<W>> {
        let node = self
            .optimal
            .iter()
            .min_by(|(_, a), (_, b)| a.weight.cmp(&b.weight))
            .map(|(node, _)| *node)?;
        let via = self.optimal.remove(&node)?;
        Some(Discovery {
            node,
            via: Some(via),
        })
    }
}
