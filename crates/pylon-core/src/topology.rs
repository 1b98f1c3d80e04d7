//! Dense adjacency snapshot of a [`Network`].
//!
//! Positions `0..len` follow ascending substation id, and every neighbor list
//! is in ascending position order. Algorithms work on this snapshot so their
//! visiting order is reproducible regardless of petgraph's internal layout.

use petgraph::visit::{EdgeRef, NodeIndexable};

use crate::units::Kilometers;
use crate::{Network, SubstationId};

#[derive(Debug, Clone)]
pub struct Topology {
    ids: Vec<SubstationId>,
    adjacency: Vec<Vec<(usize, Kilometers)>>,
}

impl Topology {
    /// Build the snapshot in O(V + E).
    ///
    /// Nodes are visited in ascending position order and each one is pushed
    /// onto its neighbors' lists, so every list comes out sorted without a
    /// sort pass.
    pub fn from_network(network: &Network) -> Self {
        let graph = network.graph();
        let index = network.index();

        let mut position = vec![usize::MAX; graph.node_bound()];
        let mut ids = Vec::with_capacity(index.len());
        for (pos, (id, idx)) in index.iter().enumerate() {
            position[idx.index()] = pos;
            ids.push(id.clone());
        }

        let mut adjacency = vec![Vec::new(); ids.len()];
        for (pos, idx) in index.values().enumerate() {
            for edge in graph.edges(*idx) {
                let other = if edge.source() == *idx {
                    edge.target()
                } else {
                    edge.source()
                };
                adjacency[position[other.index()]].push((pos, edge.weight().length));
            }
        }

        Self { ids, adjacency }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, pos: usize) -> &SubstationId {
        &self.ids[pos]
    }

    pub fn ids(&self) -> &[SubstationId] {
        &self.ids
    }

    /// Position of `id`, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.binary_search_by(|probe| probe.as_str().cmp(id)).ok()
    }

    /// Neighbors of `pos` as `(position, length)`, ascending by position.
    pub fn neighbors(&self, pos: usize) -> &[(usize, Kilometers)] {
        &self.adjacency[pos]
    }

    pub fn degree(&self, pos: usize) -> usize {
        self.adjacency[pos].len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}
