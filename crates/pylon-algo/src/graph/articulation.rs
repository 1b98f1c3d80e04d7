//! Articulation points and bridges via discovery/low-link numbering.
//!
//! For a DFS tree edge `u -> v`:
//! - `u` (not the root) is a cut vertex if `low[v] >= disc[u]`
//! - `u - v` is a bridge if `low[v] > disc[u]`
//!
//! The root is a cut vertex iff it has more than one DFS child. The search
//! restarts from every unvisited node, so disconnected grids are covered.
//! The DFS runs on an explicit stack of `(node, parent, cursor)` frames and is
//! O(V + E) over the [`Topology`] snapshot. Each frame also carries the length
//! of the tree edge that reached it, so a bridge is reported without going
//! back to the parent's neighbor list.

use std::cmp::Reverse;

use pylon_core::{Kilometers, Network, SubstationId, Topology};
use serde::Serialize;

/// A substation whose removal disconnects the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriticalNode {
    pub id: SubstationId,
    /// Number of lines at analysis time
    pub degree: usize,
}

/// A line whose removal disconnects the grid, endpoints ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bridge {
    pub from: SubstationId,
    pub to: SubstationId,
    pub length: Kilometers,
}

/// Output of one structural pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuralAnalysis {
    /// Sorted by degree descending, then id ascending
    pub critical_nodes: Vec<CriticalNode>,
    /// Sorted by `(from, to)`
    pub bridges: Vec<Bridge>,
}

const UNVISITED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    parent: usize,
    cursor: usize,
    /// Length of the tree edge `parent - node`
    length: Kilometers,
}

struct LowLink {
    is_cut: Vec<bool>,
    bridges: Vec<(usize, usize, Kilometers)>,
}

fn low_link(topology: &Topology) -> LowLink {
    let n = topology.len();
    let mut disc = vec![UNVISITED; n];
    let mut low = vec![UNVISITED; n];
    let mut is_cut = vec![false; n];
    let mut bridges = Vec::new();
    let mut timer = 0;
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if disc[root] != UNVISITED {
            continue;
        }
        disc[root] = timer;
        low[root] = timer;
        timer += 1;
        let mut root_children = 0;
        stack.push(Frame {
            node: root,
            parent: UNVISITED,
            cursor: 0,
            length: Kilometers::ZERO,
        });

        while let Some(top) = stack.last_mut() {
            let u = top.node;
            if let Some(&(v, length)) = topology.neighbors(u).get(top.cursor) {
                top.cursor += 1;
                if disc[v] == UNVISITED {
                    disc[v] = timer;
                    low[v] = timer;
                    timer += 1;
                    if u == root {
                        root_children += 1;
                    }
                    stack.push(Frame {
                        node: v,
                        parent: u,
                        cursor: 0,
                        length,
                    });
                } else if v != top.parent {
                    // back edge; simple graph, so skipping the parent node
                    // skips exactly the tree edge
                    low[u] = low[u].min(disc[v]);
                }
                continue;
            }

            // u is finished: fold its low-link into the parent
            let Frame {
                node: u,
                parent,
                length,
                ..
            } = *top;
            stack.pop();
            if parent == UNVISITED {
                continue;
            }
            low[parent] = low[parent].min(low[u]);
            if parent != root && low[u] >= disc[parent] {
                is_cut[parent] = true;
            }
            if low[u] > disc[parent] {
                bridges.push((parent.min(u), parent.max(u), length));
            }
        }

        if root_children > 1 {
            is_cut[root] = true;
        }
    }

    LowLink { is_cut, bridges }
}

/// Articulation points and bridges in one pass.
pub fn analyze_structure(network: &Network) -> StructuralAnalysis {
    let topology = network.topology();
    let LowLink {
        is_cut,
        mut bridges,
    } = low_link(&topology);

    let mut critical: Vec<CriticalNode> = is_cut
        .iter()
        .enumerate()
        .filter(|(_, &cut)| cut)
        .map(|(pos, _)| CriticalNode {
            id: topology.id(pos).clone(),
            degree: topology.degree(pos),
        })
        .collect();
    // positions are id-ordered and the sort is stable, so ties stay id-ascending
    critical.sort_by_key(|node| Reverse(node.degree));

    bridges.sort_unstable_by_key(|&(a, b, _)| (a, b));
    let bridges = bridges
        .into_iter()
        .map(|(a, b, length)| Bridge {
            from: topology.id(a).clone(),
            to: topology.id(b).clone(),
            length,
        })
        .collect();

    StructuralAnalysis {
        critical_nodes: critical,
        bridges,
    }
}

/// Cut vertices ranked by degree (descending), ties by id (ascending).
///
/// Recomputed on every call; nothing is cached across mutations.
pub fn critical_nodes(network: &Network) -> Vec<CriticalNode> {
    analyze_structure(network).critical_nodes
}

/// Cut vertex ids in ascending id order.
pub fn articulation_points(network: &Network) -> Vec<SubstationId> {
    let mut ids: Vec<SubstationId> = critical_nodes(network)
        .into_iter()
        .map(|node| node.id)
        .collect();
    ids.sort();
    ids
}

pub fn bridges(network: &Network) -> Vec<Bridge> {
    analyze_structure(network).bridges
}
