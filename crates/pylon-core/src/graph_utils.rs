use std::collections::VecDeque;

use serde::Serialize;

use crate::units::Megawatts;
use crate::{Network, SubstationId};

/// Summary statistics produced by `pylon stats` (density/degree/connected components).
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected_components: usize,
    pub min_degree: usize,
    pub avg_degree: f64,
    pub max_degree: usize,
    pub density: f64,
    pub total_capacity: Megawatts,
}

/// A connected component of the grid with its aggregate capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Island {
    pub island_id: usize,
    /// Member ids, ascending
    pub members: Vec<SubstationId>,
    pub member_count: usize,
    pub capacity: Megawatts,
}

impl Island {
    pub fn contains(&self, id: &str) -> bool {
        self.members
            .binary_search_by(|probe| probe.as_str().cmp(id))
            .is_ok()
    }
}

/// Aggregated island analysis result.
#[derive(Debug, Clone, Serialize)]
pub struct IslandAnalysis {
    pub islands: Vec<Island>,
}

impl IslandAnalysis {
    pub fn len(&self) -> usize {
        self.islands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.islands.is_empty()
    }

    /// Sum of island capacities; equals the network total because islands
    /// partition the node set.
    pub fn total_capacity(&self) -> Megawatts {
        self.islands.iter().map(|island| island.capacity).sum()
    }

    pub fn island_of(&self, id: &str) -> Option<&Island> {
        self.islands.iter().find(|island| island.contains(id))
    }
}

/// Calculates graph-level statistics such as density, degree distribution, and component counts.
pub fn graph_stats(network: &Network) -> GraphStats {
    let topology = network.topology();
    let node_count = topology.len();
    let edge_count = topology.edge_count();
    let degrees: Vec<usize> = (0..node_count).map(|pos| topology.degree(pos)).collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let avg_degree = if node_count == 0 {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / node_count as f64
    };
    let density = if node_count < 2 {
        0.0
    } else {
        2.0 * edge_count as f64 / (node_count as f64 * (node_count as f64 - 1.0))
    };
    GraphStats {
        node_count,
        edge_count,
        connected_components: find_islands(network).len(),
        min_degree,
        avg_degree,
        max_degree,
        density,
        total_capacity: network.total_capacity(),
    }
}

/// Labels connected components with a single breadth-first sweep.
///
/// Sweep order is ascending id, so islands come out ordered by their smallest
/// member and `island_id` is stable for a given topology.
pub fn find_islands(network: &Network) -> IslandAnalysis {
    let topology = network.topology();
    let mut visited = vec![false; topology.len()];
    let mut islands = Vec::new();

    for start in 0..topology.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut members = Vec::new();
        while let Some(node) = queue.pop_front() {
            members.push(node);
            for &(neighbor, _) in topology.neighbors(node) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        // positions are id-ordered, so sorting positions sorts ids
        members.sort_unstable();
        let members: Vec<SubstationId> = members
            .into_iter()
            .map(|pos| topology.id(pos).clone())
            .collect();
        let capacity = members
            .iter()
            .filter_map(|id| network.substation(id.as_str()))
            .map(|s| s.capacity)
            .sum();
        islands.push(Island {
            island_id: islands.len(),
            member_count: members.len(),
            members,
            capacity,
        });
    }

    IslandAnalysis { islands }
}
