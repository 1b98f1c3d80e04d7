//! Point-to-point path queries.
//!
//! Three strategies with different guarantees:
//!
//! | Strategy | Frontier | Guarantee |
//! |---|---|---|
//! | [`dfs`] | LIFO stack | finds *a* path if one exists, not necessarily short |
//! | [`bfs`] | FIFO queue | minimum hop count |
//! | [`shortest_path`] | min-heap on length | minimum total line length |
//!
//! All three visit neighbors in ascending substation id, so results are
//! reproducible. Unknown endpoints fail with [`GridError::UnknownNode`];
//! an unreachable target is a normal result with `found == false`.

mod bfs;
mod dfs;
mod dijkstra;

use std::fmt;

use pylon_core::{GridError, GridResult, Kilometers, SubstationId, Topology};
use serde::{Deserialize, Serialize};

pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{shortest_path, shortest_paths_from, ShortestPathTree};

/// Which traversal produced a [`PathResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dfs, Algorithm::Bfs, Algorithm::Dijkstra];

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "depth-first search",
            Algorithm::Bfs => "breadth-first search",
            Algorithm::Dijkstra => "Dijkstra shortest path",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Dijkstra => "dijkstra",
        };
        f.pad(name)
    }
}

/// Work done by one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    /// Nodes entered (DFS), dequeued (BFS) or popped from the heap (Dijkstra)
    pub nodes_visited: usize,
    /// Adjacency entries examined
    pub edges_explored: usize,
}

/// Outcome of a single point-to-point query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub algorithm: Algorithm,
    pub start: SubstationId,
    pub end: SubstationId,
    /// Source to destination inclusive; empty when not found
    pub path: Vec<SubstationId>,
    pub found: bool,
    /// Sum of line lengths along `path`; zero when not found
    pub total_length: Kilometers,
    pub stats: TraversalStats,
}

impl PathResult {
    /// Number of lines on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    fn trivial(algorithm: Algorithm, id: &SubstationId) -> Self {
        Self {
            algorithm,
            start: id.clone(),
            end: id.clone(),
            path: vec![id.clone()],
            found: true,
            total_length: Kilometers::ZERO,
            stats: TraversalStats {
                nodes_visited: 1,
                edges_explored: 0,
            },
        }
    }

    fn from_positions(
        algorithm: Algorithm,
        topology: &Topology,
        (start, end): (usize, usize),
        positions: Option<(Vec<usize>, Kilometers)>,
        stats: TraversalStats,
    ) -> Self {
        let (path, found, total_length) = match positions {
            Some((positions, length)) => (
                positions
                    .into_iter()
                    .map(|pos| topology.id(pos).clone())
                    .collect(),
                true,
                length,
            ),
            None => (Vec::new(), false, Kilometers::ZERO),
        };
        Self {
            algorithm,
            start: topology.id(start).clone(),
            end: topology.id(end).clone(),
            path,
            found,
            total_length,
            stats,
        }
    }
}

/// Resolve both endpoints or fail with `UnknownNode` (start checked first).
fn endpoints(topology: &Topology, start: &str, end: &str) -> GridResult<(usize, usize)> {
    let s = topology
        .position(start)
        .ok_or_else(|| GridError::UnknownNode(start.into()))?;
    let e = topology
        .position(end)
        .ok_or_else(|| GridError::UnknownNode(end.into()))?;
    Ok((s, e))
}

const NO_PARENT: usize = usize::MAX;

/// Walk parent pointers from `end` back to `start`.
fn reconstruct(parent: &[usize], start: usize, end: usize) -> Vec<usize> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = parent[current];
        path.push(current);
    }
    path.reverse();
    path
}

/// Sum of line lengths along a sequence of adjacent positions.
fn positions_length(topology: &Topology, path: &[usize]) -> Kilometers {
    path.windows(2)
        .filter_map(|pair| {
            let neighbors = topology.neighbors(pair[0]);
            neighbors
                .binary_search_by_key(&pair[1], |&(pos, _)| pos)
                .ok()
                .map(|i| neighbors[i].1)
        })
        .sum()
}
