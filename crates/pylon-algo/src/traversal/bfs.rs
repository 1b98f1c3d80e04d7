use std::collections::VecDeque;

use pylon_core::{GridResult, Network, Topology};

use super::{
    endpoints, positions_length, reconstruct, Algorithm, PathResult, TraversalStats, NO_PARENT,
};

/// Breadth-first path query (unweighted).
///
/// Returns a path with the minimum number of lines, not the minimum length.
/// Nodes are marked visited when enqueued, so each one enters the frontier
/// at most once; the search stops when `end` is dequeued.
pub fn bfs(network: &Network, start: &str, end: &str) -> GridResult<PathResult> {
    let topology = network.topology();
    let (s, e) = endpoints(&topology, start, end)?;
    if s == e {
        return Ok(PathResult::trivial(Algorithm::Bfs, topology.id(s)));
    }

    let (path, stats) = search(&topology, s, e);
    let positions = path.map(|path| {
        let length = positions_length(&topology, &path);
        (path, length)
    });
    Ok(PathResult::from_positions(
        Algorithm::Bfs,
        &topology,
        (s, e),
        positions,
        stats,
    ))
}

fn search(topology: &Topology, start: usize, end: usize) -> (Option<Vec<usize>>, TraversalStats) {
    let mut stats = TraversalStats::default();
    let mut parent = vec![NO_PARENT; topology.len()];
    let mut visited = vec![false; topology.len()];
    let mut frontier = VecDeque::from([start]);
    visited[start] = true;

    while let Some(current) = frontier.pop_front() {
        stats.nodes_visited += 1;
        if current == end {
            return (Some(reconstruct(&parent, start, end)), stats);
        }

        for &(neighbor, _) in topology.neighbors(current) {
            stats.edges_explored += 1;
            if !visited[neighbor] {
                visited[neighbor] = true;
                parent[neighbor] = current;
                frontier.push_back(neighbor);
            }
        }
    }

    (None, stats)
}
