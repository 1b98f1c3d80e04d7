use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use pylon_core::{GridError, GridResult, Kilometers, Network, SubstationId, Topology};
use serde::Serialize;

use super::{endpoints, reconstruct, Algorithm, PathResult, TraversalStats, NO_PARENT};

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first,
/// breaking ties by the smaller position (ascending id).
#[derive(Debug, Clone, Copy)]
struct State {
    distance: f64,
    node: usize,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

struct Search {
    distance: Vec<f64>,
    parent: Vec<usize>,
    stats: TraversalStats,
}

/// Lazy-deletion Dijkstra over the snapshot.
///
/// With `target` set the loop stops as soon as the target is popped; its
/// distance is final at that point. Without a target the heap is drained.
fn run(topology: &Topology, source: usize, target: Option<usize>) -> Search {
    let mut distance = vec![f64::INFINITY; topology.len()];
    let mut parent = vec![NO_PARENT; topology.len()];
    let mut settled = vec![false; topology.len()];
    let mut stats = TraversalStats::default();
    let mut heap = BinaryHeap::new();

    distance[source] = 0.0;
    heap.push(State {
        distance: 0.0,
        node: source,
    });

    while let Some(State { distance: d, node }) = heap.pop() {
        stats.nodes_visited += 1;
        // stale entry: a shorter distance was recorded after this push
        if settled[node] || d > distance[node] {
            continue;
        }
        settled[node] = true;
        if target == Some(node) {
            break;
        }

        for &(neighbor, length) in topology.neighbors(node) {
            stats.edges_explored += 1;
            let candidate = d + length.value();
            if candidate < distance[neighbor] {
                distance[neighbor] = candidate;
                parent[neighbor] = node;
                heap.push(State {
                    distance: candidate,
                    node: neighbor,
                });
            }
        }
    }

    Search {
        distance,
        parent,
        stats,
    }
}

/// Weighted shortest path between two substations by total line length.
///
/// Terminates early once `end` is settled. Line lengths are non-negative by
/// construction ([`Network::add_edge`] rejects anything else).
pub fn shortest_path(network: &Network, start: &str, end: &str) -> GridResult<PathResult> {
    let topology = network.topology();
    let (s, e) = endpoints(&topology, start, end)?;
    if s == e {
        return Ok(PathResult::trivial(Algorithm::Dijkstra, topology.id(s)));
    }

    let search = run(&topology, s, Some(e));
    let positions = search.distance[e]
        .is_finite()
        .then(|| (reconstruct(&search.parent, s, e), Kilometers(search.distance[e])));
    Ok(PathResult::from_positions(
        Algorithm::Dijkstra,
        &topology,
        (s, e),
        positions,
        search.stats,
    ))
}

/// Shortest distances and predecessors from one source to every reachable
/// substation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathTree {
    pub source: SubstationId,
    /// Reachable substations only; the source maps to zero
    pub distances: BTreeMap<SubstationId, Kilometers>,
    /// Parent on a shortest path, for every reachable substation but the source
    pub predecessors: BTreeMap<SubstationId, SubstationId>,
    /// Substations with no path from the source
    pub unreachable: Vec<SubstationId>,
    pub stats: TraversalStats,
}

impl ShortestPathTree {
    pub fn distance(&self, target: &str) -> Option<Kilometers> {
        self.distances.get(target).copied()
    }

    /// Source-to-target path, or `None` if the target is unreachable.
    pub fn path_to(&self, target: &str) -> Option<Vec<SubstationId>> {
        let (mut current, _) = self.distances.get_key_value(target)?;
        let mut path = vec![current.clone()];
        while let Some(prev) = self.predecessors.get(current.as_str()) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Reachable substations ordered by distance, then id.
    pub fn by_distance(&self) -> Vec<(&SubstationId, Kilometers)> {
        let mut entries: Vec<(&SubstationId, Kilometers)> =
            self.distances.iter().map(|(id, d)| (id, *d)).collect();
        entries.sort_by(|a, b| a.1.value().total_cmp(&b.1.value()).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Single-source shortest paths to every reachable substation.
///
/// Unlike [`shortest_path`] this drains the queue; early exit is only sound
/// for a single target.
pub fn shortest_paths_from(network: &Network, start: &str) -> GridResult<ShortestPathTree> {
    let topology = network.topology();
    let source = topology
        .position(start)
        .ok_or_else(|| GridError::UnknownNode(start.into()))?;

    let search = run(&topology, source, None);
    let mut distances = BTreeMap::new();
    let mut predecessors = BTreeMap::new();
    let mut unreachable = Vec::new();
    for (pos, &d) in search.distance.iter().enumerate() {
        let id = topology.id(pos).clone();
        if !d.is_finite() {
            unreachable.push(id);
            continue;
        }
        if search.parent[pos] != NO_PARENT {
            predecessors.insert(id.clone(), topology.id(search.parent[pos]).clone());
        }
        distances.insert(id, Kilometers(d));
    }

    Ok(ShortestPathTree {
        source: topology.id(source).clone(),
        distances,
        predecessors,
        unreachable,
        stats: search.stats,
    })
}
