use pylon_core::{GridResult, Network, Topology};

use super::{endpoints, positions_length, Algorithm, PathResult, TraversalStats};

/// One level of the explicit DFS stack.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    /// Next neighbor index to examine
    cursor: usize,
}

/// Depth-first path query (unweighted).
///
/// Dives along the lowest-id unvisited neighbor and backtracks on dead ends.
/// The first path that reaches `end` is returned as-is, so it is generally
/// neither the fewest-hop nor the shortest route. Uses an explicit stack, so
/// long chains cannot overflow the call stack.
pub fn dfs(network: &Network, start: &str, end: &str) -> GridResult<PathResult> {
    let topology = network.topology();
    let (s, e) = endpoints(&topology, start, end)?;
    if s == e {
        return Ok(PathResult::trivial(Algorithm::Dfs, topology.id(s)));
    }

    let (path, stats) = search(&topology, s, e);
    let positions = path.map(|path| {
        let length = positions_length(&topology, &path);
        (path, length)
    });
    Ok(PathResult::from_positions(
        Algorithm::Dfs,
        &topology,
        (s, e),
        positions,
        stats,
    ))
}

fn search(topology: &Topology, start: usize, end: usize) -> (Option<Vec<usize>>, TraversalStats) {
    let mut stats = TraversalStats::default();
    let mut visited = vec![false; topology.len()];
    let mut stack = vec![Frame {
        node: start,
        cursor: 0,
    }];
    visited[start] = true;
    stats.nodes_visited += 1;

    while let Some(top) = stack.last_mut() {
        let Some(&(next, _)) = topology.neighbors(top.node).get(top.cursor) else {
            stack.pop();
            continue;
        };
        top.cursor += 1;
        stats.edges_explored += 1;
        if visited[next] {
            continue;
        }

        visited[next] = true;
        stats.nodes_visited += 1;
        stack.push(Frame {
            node: next,
            cursor: 0,
        });
        if next == end {
            let path = stack.iter().map(|frame| frame.node).collect();
            return (Some(path), stats);
        }
    }

    (None, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylon_core::{Kilometers, LineSpec, Megawatts, Substation};

    #[test]
    fn test_backtracks_out_of_dead_end() {
        // A-B, B-C (dead end), A-D, D-E
        let stations = ["A", "B", "C", "D", "E"]
            .map(|id| Substation::new(id, id, "110kV", Megawatts(1.0)));
        let lines = [("A", "B"), ("B", "C"), ("A", "D"), ("D", "E")]
            .map(|(a, b)| LineSpec::new(a, b, Kilometers(2.0), Megawatts(1.0)));
        let network = Network::from_specs(stations, lines).unwrap();

        let result = dfs(&network, "A", "E").unwrap();
        let ids: Vec<&str> = result.path.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["A", "D", "E"]);
        assert_eq!(result.total_length, Kilometers(4.0));
        // A, B, C, D, E all entered
        assert_eq!(result.stats.nodes_visited, 5);
        // A:B  B:A,C  C:B  A:D  D:A,E
        assert_eq!(result.stats.edges_explored, 7);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let n = 50_000;
        let ids: Vec<String> = (0..n).map(|i| format!("N{i:06}")).collect();
        let stations = ids
            .iter()
            .map(|id| Substation::new(id.as_str(), id.as_str(), "110kV", Megawatts(1.0)));
        let lines = ids
            .windows(2)
            .map(|pair| {
                LineSpec::new(
                    pair[0].as_str(),
                    pair[1].as_str(),
                    Kilometers(1.0),
                    Megawatts(1.0),
                )
            });
        let network = Network::from_specs(stations, lines).unwrap();

        let result = dfs(&network, &ids[0], &ids[n - 1]).unwrap();
        assert!(result.found);
        assert_eq!(result.hops(), n - 1);
    }
}
