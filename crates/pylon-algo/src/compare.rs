//! Run all three path strategies on one query and put the results side by side.

use std::fmt::Write as _;

use pylon_core::{GridResult, Network, SubstationId};
use serde::Serialize;

use crate::traversal::{bfs, dfs, shortest_path, Algorithm, PathResult};

/// DFS, BFS and Dijkstra results for the same endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    pub start: SubstationId,
    pub end: SubstationId,
    pub start_name: String,
    pub end_name: String,
    pub dfs: PathResult,
    pub bfs: PathResult,
    pub dijkstra: PathResult,
}

impl AlgorithmComparison {
    pub fn results(&self) -> [&PathResult; 3] {
        [&self.dfs, &self.bfs, &self.dijkstra]
    }

    pub fn get(&self, algorithm: Algorithm) -> &PathResult {
        match algorithm {
            Algorithm::Dfs => &self.dfs,
            Algorithm::Bfs => &self.bfs,
            Algorithm::Dijkstra => &self.dijkstra,
        }
    }

    /// Strategy with the shortest total length among those that found a path.
    ///
    /// Ties go to the earlier strategy in [`Algorithm::ALL`] order.
    pub fn best(&self) -> Option<&PathResult> {
        self.results()
            .into_iter()
            .filter(|r| r.found)
            .min_by(|a, b| a.total_length.value().total_cmp(&b.total_length.value()))
    }

    /// One line per strategy: hops, length and work done.
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} ({}) -> {} ({})\n",
            self.start, self.start_name, self.end, self.end_name
        );
        for result in self.results() {
            if result.found {
                let _ = writeln!(
                    out,
                    "  {:<8} {} hops, {}, {} visited, {} explored",
                    result.algorithm,
                    result.hops(),
                    result.total_length,
                    result.stats.nodes_visited,
                    result.stats.edges_explored,
                );
            } else {
                let _ = writeln!(
                    out,
                    "  {:<8} no path, {} visited, {} explored",
                    result.algorithm, result.stats.nodes_visited, result.stats.edges_explored,
                );
            }
        }
        out
    }
}

/// Run [`dfs`], [`bfs`] and [`shortest_path`] between the same endpoints.
pub fn compare_algorithms(
    network: &Network,
    start: &str,
    end: &str,
) -> GridResult<AlgorithmComparison> {
    let dfs = dfs(network, start, end)?;
    let bfs = bfs(network, start, end)?;
    let dijkstra = shortest_path(network, start, end)?;
    let start_name = network.get(start)?.name.clone();
    let end_name = network.get(end)?.name.clone();

    Ok(AlgorithmComparison {
        start: dijkstra.start.clone(),
        end: dijkstra.end.clone(),
        start_name,
        end_name,
        dfs,
        bfs,
        dijkstra,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylon_core::{GridError, Kilometers, LineSpec, Megawatts, Substation};

    /// Direct long line A-D next to a short two-hop detour A-B-C-D.
    fn detour() -> Network {
        let stations = [("A", "Alpha"), ("B", "Bravo"), ("C", "Charlie"), ("D", "Delta")]
            .map(|(id, name)| Substation::new(id, name, "110kV", Megawatts(10.0)));
        let lines = [
            ("A", "B", 1.0),
            ("B", "C", 1.0),
            ("C", "D", 1.0),
            ("A", "D", 10.0),
        ]
        .map(|(a, b, km)| LineSpec::new(a, b, Kilometers(km), Megawatts(50.0)));
        Network::from_specs(stations, lines).unwrap()
    }

    #[test]
    fn test_comparison_reports_each_strategy() {
        let cmp = compare_algorithms(&detour(), "A", "D").unwrap();
        assert_eq!(cmp.start_name, "Alpha");
        assert_eq!(cmp.end_name, "Delta");
        assert_eq!(cmp.dfs.algorithm, Algorithm::Dfs);
        assert_eq!(cmp.get(Algorithm::Bfs).hops(), 1);
        assert_eq!(cmp.bfs.total_length, Kilometers(10.0));
        assert_eq!(cmp.dijkstra.hops(), 3);
        assert_eq!(cmp.dijkstra.total_length, Kilometers(3.0));
        assert_eq!(cmp.best().unwrap().total_length, Kilometers(3.0));
    }

    #[test]
    fn test_summary_lists_all_strategies() {
        let summary = compare_algorithms(&detour(), "A", "D").unwrap().summary();
        assert!(summary.starts_with("A (Alpha) -> D (Delta)"));
        assert!(summary.contains("bfs      1 hops, 10.0 km"));
        assert!(summary.contains("dijkstra 3 hops, 3.0 km"));
        assert_eq!(summary.lines().count(), 4);
    }

    #[test]
    fn test_unreachable_summary() {
        let mut network = detour();
        network
            .add_node(Substation::new("E", "Echo", "35kV", Megawatts(1.0)))
            .unwrap();
        let cmp = compare_algorithms(&network, "A", "E").unwrap();
        assert!(cmp.best().is_none());
        assert_eq!(cmp.summary().matches("no path").count(), 3);
    }

    #[test]
    fn test_unknown_endpoint() {
        assert_eq!(
            compare_algorithms(&detour(), "A", "Q").unwrap_err(),
            GridError::UnknownNode("Q".into())
        );
    }
}
