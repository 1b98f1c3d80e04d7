use pylon_core::{find_islands, graph_stats, GraphStats, GridResult, IslandAnalysis, Network};

use crate::compare::{compare_algorithms, AlgorithmComparison};
use crate::contingency::{simulate_shutdown, ShutdownConfig, ShutdownReport};
use crate::graph::{analyze_structure, critical_nodes, CriticalNode, StructuralAnalysis};
use crate::traversal::{
    bfs, dfs, shortest_path, shortest_paths_from, Algorithm, PathResult, ShortestPathTree,
};

/// Borrowing facade over a [`Network`] that exposes every analysis as a
/// method. Holds no state of its own; each call recomputes from the network.
#[derive(Debug, Clone, Copy)]
pub struct GridAnalyzer<'a> {
    network: &'a Network,
}

impl<'a> GridAnalyzer<'a> {
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    pub fn network(&self) -> &'a Network {
        self.network
    }

    pub fn dfs(&self, start: &str, end: &str) -> GridResult<PathResult> {
        dfs(self.network, start, end)
    }

    pub fn bfs(&self, start: &str, end: &str) -> GridResult<PathResult> {
        bfs(self.network, start, end)
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> GridResult<PathResult> {
        shortest_path(self.network, start, end)
    }

    /// Dispatch a point-to-point query by strategy.
    pub fn path(&self, algorithm: Algorithm, start: &str, end: &str) -> GridResult<PathResult> {
        match algorithm {
            Algorithm::Dfs => self.dfs(start, end),
            Algorithm::Bfs => self.bfs(start, end),
            Algorithm::Dijkstra => self.shortest_path(start, end),
        }
    }

    pub fn shortest_paths_from(&self, start: &str) -> GridResult<ShortestPathTree> {
        shortest_paths_from(self.network, start)
    }

    pub fn critical_nodes(&self) -> Vec<CriticalNode> {
        critical_nodes(self.network)
    }

    pub fn structure(&self) -> StructuralAnalysis {
        analyze_structure(self.network)
    }

    pub fn simulate_shutdown(&self, max_nodes: usize) -> GridResult<ShutdownReport> {
        simulate_shutdown(self.network, max_nodes)
    }

    pub fn simulate_shutdown_with(&self, config: &ShutdownConfig) -> GridResult<ShutdownReport> {
        simulate_shutdown(self.network, config.max_nodes)
    }

    pub fn compare(&self, start: &str, end: &str) -> GridResult<AlgorithmComparison> {
        compare_algorithms(self.network, start, end)
    }

    pub fn islands(&self) -> IslandAnalysis {
        find_islands(self.network)
    }

    pub fn stats(&self) -> GraphStats {
        graph_stats(self.network)
    }
}

impl<'a> From<&'a Network> for GridAnalyzer<'a> {
    fn from(network: &'a Network) -> Self {
        Self::new(network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylon_core::{Kilometers, LineSpec, Megawatts, Substation};

    fn star() -> Network {
        let stations = ["HUB", "N1", "N2", "N3"]
            .map(|id| Substation::new(id, id, "110kV", Megawatts(25.0)));
        let lines = ["N1", "N2", "N3"]
            .map(|leaf| LineSpec::new("HUB", leaf, Kilometers(2.0), Megawatts(10.0)));
        Network::from_specs(stations, lines).unwrap()
    }

    #[test]
    fn test_facade_matches_free_functions() {
        let network = star();
        let analyzer = GridAnalyzer::from(&network);
        assert_eq!(
            analyzer.path(Algorithm::Bfs, "N1", "N3").unwrap(),
            bfs(&network, "N1", "N3").unwrap()
        );
        assert_eq!(
            analyzer.shortest_path("N1", "N2").unwrap().total_length,
            Kilometers(4.0)
        );
        assert_eq!(analyzer.critical_nodes(), critical_nodes(&network));
        assert_eq!(analyzer.structure().bridges.len(), 3);
        assert_eq!(analyzer.islands().len(), 1);
        assert_eq!(analyzer.stats().node_count, 4);
    }

    #[test]
    fn test_shutdown_through_config() {
        let network = star();
        let analyzer = GridAnalyzer::new(&network);
        let report = analyzer
            .simulate_shutdown_with(&ShutdownConfig::default())
            .unwrap();
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.isolated_components, 3);
        assert_eq!(report.remaining_capacity, Megawatts(75.0));
        // the analyzer borrows; the network is unchanged afterwards
        assert_eq!(analyzer.network().node_count(), 4);
    }
}
