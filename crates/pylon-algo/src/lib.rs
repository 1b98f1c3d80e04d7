//! # pylon-algo: Pathfinding and Resilience Algorithms
//!
//! Algorithms over a [`pylon_core::Network`]:
//!
//! - [`traversal`] - Depth-first, breadth-first and Dijkstra path queries
//! - [`graph`] - Articulation points and bridges (structural criticality)
//! - [`contingency`] - Sequential shutdown of critical substations
//! - [`compare`] - Side-by-side comparison of the three path strategies
//!
//! Everything here is synchronous and read-only over its input network; the
//! only mutation happens on a private clone inside the shutdown simulation.
//! Results are plain `serde::Serialize` records.
//!
//! ```rust
//! use pylon_algo::GridAnalyzer;
//! use pylon_core::{Kilometers, LineSpec, Megawatts, Network, Substation};
//!
//! let network = Network::from_specs(
//!     ["A", "B", "C"].map(|id| Substation::new(id, id, "110kV", Megawatts(10.0))),
//!     [
//!         LineSpec::new("A", "B", Kilometers(1.0), Megawatts(5.0)),
//!         LineSpec::new("B", "C", Kilometers(1.0), Megawatts(5.0)),
//!     ],
//! )?;
//! let analyzer = GridAnalyzer::new(&network);
//!
//! let route = analyzer.shortest_path("A", "C")?;
//! assert_eq!(route.total_length, Kilometers(2.0));
//!
//! let critical = analyzer.critical_nodes();
//! assert_eq!(critical[0].id.as_str(), "B");
//! # Ok::<(), pylon_core::GridError>(())
//! ```

pub mod analyzer;
pub mod compare;
pub mod contingency;
pub mod graph;
pub mod traversal;

pub use analyzer::GridAnalyzer;
pub use compare::{compare_algorithms, AlgorithmComparison};
pub use contingency::{simulate_shutdown, ShutdownConfig, ShutdownReport, ShutdownStep};
pub use graph::{
    analyze_structure, articulation_points, bridges, critical_nodes, Bridge, CriticalNode,
    StructuralAnalysis,
};
pub use traversal::{
    bfs, dfs, shortest_path, shortest_paths_from, Algorithm, PathResult, ShortestPathTree,
    TraversalStats,
};
