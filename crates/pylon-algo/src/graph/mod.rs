//! Graph algorithms for grid structure analysis.
//!
//! - **Articulation points**: substations whose loss splits the grid
//! - **Bridges**: lines whose loss splits the grid
//!
//! Both come out of a single depth-first pass that tracks discovery order and
//! low-link values, see [`articulation`].
//!
//! ```rust
//! use pylon_algo::graph::{analyze_structure, critical_nodes};
//! use pylon_core::{Kilometers, LineSpec, Megawatts, Network, Substation};
//!
//! // feeder F hangs off the triangle A-B-C through B
//! let network = Network::from_specs(
//!     ["A", "B", "C", "F"].map(|id| Substation::new(id, id, "110kV", Megawatts(10.0))),
//!     [("A", "B"), ("B", "C"), ("C", "A"), ("B", "F")]
//!         .map(|(a, b)| LineSpec::new(a, b, Kilometers(2.0), Megawatts(5.0))),
//! )?;
//!
//! for node in critical_nodes(&network) {
//!     println!("{} ({} lines)", node.id, node.degree);
//! }
//!
//! let analysis = analyze_structure(&network);
//! assert_eq!(analysis.critical_nodes[0].id.as_str(), "B");
//! assert_eq!(analysis.critical_nodes[0].degree, 3);
//! assert_eq!(analysis.bridges.len(), 1);
//! assert_eq!(analysis.bridges[0].length, Kilometers(2.0));
//! # Ok::<(), pylon_core::GridError>(())
//! ```

pub mod articulation;

pub use articulation::{
    analyze_structure, articulation_points, bridges, critical_nodes, Bridge, CriticalNode,
    StructuralAnalysis,
};
