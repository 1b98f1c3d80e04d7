//! N-k substation outage simulation.
//!
//! Models worst-case sequential failure: the most critical substations (see
//! [`crate::graph::critical_nodes`]) are taken out one after another on a
//! scratch copy of the grid, and the island structure is recomputed after
//! every removal. Removals accumulate; step `i` reflects the first `i`
//! outages together.
//!
//! ## Algorithm
//!
//! 1. Rank articulation points on the original grid, keep the top K
//! 2. Clone the grid
//! 3. For each ranked substation: remove it, relabel islands, record a
//!    [`ShutdownStep`] with per-island capacity and the capacity lost so far

pub mod shutdown;

pub use shutdown::{simulate_shutdown, ShutdownConfig, ShutdownReport, ShutdownStep};
