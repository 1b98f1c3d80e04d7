//! # pylon-core: Grid Topology Store
//!
//! Provides the data model and the graph store used by the pylon resilience
//! and pathfinding analyzers.
//!
//! ## Design Philosophy
//!
//! Networks are modeled as **undirected simple graphs** where:
//! - **Nodes**: Substations, each with a voltage-class tag and a capacity
//! - **Edges**: Transmission lines, weighted by physical length
//!
//! The store is a petgraph `StableUnGraph` plus a sorted id index. The stable
//! graph keeps node indices valid across removals, which is what the
//! resilience simulator needs when it takes substations out one at a time.
//! The sorted index gives every algorithm a reproducible iteration order.
//!
//! ## Quick Start
//!
//! ```rust
//! use pylon_core::*;
//!
//! let mut network = Network::new();
//! network.add_node(Substation::new("SS_1", "Luzhniki", "500kV", Megawatts(300.0)))?;
//! network.add_node(Substation::new("SS_10", "GRES-2", "500kV", Megawatts(400.0)))?;
//! network.add_edge("SS_1", "SS_10", Line::new(Kilometers(5.2), Megawatts(500.0)))?;
//!
//! assert_eq!(network.degree("SS_1")?, 1);
//! assert_eq!(network.neighbors("SS_10")?[0].id.as_str(), "SS_1");
//! # Ok::<(), GridError>(())
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Typed failures ([`GridError`])
//! - [`graph_utils`] - Island detection and graph statistics
//! - [`topology`] - Dense, id-ordered adjacency snapshot for algorithms
//! - [`units`] - Unit newtypes ([`Megawatts`], [`Kilometers`])

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::{Deserialize, Serialize};

pub mod error;
pub mod graph_utils;
pub mod topology;
pub mod units;

pub use error::{GridError, GridResult};
pub use graph_utils::{find_islands, graph_stats, GraphStats, Island, IslandAnalysis};
pub use topology::Topology;
pub use units::{Kilometers, Megawatts};

/// Unique substation identifier (e.g. `"SS_1"`).
///
/// Ordering is plain string ordering; every algorithm that needs a
/// deterministic neighbor order sorts by it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstationId(String);

impl SubstationId {
    #[inline]
    pub fn new(value: impl Into<String>) -> Self {
        SubstationId(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubstationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubstationId {
    fn from(value: &str) -> Self {
        SubstationId(value.to_string())
    }
}

impl From<String> for SubstationId {
    fn from(value: String) -> Self {
        SubstationId(value)
    }
}

impl Borrow<str> for SubstationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SubstationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A substation (graph node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substation {
    pub id: SubstationId,
    pub name: String,
    /// Voltage class tag, e.g. "220kV". Opaque to the algorithms.
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    /// Maximum throughput, used for impact reporting only
    pub capacity: Megawatts,
}

impl Substation {
    pub fn new(
        id: impl Into<SubstationId>,
        name: impl Into<String>,
        category: impl Into<String>,
        capacity: Megawatts,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            district: None,
            capacity,
        }
    }

    pub fn with_district(mut self, district: impl Into<String>) -> Self {
        self.district = Some(district.into());
        self
    }
}

/// A transmission line (graph edge payload).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Physical length; the shortest-path cost
    pub length: Kilometers,
    /// Thermal capacity; descriptive only, never used in traversal
    pub capacity: Megawatts,
    /// Voltage class tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Line {
    pub fn new(length: Kilometers, capacity: Megawatts) -> Self {
        Self {
            length,
            capacity,
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Line specification used when constructing a network from a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub from: SubstationId,
    pub to: SubstationId,
    pub length: Kilometers,
    #[serde(default)]
    pub capacity: Megawatts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl LineSpec {
    pub fn new(
        from: impl Into<SubstationId>,
        to: impl Into<SubstationId>,
        length: Kilometers,
        capacity: Megawatts,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            length,
            capacity,
            category: None,
        }
    }
}

/// An adjacency entry returned by [`Network::neighbors`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub id: SubstationId,
    pub length: Kilometers,
}

/// A line together with its endpoints, `from < to`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRef<'a> {
    pub from: &'a SubstationId,
    pub to: &'a SubstationId,
    pub line: &'a Line,
}

/// The grid graph: substations, lines, and the symmetric adjacency index.
///
/// Each undirected line is stored once in petgraph and is visible from both
/// endpoints, so the adjacency index cannot drift from the edge set. Cloning
/// produces a deep, independent copy.
#[derive(Debug, Clone)]
pub struct Network {
    graph: StableUnGraph<Substation, Line>,
    index: BTreeMap<SubstationId, NodeIndex>,
}

impl Network {
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::with_capacity(0, 0),
            index: BTreeMap::new(),
        }
    }

    /// Build a validated network, failing on the first invalid entry.
    pub fn from_specs<N, L>(substations: N, lines: L) -> GridResult<Self>
    where
        N: IntoIterator<Item = Substation>,
        L: IntoIterator<Item = LineSpec>,
    {
        let mut network = Network::new();
        for substation in substations {
            network.add_node(substation)?;
        }
        for spec in lines {
            network.add_line(spec)?;
        }
        Ok(network)
    }

    pub fn add_node(&mut self, substation: Substation) -> GridResult<()> {
        if self.index.contains_key(&substation.id) {
            return Err(GridError::DuplicateNode(substation.id));
        }
        let id = substation.id.clone();
        let idx = self.graph.add_node(substation);
        self.index.insert(id, idx);
        Ok(())
    }

    /// Connect two substations. At most one line per unordered pair.
    pub fn add_edge(&mut self, from: &str, to: &str, line: Line) -> GridResult<()> {
        let a = self.node_index(from)?;
        let b = self.node_index(to)?;
        if a == b {
            return Err(GridError::InvalidEdge(format!(
                "self-loop on substation '{from}'"
            )));
        }
        if line.length.is_negative() || !line.length.is_finite() {
            return Err(GridError::InvalidWeight {
                from: from.into(),
                to: to.into(),
                length: line.length,
            });
        }
        if self.graph.find_edge(a, b).is_some() {
            return Err(GridError::DuplicateEdge(from.into(), to.into()));
        }
        self.graph.add_edge(a, b, line);
        Ok(())
    }

    pub fn add_line(&mut self, spec: LineSpec) -> GridResult<()> {
        let line = Line {
            length: spec.length,
            capacity: spec.capacity,
            category: spec.category,
        };
        self.add_edge(spec.from.as_str(), spec.to.as_str(), line)
    }

    /// Remove a substation and every line incident to it. O(degree).
    pub fn remove_node(&mut self, id: &str) -> GridResult<Substation> {
        let idx = self.node_index(id)?;
        // petgraph detaches incident edges inside remove_node, so the
        // adjacency never observes a half-removed node.
        let removed = self
            .graph
            .remove_node(idx)
            .ok_or_else(|| GridError::UnknownNode(id.into()))?;
        self.index.remove(id);
        Ok(removed)
    }

    /// Adjacent substations with line lengths, sorted by neighbor id.
    pub fn neighbors(&self, id: &str) -> GridResult<Vec<Neighbor>> {
        let idx = self.node_index(id)?;
        let mut neighbors: Vec<Neighbor> = self
            .graph
            .edges(idx)
            .map(|edge| {
                let other = if edge.source() == idx {
                    edge.target()
                } else {
                    edge.source()
                };
                Neighbor {
                    id: self.graph[other].id.clone(),
                    length: edge.weight().length,
                }
            })
            .collect();
        neighbors.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(neighbors)
    }

    pub fn degree(&self, id: &str) -> GridResult<usize> {
        let idx = self.node_index(id)?;
        Ok(self.graph.edges(idx).count())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn substation(&self, id: &str) -> Option<&Substation> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    /// Like [`Network::substation`] but fails with `UnknownNode`.
    pub fn get(&self, id: &str) -> GridResult<&Substation> {
        self.substation(id)
            .ok_or_else(|| GridError::UnknownNode(id.into()))
    }

    /// Substation ids in ascending order.
    pub fn node_ids(&self) -> impl Iterator<Item = &SubstationId> + '_ {
        self.index.keys()
    }

    /// Substations in ascending id order.
    pub fn substations(&self) -> impl Iterator<Item = &Substation> + '_ {
        self.index.values().map(move |&idx| &self.graph[idx])
    }

    /// All lines, endpoints ordered, sorted by (from, to).
    pub fn lines(&self) -> Vec<LineRef<'_>> {
        let mut lines: Vec<LineRef<'_>> = self
            .graph
            .edge_references()
            .map(|edge| {
                let a = &self.graph[edge.source()].id;
                let b = &self.graph[edge.target()].id;
                let (from, to) = if a <= b { (a, b) } else { (b, a) };
                LineRef {
                    from,
                    to,
                    line: edge.weight(),
                }
            })
            .collect();
        lines.sort_by(|x, y| (x.from, x.to).cmp(&(y.from, y.to)));
        lines
    }

    pub fn line_between(&self, a: &str, b: &str) -> Option<&Line> {
        let a = *self.index.get(a)?;
        let b = *self.index.get(b)?;
        self.graph.find_edge(a, b).map(|edge| &self.graph[edge])
    }

    /// Sum of line lengths along `path`; `None` if two consecutive ids are
    /// not connected by a line.
    pub fn path_length(&self, path: &[SubstationId]) -> Option<Kilometers> {
        path.windows(2)
            .map(|pair| {
                self.line_between(pair[0].as_str(), pair[1].as_str())
                    .map(|line| line.length)
            })
            .sum()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Sum of all substation capacities
    pub fn total_capacity(&self) -> Megawatts {
        self.substations().map(|s| s.capacity).sum()
    }

    /// Dense adjacency snapshot for the algorithms crate.
    pub fn topology(&self) -> Topology {
        Topology::from_network(self)
    }

    pub(crate) fn graph(&self) -> &StableUnGraph<Substation, Line> {
        &self.graph
    }

    pub(crate) fn index(&self) -> &BTreeMap<SubstationId, NodeIndex> {
        &self.index
    }

    fn node_index(&self, id: &str) -> GridResult<NodeIndex> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GridError::UnknownNode(id.into()))
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}
