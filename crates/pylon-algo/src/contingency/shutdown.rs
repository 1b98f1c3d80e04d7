use pylon_core::{find_islands, GridResult, Island, Megawatts, Network, SubstationId};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::graph::{critical_nodes, CriticalNode};

/// Configuration for the shutdown simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Maximum number of substations to remove (K in N-k)
    pub max_nodes: usize,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { max_nodes: 3 }
    }
}

/// One removal in a shutdown sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShutdownStep {
    /// 1-based position in the removal order
    pub step: usize,
    pub removed: SubstationId,
    pub name: String,
    pub category: String,
    /// Capacity of the removed substation itself
    pub capacity: Megawatts,
    /// Degree in the ranking on the original grid
    pub ranked_degree: usize,
    /// Degree in the scratch grid just before this removal
    pub degree_before: usize,
    /// Islands of the scratch grid after this and all earlier removals
    pub components: Vec<Island>,
    /// Sum of island capacities
    pub total_capacity: Megawatts,
    /// Original total capacity minus `total_capacity`
    pub capacity_lost: Megawatts,
}

impl ShutdownStep {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

/// Full result of a shutdown simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShutdownReport {
    /// Complete ranking on the original grid (not truncated to K)
    pub critical_nodes: Vec<CriticalNode>,
    pub steps: Vec<ShutdownStep>,
    pub initial_capacity: Megawatts,
    /// Capacity still in service after the last step
    pub remaining_capacity: Megawatts,
    /// Island count after the last step
    pub isolated_components: usize,
}

impl ShutdownReport {
    pub fn capacity_lost(&self) -> Megawatts {
        self.initial_capacity - self.remaining_capacity
    }

    pub fn removed(&self) -> impl Iterator<Item = &SubstationId> + '_ {
        self.steps.iter().map(|step| &step.removed)
    }
}

/// Remove the top `max_nodes` critical substations in ranked order and
/// record the island structure after each cumulative removal.
///
/// `max_nodes == 0` or a grid without articulation points yields no steps.
/// The input network is never modified.
pub fn simulate_shutdown(network: &Network, max_nodes: usize) -> GridResult<ShutdownReport> {
    let ranking = critical_nodes(network);
    let initial_capacity = network.total_capacity();
    debug!(
        critical = ranking.len(),
        max_nodes, "ranked critical substations for shutdown"
    );

    let mut scratch = network.clone();
    let mut steps = Vec::with_capacity(max_nodes.min(ranking.len()));
    for (i, candidate) in ranking.iter().take(max_nodes).enumerate() {
        let degree_before = scratch.degree(candidate.id.as_str())?;
        let substation = scratch.remove_node(candidate.id.as_str())?;
        let islands = find_islands(&scratch);
        let total_capacity = islands.total_capacity();

        debug!(
            step = i + 1,
            removed = %substation.id,
            islands = islands.len(),
            remaining_mw = total_capacity.value(),
            "substation removed"
        );
        for island in &islands.islands {
            trace!(
                island = island.island_id,
                members = island.member_count,
                capacity_mw = island.capacity.value(),
                "island after removal"
            );
        }

        steps.push(ShutdownStep {
            step: i + 1,
            removed: substation.id,
            name: substation.name,
            category: substation.category,
            capacity: substation.capacity,
            ranked_degree: candidate.degree,
            degree_before,
            components: islands.islands,
            total_capacity,
            capacity_lost: initial_capacity - total_capacity,
        });
    }

    let (remaining_capacity, isolated_components) = match steps.last() {
        Some(last) => (last.total_capacity, last.component_count()),
        None => (initial_capacity, find_islands(network).len()),
    };

    Ok(ShutdownReport {
        critical_nodes: ranking,
        steps,
        initial_capacity,
        remaining_capacity,
        isolated_components,
    })
}
