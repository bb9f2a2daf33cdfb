use educe::Educe;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use crate::concepts::route::RoutingTable;
use crate::concepts::topology::Topology;
use crate::feedback::RoutingError;

/// A routing algorithm that turns a topology into one routing table per node.
pub trait RoutingEngine {
    /// Short human readable name, e.g. "DVR".
    fn name(&self) -> &'static str;
    /// Computes the tables. The topology is only read.
    fn run(&self, topology: &Topology) -> Result<EngineReport, RoutingError>;
}

/// The tables of every node, frozen after a relaxation pass.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// 1-based pass number, 0 for the initial direct-link state
    pub pass: usize,
    pub tables: Vec<RoutingTable>,
}

/// Output of one engine run.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineReport {
    /// final tables, ordered by ascending origin id
    pub tables: Vec<RoutingTable>,
    /// intermediate snapshots in pass order; empty for non-iterative engines
    pub trace: Vec<Snapshot>,
    /// passes that improved at least one route; 0 for non-iterative engines
    pub improving_passes: usize,
}

impl EngineReport {
    pub fn table(&self, origin: usize) -> &RoutingTable {
        &self.tables[origin]
    }

    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Engine tuning knobs.
#[derive(Educe, Clone, Debug)]
#[educe(Default)]
pub struct EngineParams {
    /// Hard cap on distance-vector passes. `None` means the node count, which a
    /// correct relaxation never reaches.
    pub pass_cap: Option<usize>,
    /// Put the direct-link tables in the trace as pass 0.
    pub include_initial_snapshot: bool,
    /// Record a snapshot after each improving pass.
    #[educe(Default = true)]
    pub record_trace: bool,
}
