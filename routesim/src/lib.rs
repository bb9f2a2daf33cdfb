//! routesim computes routing tables for a static, weighted, directed topology
//! with two classical intradomain algorithms: distance-vector (Bellman-Ford)
//! and link-state (Dijkstra).
//!
//! The crate is I/O free. Reading topology files and printing tables is left
//! to the caller; engines return structured [`framework::EngineReport`]s.
//!
//! ```
//! use routesim::prelude::*;
//!
//! let topology: Topology = "3  0 1 4  1 0 2  4 2 0".parse().unwrap();
//! let dvr = DistanceVector::default().run(&topology).unwrap();
//! let lsr = LinkState.run(&topology).unwrap();
//! assert_eq!(dvr.tables, lsr.tables);
//! assert_eq!(dvr.table(0).cost(2), Metric::Cost(3));
//! assert_eq!(dvr.table(0).next_hop(2), Some(1));
//! ```

pub mod concepts;
pub mod distance_vector;
pub mod feedback;
pub mod framework;
pub mod link_state;
pub mod util;

/// Nodes are identified by their row index in the cost matrix.
pub type NodeId = usize;

pub mod prelude {
    pub use crate::concepts::metric::Metric;
    pub use crate::concepts::route::{Route, RoutingTable};
    pub use crate::concepts::topology::Topology;
    pub use crate::distance_vector::DistanceVector;
    pub use crate::feedback::{RoutingError, TopologyWarning};
    pub use crate::framework::{EngineParams, EngineReport, RoutingEngine, Snapshot};
    pub use crate::link_state::{LinkState, ShortestPathTree};
    pub use crate::NodeId;
}
