use log::{debug, error, trace};
use crate::concepts::metric::Metric;
use crate::concepts::route::{Route, RoutingTable};
use crate::concepts::topology::Topology;
use crate::feedback::RoutingError;
use crate::framework::{EngineParams, EngineReport, RoutingEngine, Snapshot};
use crate::NodeId;

/// Distance-vector routing, Bellman-Ford style.
///
/// The exchange between nodes is simulated centrally: every pass, each node
/// re-evaluates every destination through each direct neighbour's current
/// vector. Updates are applied in place, in `(node, neighbour, destination)`
/// ascending order, so later relaxations in the same pass already see earlier
/// ones. This order is also the tie-break: only a strictly cheaper path
/// replaces a route, so the first discovered shortest path keeps its next hop.
#[derive(Default)]
pub struct DistanceVector {
    params: EngineParams,
}

/// Working matrices of one run, owned exclusively by it.
struct VectorState {
    dist: Vec<Vec<Metric>>,
    next_hop: Vec<Vec<Option<NodeId>>>,
}

impl VectorState {
    /// Every node starts out knowing only its direct links.
    fn new(topology: &Topology) -> Self {
        let dist = topology
            .nodes()
            .map(|i| topology.nodes().map(|j| topology.cost(i, j)).collect())
            .collect();
        let next_hop = topology
            .nodes()
            .map(|i| {
                topology
                    .nodes()
                    .map(|j| (i != j && topology.cost(i, j).is_reachable()).then_some(j))
                    .collect()
            })
            .collect();
        Self { dist, next_hop }
    }

    /// One full relaxation pass. Returns how many routes improved.
    fn relax(&mut self, topology: &Topology) -> usize {
        let mut updates = 0;
        for i in topology.nodes() {
            for (k, link) in topology.neighbours(i) {
                for j in topology.nodes() {
                    let via = link + self.dist[k][j];
                    if via < self.dist[i][j] {
                        // k is a neighbour, so a first hop towards it is always known
                        let hop = if k == j { k } else { self.next_hop[i][k].unwrap_or(k) };
                        trace!("node {i}: dest {j} via {k} improves {} -> {via}, next hop {hop}", self.dist[i][j]);
                        self.dist[i][j] = via;
                        self.next_hop[i][j] = Some(hop);
                        updates += 1;
                    }
                }
            }
        }
        updates
    }

    /// Frozen copies of every node's table.
    fn tables(&self) -> Vec<RoutingTable> {
        self.dist
            .iter()
            .zip(&self.next_hop)
            .enumerate()
            .map(|(origin, (dist, hops))| {
                let routes = dist
                    .iter()
                    .zip(hops)
                    .map(|(&cost, &next_hop)| Route { cost, next_hop })
                    .collect();
                RoutingTable::from_routes(origin, routes)
            })
            .collect()
    }
}

impl DistanceVector {
    pub fn new(params: EngineParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }
}

impl RoutingEngine for DistanceVector {
    fn name(&self) -> &'static str {
        "DVR"
    }

    fn run(&self, topology: &Topology) -> Result<EngineReport, RoutingError> {
        let cap = self.params.pass_cap.unwrap_or(topology.node_count());
        let mut state = VectorState::new(topology);
        let mut trace = Vec::new();

        if self.params.record_trace && self.params.include_initial_snapshot {
            trace.push(Snapshot {
                pass: 0,
                tables: state.tables(),
            });
        }

        for pass in 1..=cap {
            let updates = state.relax(topology);
            if updates == 0 {
                debug!("distance-vector converged, pass {pass} made no updates");
                return Ok(EngineReport {
                    tables: state.tables(),
                    trace,
                    improving_passes: pass - 1,
                });
            }
            debug!("distance-vector pass {pass}: {updates} routes improved");
            if self.params.record_trace {
                trace.push(Snapshot {
                    pass,
                    tables: state.tables(),
                });
            }
        }

        error!("distance-vector still updating after {cap} passes on {} nodes", topology.node_count());
        Err(RoutingError::NonConvergence { cap })
    }
}
