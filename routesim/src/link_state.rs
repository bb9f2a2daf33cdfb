use std::cmp::Reverse;
use std::collections::BinaryHeap;
use log::{debug, error};
use crate::concepts::metric::Metric;
use crate::concepts::route::{Route, RoutingTable};
use crate::concepts::topology::Topology;
use crate::feedback::RoutingError;
use crate::framework::{EngineReport, RoutingEngine};
use crate::util::first_hop;
use crate::NodeId;

/// Link-state routing: every node knows the full topology and runs Dijkstra
/// from itself. Sources are independent, tables come out in ascending origin order.
#[derive(Default)]
pub struct LinkState;

/// Result of a single-source Dijkstra run.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    pub origin: NodeId,
    pub dist: Vec<Metric>,
    /// the node before each destination on its shortest path, `None` if never relaxed
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    /// Dijkstra from `origin`. Among equally distant candidates the lowest id is settled first.
    pub fn compute(topology: &Topology, origin: NodeId) -> Self {
        let n = topology.node_count();
        let mut dist = vec![Metric::Unreachable; n];
        let mut predecessors = vec![None; n];
        let mut visited = vec![false; n];
        let mut heap = BinaryHeap::new();

        dist[origin] = Metric::ZERO;
        heap.push(Reverse((Metric::ZERO, origin)));

        while let Some(Reverse((d, u))) = heap.pop() {
            // stale entry, u was settled with a smaller distance
            if visited[u] {
                continue;
            }
            visited[u] = true;

            for (v, link) in topology.neighbours(u) {
                if visited[v] {
                    continue;
                }
                let alt = d + link;
                if alt < dist[v] {
                    dist[v] = alt;
                    predecessors[v] = Some(u);
                    heap.push(Reverse((alt, v)));
                }
            }
        }

        Self {
            origin,
            dist,
            predecessors,
        }
    }

    /// The routing table derived from this tree.
    pub fn table(&self) -> Result<RoutingTable, RoutingError> {
        let routes = self
            .dist
            .iter()
            .enumerate()
            .map(|(dest, &cost)| {
                if dest == self.origin {
                    return Ok(Route::SELF);
                }
                match first_hop(&self.predecessors, self.origin, dest)? {
                    Some(hop) => Ok(Route {
                        cost,
                        next_hop: Some(hop),
                    }),
                    None => Ok(Route::UNREACHABLE),
                }
            })
            .collect::<Result<Vec<_>, RoutingError>>()?;
        Ok(RoutingTable::from_routes(self.origin, routes))
    }

    /// Full node path from the origin to `dest`, both ends included.
    /// `Ok(None)` when `dest` is unreachable.
    pub fn path_to(&self, dest: NodeId) -> Result<Option<Vec<NodeId>>, RoutingError> {
        if dest == self.origin {
            return Ok(Some(vec![dest]));
        }
        if self.predecessors[dest].is_none() {
            return Ok(None);
        }
        let mut path = vec![dest];
        let mut hop = dest;
        while hop != self.origin {
            if path.len() > self.predecessors.len() {
                return Err(RoutingError::CorruptPredecessors {
                    origin: self.origin,
                    dest,
                });
            }
            hop = self.predecessors[hop].ok_or(RoutingError::CorruptPredecessors {
                origin: self.origin,
                dest,
            })?;
            path.push(hop);
        }
        path.reverse();
        Ok(Some(path))
    }
}

impl LinkState {
    pub fn new() -> Self {
        LinkState
    }

    /// Routing table of a single source.
    pub fn shortest_paths_from(&self, topology: &Topology, origin: NodeId) -> Result<RoutingTable, RoutingError> {
        ShortestPathTree::compute(topology, origin).table()
    }
}

impl RoutingEngine for LinkState {
    fn name(&self) -> &'static str {
        "LSR"
    }

    fn run(&self, topology: &Topology) -> Result<EngineReport, RoutingError> {
        let tables = topology
            .nodes()
            .map(|origin| {
                let table = self.shortest_paths_from(topology, origin);
                if let Err(e) = &table {
                    error!("link-state table for node {origin} failed: {e}");
                }
                table
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("link-state computed {} tables", tables.len());
        Ok(EngineReport {
            tables,
            trace: Vec::new(),
            improving_passes: 0,
        })
    }
}
