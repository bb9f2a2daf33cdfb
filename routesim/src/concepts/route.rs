use crate::concepts::metric::Metric;
use crate::NodeId;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single routing decision towards one destination.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route {
    /// total path cost, or unreachable
    pub cost: Metric,
    /// the first node on the path, `None` for the origin itself and for unreachable destinations
    pub next_hop: Option<NodeId>,
}

impl Route {
    pub const SELF: Route = Route {
        cost: Metric::ZERO,
        next_hop: None,
    };
    pub const UNREACHABLE: Route = Route {
        cost: Metric::Unreachable,
        next_hop: None,
    };
}

/// The routes of one origin node, indexed by destination id.
///
/// Both engines fill these in the same way, so a presenter does not need to
/// know which algorithm produced a table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoutingTable {
    pub origin: NodeId,
    routes: Vec<Route>,
}

impl RoutingTable {
    /// A table where every destination is unreachable except the origin itself.
    pub fn unreachable(origin: NodeId, node_count: usize) -> Self {
        let mut routes = vec![Route::UNREACHABLE; node_count];
        routes[origin] = Route::SELF;
        Self { origin, routes }
    }

    pub(crate) fn from_routes(origin: NodeId, routes: Vec<Route>) -> Self {
        Self { origin, routes }
    }

    pub fn route(&self, dest: NodeId) -> &Route {
        &self.routes[dest]
    }

    pub fn cost(&self, dest: NodeId) -> Metric {
        self.routes[dest].cost
    }

    pub fn next_hop(&self, dest: NodeId) -> Option<NodeId> {
        self.routes[dest].next_hop
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// `(destination, route)` pairs in ascending destination order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Route)> {
        self.routes.iter().enumerate()
    }

    /// Checks the table invariants: the origin routes to itself at cost zero with
    /// no next hop, and a destination has a next hop exactly when it is reachable.
    pub fn is_consistent(&self) -> bool {
        self.routes.get(self.origin) == Some(&Route::SELF)
            && self
                .iter()
                .filter(|(dest, _)| *dest != self.origin)
                .all(|(_, route)| route.cost.is_reachable() == route.next_hop.is_some())
    }
}
