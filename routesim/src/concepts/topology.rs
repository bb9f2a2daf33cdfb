use std::str::FromStr;
use log::warn;
use crate::concepts::metric::Metric;
use crate::feedback::{RoutingError, TopologyWarning};
use crate::NodeId;

/// An immutable, directed, weighted graph over nodes `0..node_count`.
///
/// Built once from a validated cost matrix, then only read by the engines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Topology {
    node_count: usize,
    /// row-major `node_count * node_count` link costs
    costs: Vec<Metric>,
    warnings: Vec<TopologyWarning>,
}

impl Topology {
    /// Builds a topology from raw matrix rows.
    ///
    /// Off-diagonal zeros become "no link", the diagonal is forced to zero. The
    /// whole matrix is checked before anything is built: structural problems are
    /// `MalformedInput`, a negative off-diagonal cost is `InvalidTopology`.
    pub fn from_rows(node_count: usize, rows: &[Vec<i64>]) -> Result<Self, RoutingError> {
        if node_count == 0 {
            return Err(RoutingError::malformed("node count must be a positive integer"));
        }
        if rows.len() != node_count {
            return Err(RoutingError::malformed(format!(
                "expected {node_count} rows, found {}",
                rows.len()
            )));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != node_count {
                return Err(RoutingError::malformed(format!(
                    "row {i} has {} entries, expected {node_count}",
                    row.len()
                )));
            }
            for (j, &raw) in row.iter().enumerate() {
                if i != j && raw > u32::MAX as i64 {
                    return Err(RoutingError::malformed(format!(
                        "link {i} -> {j} cost {raw} exceeds {}",
                        u32::MAX
                    )));
                }
            }
        }
        for (i, row) in rows.iter().enumerate() {
            for (j, &raw) in row.iter().enumerate() {
                if i != j && raw < 0 {
                    return Err(RoutingError::InvalidTopology {
                        from: i,
                        to: j,
                        cost: raw,
                    });
                }
            }
        }

        let mut costs = Vec::with_capacity(node_count * node_count);
        let mut warnings = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            for (j, &raw) in row.iter().enumerate() {
                let cost = if i == j {
                    if raw != 0 {
                        warnings.push(TopologyWarning::DiagonalOverridden { node: i, value: raw });
                    }
                    Metric::ZERO
                } else if raw == 0 {
                    warnings.push(TopologyWarning::ZeroCostLink { from: i, to: j });
                    Metric::Unreachable
                } else {
                    Metric::Cost(raw as u64)
                };
                costs.push(cost);
            }
        }
        for warning in &warnings {
            warn!("{warning}");
        }

        Ok(Self {
            node_count,
            costs,
            warnings,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Iterates over all node ids in ascending order.
    pub fn nodes(&self) -> std::ops::Range<NodeId> {
        0..self.node_count
    }

    /// Direct link cost from `from` to `to`. Zero on the diagonal, `Unreachable` when there is no link.
    pub fn cost(&self, from: NodeId, to: NodeId) -> Metric {
        self.costs[from * self.node_count + to]
    }

    /// Direct neighbours of `node` with their link cost, ascending by id. Never contains `node` itself.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Metric)> + '_ {
        self.nodes()
            .filter(move |&k| k != node)
            .map(move |k| (k, self.cost(node, k)))
            .filter(|(_, cost)| cost.is_reachable())
    }

    pub fn is_symmetric(&self) -> bool {
        self.nodes()
            .all(|i| self.nodes().all(|j| self.cost(i, j) == self.cost(j, i)))
    }

    /// Normalizations applied while building this topology.
    pub fn warnings(&self) -> &[TopologyWarning] {
        &self.warnings
    }
}

/// Parses the whitespace separated text format: a positive node count `n`
/// followed by exactly `n * n` integer costs in row-major order.
impl FromStr for Topology {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let first = tokens
            .next()
            .ok_or_else(|| RoutingError::malformed("input is empty, expected a node count"))?;
        let node_count = match i64::from_str(first) {
            Ok(n) if n > 0 => n as usize,
            _ => {
                return Err(RoutingError::malformed(format!(
                    "node count `{first}` is not a positive integer"
                )))
            }
        };
        let expected = node_count
            .checked_mul(node_count)
            .ok_or_else(|| RoutingError::malformed(format!("node count {node_count} is too large")))?;

        let values = tokens
            .enumerate()
            .map(|(idx, token)| {
                i64::from_str(token).map_err(|_| {
                    RoutingError::malformed(format!("token {} (`{token}`) is not an integer", idx + 2))
                })
            })
            .collect::<Result<Vec<i64>, _>>()?;
        if values.len() != expected {
            return Err(RoutingError::malformed(format!(
                "expected {expected} costs for {node_count} nodes, found {}",
                values.len()
            )));
        }

        let rows: Vec<Vec<i64>> = values.chunks(node_count).map(|c| c.to_vec()).collect();
        Topology::from_rows(node_count, &rows)
    }
}
