use educe::Educe;
use thiserror::Error;
use crate::NodeId;

/// Errors that abort a run. None of them are retried, the input is fixed.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum RoutingError {
    /// The topology text or matrix is structurally wrong: missing or extra tokens,
    /// a non-numeric token, or a node count that is not a positive integer.
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
    /// An off-diagonal link cost is negative. Neither algorithm is correct in that case,
    /// so the whole run is blocked.
    #[error("invalid topology: link {from} -> {to} has negative cost {cost}")]
    InvalidTopology {
        from: NodeId,
        to: NodeId,
        cost: i64,
    },
    /// Distance-vector relaxation still produced updates after its pass cap.
    /// This is an internal invariant failure, not a user error.
    #[error("distance-vector did not converge within {cap} passes")]
    NonConvergence { cap: usize },
    /// The predecessor chain for a destination did not lead back to the source
    /// within `node_count` steps.
    #[error("predecessor chain from {origin} to {dest} is corrupt")]
    CorruptPredecessors { origin: NodeId, dest: NodeId },
}

impl RoutingError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RoutingError::MalformedInput {
            reason: reason.into(),
        }
    }
}

/// Although these are reported like errors, they are only warnings.
/// The topology is normalized and the run continues.
#[derive(Error, Educe, Clone, Eq, PartialEq)]
#[educe(Debug)]
pub enum TopologyWarning {
    /// A zero cost link cannot be expressed, so it is read as "no direct link".
    #[error("link {from} -> {to} has cost 0, treating it as no link")]
    ZeroCostLink { from: NodeId, to: NodeId },
    /// The diagonal is always zero, whatever the input said.
    #[error("node {node} has self cost {value}, forcing it to 0")]
    DiagonalOverridden { node: NodeId, value: i64 },
}
