use crate::feedback::RoutingError;
use crate::NodeId;

/// Finds the first hop from `origin` towards `dest` by walking a predecessor
/// chain backwards until the node whose predecessor is `origin`.
///
/// Returns `Ok(None)` for the origin itself and for destinations that were never
/// reached. The walk takes at most `predecessors.len()` steps; a chain that does
/// not end at `origin` within that bound is reported as corrupt.
///
/// # Examples
///
/// ```
/// // 0 -> 1 -> 3, 2 unreachable
/// let pred = [None, Some(0), None, Some(1)];
/// assert_eq!(routesim::util::first_hop(&pred, 0, 3).unwrap(), Some(1));
/// assert_eq!(routesim::util::first_hop(&pred, 0, 1).unwrap(), Some(1));
/// assert_eq!(routesim::util::first_hop(&pred, 0, 2).unwrap(), None);
/// assert_eq!(routesim::util::first_hop(&pred, 0, 0).unwrap(), None);
/// ```
pub fn first_hop(
    predecessors: &[Option<NodeId>],
    origin: NodeId,
    dest: NodeId,
) -> Result<Option<NodeId>, RoutingError> {
    if dest == origin || predecessors[dest].is_none() {
        return Ok(None);
    }
    let mut hop = dest;
    for _ in 0..predecessors.len() {
        match predecessors[hop] {
            Some(prev) if prev == origin => return Ok(Some(hop)),
            Some(prev) => hop = prev,
            None => break,
        }
    }
    Err(RoutingError::CorruptPredecessors { origin, dest })
}
