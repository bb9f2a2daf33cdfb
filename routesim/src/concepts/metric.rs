use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::ops::Add;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The cost of reaching a destination. Lower is better.
///
/// Unreachability is its own variant rather than a large sentinel number, so
/// adding a link cost to an unreachable distance stays unreachable instead of
/// producing a finite (and wrong) value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "Option<u64>", into = "Option<u64>"))]
pub enum Metric {
    Unreachable,
    Cost(u64),
}

impl Metric {
    pub const ZERO: Metric = Metric::Cost(0);

    pub fn is_reachable(&self) -> bool {
        matches!(self, Metric::Cost(_))
    }

    pub fn value(&self) -> Option<u64> {
        match self {
            Metric::Unreachable => None,
            Metric::Cost(c) => Some(*c),
        }
    }
}

/// Sums two metrics, infinity absorbs.
///
/// # Examples
///
/// ```
/// use routesim::concepts::metric::Metric;
/// assert_eq!(Metric::Cost(2) + Metric::Cost(3), Metric::Cost(5));
/// assert_eq!(Metric::Cost(2) + Metric::Unreachable, Metric::Unreachable);
/// assert_eq!(Metric::Unreachable + Metric::ZERO, Metric::Unreachable);
/// ```
impl Add for Metric {
    type Output = Metric;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Metric::Cost(a), Metric::Cost(b)) => Metric::Cost(a + b),
            _ => Metric::Unreachable,
        }
    }
}

/// Every finite cost is better than `Unreachable`.
///
/// ```
/// use routesim::concepts::metric::Metric;
/// assert!(Metric::Cost(u64::MAX) < Metric::Unreachable);
/// assert!(Metric::Cost(3) < Metric::Cost(4));
/// ```
impl Ord for Metric {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Metric::Cost(a), Metric::Cost(b)) => a.cmp(b),
            (Metric::Cost(_), Metric::Unreachable) => Ordering::Less,
            (Metric::Unreachable, Metric::Cost(_)) => Ordering::Greater,
            (Metric::Unreachable, Metric::Unreachable) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Metric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Option<u64>> for Metric {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Metric::Unreachable, Metric::Cost)
    }
}

impl From<Metric> for Option<u64> {
    fn from(value: Metric) -> Self {
        value.value()
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Unreachable => write!(f, "INF"),
            Metric::Cost(c) => write!(f, "{c}"),
        }
    }
}
