use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use routesim::prelude::*;

pub fn topo(text: &str) -> Topology {
    text.parse().unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

/// 0 -1- 1 -2- 2, plus a direct 0 -4- 2 that loses to the detour.
pub fn triangle() -> Topology {
    topo("3
        0 1 4
        1 0 2
        4 2 0")
}

/// The weighted five node mesh, nodes renumbered from zero.
///
/// ```text
/// (0,1,2) (0,2,1) (1,2,4) (1,3,5) (2,3,100) (2,4,8) (3,4,1)
/// ```
pub fn simple_weighted() -> Topology {
    let edges = [(0, 1, 2), (0, 2, 1), (1, 2, 4), (1, 3, 5), (2, 3, 100), (2, 4, 8), (3, 4, 1)];
    undirected(5, &edges)
}

/// The triangle with an extra node 3 that has no links at all.
pub fn isolated_node() -> Topology {
    topo("4
        0 1 4 0
        1 0 2 0
        4 2 0 0
        0 0 0 0")
}

/// Two equal cost routes from 0 to 3: through 1 and through 2.
pub fn square() -> Topology {
    undirected(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)])
}

/// A one-way ring 0 -> 1 -> 2 -> 3 -> 0.
pub fn one_way_ring() -> Topology {
    topo("4
        0 1 0 0
        0 0 1 0
        0 0 0 1
        1 0 0 0")
}

/// A line 0 - 1 - ... - (n-1) with unit links.
pub fn chain(n: usize) -> Topology {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i, 1)).collect();
    undirected(n, &edges)
}

pub fn undirected(n: usize, edges: &[(usize, usize, i64)]) -> Topology {
    let mut rows = vec![vec![0i64; n]; n];
    for &(a, b, cost) in edges {
        rows[a][b] = cost;
        rows[b][a] = cost;
    }
    Topology::from_rows(n, &rows).expect("fixture should be valid")
}

/// Random topology with `density` chance of a link per ordered pair.
pub fn random(rng: &mut StdRng, n: usize, density: f64, max_cost: i64, symmetric: bool) -> Topology {
    let mut rows = vec![vec![0i64; n]; n];
    for i in 0..n {
        for j in 0..n {
            if i == j || (symmetric && j < i) {
                continue;
            }
            if rng.gen_bool(density) {
                let cost = rng.gen_range(1..=max_cost);
                rows[i][j] = cost;
                if symmetric {
                    rows[j][i] = cost;
                }
            }
        }
    }
    Topology::from_rows(n, &rows).expect("generated topology should be valid")
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
