use routesim::prelude::*;

/// All-pairs shortest distances, Floyd-Warshall. Independent of both engines.
pub fn floyd_warshall(topology: &Topology) -> Vec<Vec<Metric>> {
    let n = topology.node_count();
    let mut dist: Vec<Vec<Metric>> = (0..n)
        .map(|i| (0..n).map(|j| topology.cost(i, j)).collect())
        .collect();
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }
    dist
}

pub fn cost_matrix(report: &EngineReport) -> Vec<Vec<Metric>> {
    report
        .tables
        .iter()
        .map(|table| table.iter().map(|(_, route)| route.cost).collect())
        .collect()
}

/// Every table satisfies its invariants, and every next hop is a direct
/// neighbour that lies on some shortest path.
pub fn assert_sound(topology: &Topology, report: &EngineReport) {
    let truth = floyd_warshall(topology);
    assert_eq!(report.tables.len(), topology.node_count());
    for (origin, table) in report.tables.iter().enumerate() {
        assert_eq!(table.origin, origin);
        assert!(table.is_consistent(), "table of {origin} breaks invariants: {table:?}");
        assert_eq!(*table.route(origin), Route::SELF);
        for (dest, route) in table.iter() {
            assert_eq!(route.cost, truth[origin][dest], "cost {origin} -> {dest}");
            if let Some(hop) = route.next_hop {
                let link = topology.cost(origin, hop);
                assert!(link.is_reachable(), "next hop {hop} of {origin} is not a neighbour");
                assert_eq!(link + truth[hop][dest], route.cost, "next hop {hop} for {origin} -> {dest} is not on a shortest path");
            }
        }
    }
}
