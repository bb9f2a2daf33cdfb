use routesim::prelude::*;

mod common;

use common::graphs;

fn both(topology: &Topology) -> [EngineReport; 2] {
    [
        DistanceVector::default().run(topology).unwrap(),
        LinkState.run(topology).unwrap(),
    ]
}

#[test]
fn isolated_node_is_unreachable_both_ways() {
    let topology = graphs::isolated_node();
    for report in both(&topology) {
        for origin in 0..3 {
            assert_eq!(*report.table(origin).route(3), Route::UNREACHABLE);
        }
        let isolated = report.table(3);
        assert_eq!(*isolated.route(3), Route::SELF);
        for dest in 0..3 {
            assert_eq!(isolated.cost(dest), Metric::Unreachable);
            assert_eq!(isolated.next_hop(dest), None);
        }
        // the rest of the graph is unaffected
        assert_eq!(report.table(0).cost(2), Metric::Cost(3));
    }
}

#[test]
fn single_node() {
    let topology = graphs::topo("1 7");
    assert_eq!(
        topology.warnings(),
        &[TopologyWarning::DiagonalOverridden { node: 0, value: 7 }]
    );
    for report in both(&topology) {
        assert_eq!(report.tables.len(), 1);
        assert_eq!(*report.table(0).route(0), Route::SELF);
    }
}

#[test]
fn no_links_at_all() {
    let topology = Topology::from_rows(3, &[vec![0; 3], vec![0; 3], vec![0; 3]]).unwrap();
    for report in both(&topology) {
        for table in &report.tables {
            assert_eq!(*table, RoutingTable::unreachable(table.origin, 3));
        }
    }
}

#[test]
fn negative_edge_blocks_the_run() {
    let err = "3  0 1 4  1 0 -2  4 2 0".parse::<Topology>().unwrap_err();
    assert_eq!(err, RoutingError::InvalidTopology { from: 1, to: 2, cost: -2 });
    assert_eq!(err.to_string(), "invalid topology: link 1 -> 2 has negative cost -2");
}

#[test]
fn negative_diagonal_is_only_a_warning() {
    let topology = graphs::topo("2  -5 3  3 0");
    assert_eq!(topology.cost(0, 0), Metric::ZERO);
    assert_eq!(topology.warnings().len(), 1);
}

#[test]
fn cost_above_u32_is_malformed() {
    let input = format!("2 0 {} 1 0", u32::MAX as u64 + 1);
    assert!(matches!(
        input.parse::<Topology>(),
        Err(RoutingError::MalformedInput { .. })
    ));
    let max = graphs::topo(&format!("2 0 {} 1 0", u32::MAX));
    assert_eq!(max.cost(0, 1), Metric::Cost(u32::MAX as u64));
}

#[test]
fn large_costs_do_not_overflow() {
    let big = u32::MAX as i64;
    let topology = graphs::undirected(4, &[(0, 1, big), (1, 2, big), (2, 3, big)]);
    for report in both(&topology) {
        assert_eq!(report.table(0).cost(3), Metric::Cost(3 * u32::MAX as u64));
        assert_eq!(report.table(0).next_hop(3), Some(1));
    }
}

#[test]
fn zero_cost_link_means_no_link() {
    let topology = graphs::topo("2  0 0  5 0");
    assert_eq!(
        topology.warnings(),
        &[TopologyWarning::ZeroCostLink { from: 0, to: 1 }]
    );
    for report in both(&topology) {
        assert_eq!(*report.table(0).route(1), Route::UNREACHABLE);
        assert_eq!(report.table(1).cost(0), Metric::Cost(5));
    }
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_unreachable_as_null() {
    let report = DistanceVector::default().run(&graphs::isolated_node()).unwrap();
    let json = report.to_json().unwrap();
    assert!(json.contains("null"));
    let back: EngineReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}
