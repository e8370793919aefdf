//! Unit tests for shortest paths and route reconstruction.

use super::*;
use crate::domain::{Coordinate, StationCode};
use crate::network::{Network, NetworkBuilder};

fn code(s: &str) -> StationCode {
    StationCode::parse(s).unwrap()
}

fn codes(list: &[&str]) -> Vec<StationCode> {
    list.iter().map(|s| code(s)).collect()
}

/// Build a network with explicit weights. Coordinates are irrelevant here.
fn network(stations: &[&str], edges: &[(&str, &str, f64)]) -> Network {
    let mut builder = NetworkBuilder::new();
    for (i, s) in stations.iter().enumerate() {
        builder
            .add_station(code(s), Coordinate::new(35.0, -100.0 + i as f64))
            .unwrap();
    }
    for (from, to, weight) in edges {
        builder
            .add_connection(code(from), code(to), *weight)
            .unwrap();
    }
    builder.build()
}

/// AAA <-> BBB (10), BBB <-> CCC (5), DDD isolated.
fn line() -> Network {
    network(
        &["AAA", "BBB", "CCC", "DDD"],
        &[
            ("AAA", "BBB", 10.0),
            ("BBB", "AAA", 10.0),
            ("BBB", "CCC", 5.0),
            ("CCC", "BBB", 5.0),
        ],
    )
}

#[test]
fn path_through_middle_station() {
    let route = find_path(&line(), code("AAA"), code("CCC"));
    assert!(route.found);
    assert_eq!(route.path, codes(&["AAA", "BBB", "CCC"]));
    assert_eq!(route.distance_miles, Some(15.0));
}

#[test]
fn reverse_path() {
    let route = find_path(&line(), code("CCC"), code("AAA"));
    assert!(route.found);
    assert_eq!(route.path, codes(&["CCC", "BBB", "AAA"]));
}

#[test]
fn distances_from_source() {
    let paths = shortest_paths(&line(), code("AAA"));
    assert_eq!(paths.source(), code("AAA"));
    assert_eq!(paths.distance_to(&code("AAA")), Some(0.0));
    assert_eq!(paths.distance_to(&code("BBB")), Some(10.0));
    assert_eq!(paths.distance_to(&code("CCC")), Some(15.0));
    assert_eq!(paths.predecessor(&code("CCC")), Some(code("BBB")));
    assert_eq!(paths.predecessor(&code("AAA")), None);
}

#[test]
fn isolated_station_is_unreachable() {
    let net = line();
    let route = find_path(&net, code("AAA"), code("DDD"));
    assert!(!route.found);
    assert!(route.path.is_empty());
    assert_eq!(route.distance_miles, None);
    assert!(route.legs().is_empty());

    let paths = shortest_paths(&net, code("AAA"));
    assert!(!paths.is_reachable(&code("DDD")));
    assert_eq!(paths.distance_to(&code("DDD")), None);
    assert_eq!(paths.reached_count(), 3);
}

#[test]
fn route_to_self() {
    let route = find_path(&line(), code("AAA"), code("AAA"));
    assert!(route.found);
    assert_eq!(route.path, codes(&["AAA"]));
    assert_eq!(route.distance_miles, Some(0.0));
    assert_eq!(route.hop_count(), 0);
}

#[test]
fn isolated_station_routes_to_itself() {
    let route = find_path(&line(), code("DDD"), code("DDD"));
    assert!(route.found);
    assert_eq!(route.path, codes(&["DDD"]));
}

#[test]
fn unknown_endpoints_are_not_found() {
    let net = line();

    let route = find_path(&net, code("ZZZ"), code("AAA"));
    assert!(!route.found);
    assert!(route.path.is_empty());

    let route = find_path(&net, code("AAA"), code("ZZZ"));
    assert!(!route.found);

    let paths = shortest_paths(&net, code("ZZZ"));
    assert_eq!(paths.reached_count(), 0);
    assert!(paths.distances().is_empty());
    assert!(paths.predecessors().is_empty());
}

#[test]
fn shorter_multi_hop_beats_direct_edge() {
    // Direct AAA->CCC is 20, but AAA->BBB->CCC is 15
    let net = network(
        &["AAA", "BBB", "CCC"],
        &[
            ("AAA", "BBB", 10.0),
            ("BBB", "CCC", 5.0),
            ("AAA", "CCC", 20.0),
        ],
    );
    let route = find_path(&net, code("AAA"), code("CCC"));
    assert_eq!(route.path, codes(&["AAA", "BBB", "CCC"]));
    assert_eq!(route.distance_miles, Some(15.0));
}

#[test]
fn direction_of_edges_is_respected() {
    // Only AAA -> BBB is stored
    let net = network(&["AAA", "BBB"], &[("AAA", "BBB", 7.0)]);
    assert!(find_path(&net, code("AAA"), code("BBB")).found);
    assert!(!find_path(&net, code("BBB"), code("AAA")).found);
}

#[test]
fn later_improvement_replaces_predecessor() {
    // EEE is first reached from AAA at 100, then improved via BBB and CCC
    let net = network(
        &["AAA", "BBB", "CCC", "EEE"],
        &[
            ("AAA", "EEE", 100.0),
            ("AAA", "BBB", 1.0),
            ("BBB", "CCC", 1.0),
            ("CCC", "EEE", 1.0),
        ],
    );
    let paths = shortest_paths(&net, code("AAA"));
    assert_eq!(paths.distance_to(&code("EEE")), Some(3.0));
    assert_eq!(paths.predecessor(&code("EEE")), Some(code("CCC")));
    assert_eq!(
        paths.path_to(&code("EEE")),
        Some(codes(&["AAA", "BBB", "CCC", "EEE"]))
    );
}

#[test]
fn legs_follow_the_path() {
    let route = find_path(&line(), code("AAA"), code("CCC"));
    let legs = route.legs();
    assert_eq!(route.hop_count(), 2);
    assert_eq!(
        legs[0],
        Leg {
            from: code("AAA"),
            to: code("BBB"),
            miles: 10.0,
        }
    );
    assert_eq!(
        legs[1],
        Leg {
            from: code("BBB"),
            to: code("CCC"),
            miles: 5.0,
        }
    );
    let total: f64 = legs.iter().map(|l| l.miles).sum();
    assert_eq!(Some(total), route.distance_miles);
}

#[test]
fn repeated_runs_are_identical() {
    // Two equal-length routes AAA -> DDD, via BBB or via CCC
    let net = network(
        &["AAA", "BBB", "CCC", "DDD"],
        &[
            ("AAA", "BBB", 5.0),
            ("AAA", "CCC", 5.0),
            ("BBB", "DDD", 5.0),
            ("CCC", "DDD", 5.0),
        ],
    );
    let first = shortest_paths(&net, code("AAA"));
    for _ in 0..20 {
        assert_eq!(shortest_paths(&net, code("AAA")), first);
    }
    // Ties settle in code order, so BBB relaxes DDD first
    assert_eq!(first.predecessor(&code("DDD")), Some(code("BBB")));
}

#[test]
fn whole_component_is_explored() {
    let paths = shortest_paths(&line(), code("CCC"));
    assert_eq!(paths.distance_to(&code("AAA")), Some(15.0));
    assert_eq!(paths.distance_to(&code("BBB")), Some(5.0));
}

#[test]
fn queries_run_in_parallel_on_shared_network() {
    let net = std::sync::Arc::new(line());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let net = net.clone();
            std::thread::spawn(move || find_path(&net, code("AAA"), code("CCC")))
        })
        .collect();
    for handle in handles {
        let route = handle.join().unwrap();
        assert_eq!(route.distance_miles, Some(15.0));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 6] = ["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"];

    /// Random symmetric graphs over six stations.
    fn symmetric_edges() -> impl Strategy<Value = Vec<(usize, usize, f64)>> {
        proptest::collection::vec((0usize..6, 0usize..6, 1.0f64..500.0), 0..15)
            .prop_map(|edges| edges.into_iter().filter(|(a, b, _)| a != b).collect())
    }

    fn symmetric_network(edges: &[(usize, usize, f64)]) -> Network {
        let mut builder = NetworkBuilder::new();
        for (i, s) in NAMES.iter().enumerate() {
            builder
                .add_station(code(s), Coordinate::new(0.0, i as f64))
                .unwrap();
        }
        for (a, b, w) in edges {
            builder
                .add_connection(code(NAMES[*a]), code(NAMES[*b]), *w)
                .unwrap();
            builder
                .add_connection(code(NAMES[*b]), code(NAMES[*a]), *w)
                .unwrap();
        }
        builder.build()
    }

    proptest! {
        /// Leg weights always add up to the reported distance
        #[test]
        fn legs_sum_to_distance(edges in symmetric_edges(), to in 0usize..6) {
            let net = symmetric_network(&edges);
            let route = find_path(&net, code("AAA"), code(NAMES[to]));
            if route.found {
                let total: f64 = route.legs().iter().map(|l| l.miles).sum();
                let reported = route.distance_miles.unwrap();
                prop_assert!((total - reported).abs() < 1e-6);
                prop_assert_eq!(route.path.first(), Some(&code("AAA")));
                prop_assert_eq!(route.path.last(), Some(&code(NAMES[to])));
            } else {
                prop_assert!(route.path.is_empty());
            }
        }

        /// On a symmetric graph, distance is the same in both directions
        #[test]
        fn symmetric_graphs_give_symmetric_distances(
            edges in symmetric_edges(),
            a in 0usize..6,
            b in 0usize..6,
        ) {
            let net = symmetric_network(&edges);
            let ab = shortest_paths(&net, code(NAMES[a])).distance_to(&code(NAMES[b]));
            let ba = shortest_paths(&net, code(NAMES[b])).distance_to(&code(NAMES[a]));
            match (ab, ba) {
                (Some(x), Some(y)) => prop_assert!((x - y).abs() < 1e-6),
                (None, None) => {}
                _ => prop_assert!(false, "reachability differs: {ab:?} vs {ba:?}"),
            }
        }

        /// No edge can shorten a settled distance (triangle inequality)
        #[test]
        fn distances_are_relaxed(edges in symmetric_edges()) {
            let net = symmetric_network(&edges);
            let paths = shortest_paths(&net, code("AAA"));
            for station in net.stations() {
                let Some(du) = paths.distance_to(&station.code()) else { continue };
                for (neighbor, w) in station.connections() {
                    let dv = paths.distance_to(&neighbor).unwrap();
                    prop_assert!(dv <= du + w + 1e-9);
                }
            }
        }
    }
}
