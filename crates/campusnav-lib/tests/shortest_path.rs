mod common;

use std::collections::HashSet;

use campusnav_lib::{campus_graph, shortest_path, CampusGraph, UNREACHABLE};

use common::{
    brute_force_distance, excluded, node_name, path_cost, synthetic_graph, triangle,
};

#[test]
fn triangle_prefers_two_short_edges() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "C", &HashSet::new());

    assert_eq!(result.distance, 3.0);
    assert_eq!(result.path, vec!["A", "B", "C"]);
}

#[test]
fn excluding_middle_node_forces_direct_edge() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "C", &excluded(&["B"]));

    assert_eq!(result.distance, 4.0);
    assert_eq!(result.path, vec!["A", "C"]);
}

#[test]
fn unknown_end_is_unreachable() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "D", &HashSet::new());

    assert_eq!(result.distance, UNREACHABLE);
    assert!(result.path.is_empty());
    assert!(!result.is_reachable());
}

#[test]
fn unknown_start_is_unreachable() {
    let graph = triangle();
    let result = shortest_path(&graph, "Z", "A", &HashSet::new());
    assert!(!result.is_reachable());
}

#[test]
fn same_start_and_end_is_a_trivial_path() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "A", &HashSet::new());

    assert_eq!(result.distance, 0.0);
    assert_eq!(result.path, vec!["A"]);
}

#[test]
fn same_start_and_end_excluded_is_unreachable() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "A", &excluded(&["A"]));
    assert!(!result.is_reachable());
}

#[test]
fn excluding_end_is_unreachable() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "C", &excluded(&["C"]));

    assert_eq!(result.distance, UNREACHABLE);
    assert!(result.path.is_empty());
}

#[test]
fn excluding_start_is_unreachable() {
    let graph = triangle();
    let result = shortest_path(&graph, "A", "C", &excluded(&["A"]));
    assert!(!result.is_reachable());
}

#[test]
fn excluding_every_neighbour_of_start_is_unreachable() {
    let graph = campus_graph();
    let neighbours: Vec<&str> = graph.neighbours("Gate 2").map(|(n, _)| n).collect();
    assert_eq!(neighbours, vec!["Sports Complex"]);

    let result = shortest_path(&graph, "Gate 2", "Library", &excluded(&neighbours));
    assert!(!result.is_reachable());
    assert!(result.path.is_empty());
}

#[test]
fn unknown_exclusions_are_ignored() {
    let graph = triangle();
    let plain = shortest_path(&graph, "A", "C", &HashSet::new());
    let with_noise = shortest_path(&graph, "A", "C", &excluded(&["Nowhere", "b"]));

    assert_eq!(plain, with_noise);
}

#[test]
fn one_way_edges_are_not_symmetrised() {
    let graph = CampusGraph::builder()
        .edge("A", "B", 1.0)
        .location("B")
        .build()
        .expect("valid graph");

    let forward = shortest_path(&graph, "A", "B", &HashSet::new());
    assert_eq!(forward.distance, 1.0);

    let backward = shortest_path(&graph, "B", "A", &HashSet::new());
    assert!(!backward.is_reachable());
}

#[test]
fn edge_to_undeclared_node_is_a_dead_end() {
    let graph = CampusGraph::builder()
        .edge("A", "Ghost", 1.0)
        .edge("A", "B", 5.0)
        .location("B")
        .build()
        .expect("valid graph");

    let result = shortest_path(&graph, "A", "B", &HashSet::new());
    assert_eq!(result.distance, 5.0);

    let to_ghost = shortest_path(&graph, "A", "Ghost", &HashSet::new());
    assert!(
        !to_ghost.is_reachable(),
        "edge targets that are not keys cannot be endpoints"
    );
}

#[test]
fn zero_weight_edges_are_allowed() {
    let graph = CampusGraph::builder()
        .path("A", "B", 0.0)
        .path("B", "C", 0.0)
        .path("A", "C", 1.0)
        .build()
        .expect("valid graph");

    let result = shortest_path(&graph, "A", "C", &HashSet::new());
    assert_eq!(result.distance, 0.0);
    assert_eq!(result.path, vec!["A", "B", "C"]);
}

#[test]
fn very_large_finite_weights_stay_reachable() {
    let graph = CampusGraph::builder()
        .path("A", "B", 1e307)
        .path("B", "C", 1e307)
        .build()
        .expect("total weight is finite");

    let result = shortest_path(&graph, "A", "C", &HashSet::new());
    assert!(result.is_reachable());
    assert!(result.distance.is_finite());
    assert_ne!(result.distance, UNREACHABLE);
    assert_eq!(result.path, vec!["A", "B", "C"]);
}

#[test]
fn campus_route_from_gate_to_library() {
    let graph = campus_graph();
    let result = shortest_path(&graph, "Gate 1", "Library", &HashSet::new());

    assert_eq!(result.distance, 8.0);
    assert_eq!(result.path, vec!["Gate 1", "Main Road", "Library"]);
}

#[test]
fn campus_route_detours_around_blocked_hostel() {
    let graph = campus_graph();
    let result = shortest_path(&graph, "Hostel A", "Hostel C", &excluded(&["Hostel B"]));

    // Hostel A -> TAN Block -> CS Block -> SBOP -> Admin Block -> Canteen -> Hostel C
    assert_eq!(result.distance, 25.0);
    assert_eq!(result.path.first().map(String::as_str), Some("Hostel A"));
    assert_eq!(result.path.last().map(String::as_str), Some("Hostel C"));
    assert!(!result.path.iter().any(|node| node == "Hostel B"));
}

#[test]
fn matches_brute_force_on_synthetic_graphs() {
    for seed in 0..40u64 {
        let graph = synthetic_graph(seed, 6, 35);
        for start in 0..6 {
            for end in 0..6 {
                let (start, end) = (node_name(start), node_name(end));
                let result = shortest_path(&graph, &start, &end, &HashSet::new());
                let expected = brute_force_distance(&graph, &start, &end, &HashSet::new());

                match expected {
                    Some(distance) => assert_eq!(
                        result.distance, distance,
                        "seed {seed}: {start} -> {end}"
                    ),
                    None => assert!(!result.is_reachable(), "seed {seed}: {start} -> {end}"),
                }
            }
        }
    }
}

#[test]
fn returned_paths_are_valid_and_avoid_exclusions() {
    for seed in 0..40u64 {
        let graph = synthetic_graph(seed, 7, 30);
        let blocked_name = node_name((seed % 7) as usize);
        let blocked = excluded(&[blocked_name.as_str()]);

        for start in 0..7 {
            for end in 0..7 {
                let (start, end) = (node_name(start), node_name(end));
                let result = shortest_path(&graph, &start, &end, &blocked);
                let expected = brute_force_distance(&graph, &start, &end, &blocked);

                if !result.is_reachable() {
                    assert!(result.path.is_empty());
                    assert_eq!(expected, None, "seed {seed}: {start} -> {end}");
                    continue;
                }

                assert_eq!(Some(result.distance), expected);
                assert_eq!(result.path.first(), Some(&start));
                assert_eq!(result.path.last(), Some(&end));
                assert!(result.path.iter().all(|node| !blocked.contains(node)));
                let working = graph.working_graph(&blocked);
                assert!(result
                    .path
                    .iter()
                    .all(|node| working.locations().any(|key| key == node.as_str())));
                assert!(result
                    .path
                    .windows(2)
                    .all(|leg| working.edge_weight(&leg[0], &leg[1]).is_some()));
                assert_eq!(
                    path_cost(&graph, &result.path),
                    Some(result.distance),
                    "seed {seed}: path weights must sum to the distance"
                );
            }
        }
    }
}

#[test]
fn excluding_off_route_node_leaves_result_unchanged() {
    let graph = campus_graph();
    let baseline = shortest_path(&graph, "Gate 1", "Library", &HashSet::new());

    for location in graph.locations() {
        if baseline.path.iter().any(|node| node == location) {
            continue;
        }
        let result = shortest_path(&graph, "Gate 1", "Library", &excluded(&[location]));
        assert_eq!(result, baseline, "excluding {location} changed the route");
    }
}

#[test]
fn repeated_queries_do_not_mutate_the_graph() {
    let graph = campus_graph();
    let before = graph.adjacency().clone();
    let blocked = excluded(&["Main Road", "SBOP"]);

    let first = shortest_path(&graph, "Gate 1", "Gate 2", &blocked);
    for _ in 0..5 {
        assert_eq!(shortest_path(&graph, "Gate 1", "Gate 2", &blocked), first);
        let _ = shortest_path(&graph, "Library", "Canteen", &excluded(&["Hostel B"]));
    }

    assert_eq!(graph.adjacency(), &before);
}

#[test]
fn concurrent_queries_share_the_base_graph() {
    let graph = campus_graph();
    let expected = shortest_path(&graph, "Gate 1", "Gate 2", &HashSet::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["Main Road", "SBOP", "Canteen", "Library"]
            .into_iter()
            .map(|blocked| {
                let graph = graph.clone();
                scope.spawn(move || {
                    shortest_path(&graph, "Gate 1", "Gate 2", &excluded(&[blocked]))
                })
            })
            .collect();

        for handle in handles {
            let result = handle.join().expect("query thread");
            assert!(result.distance >= expected.distance);
        }
    });

    let again = shortest_path(&graph, "Gate 1", "Gate 2", &HashSet::new());
    assert_eq!(again, expected);
}
