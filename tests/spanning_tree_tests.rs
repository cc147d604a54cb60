use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use weighted_graph::graph::generators::{generate_grid_edges, generate_random_edges};
use weighted_graph::{Edge, Error, Prim, SpanningTreeAlgorithm, UndirectedGraph};

fn scenario_edges() -> Vec<Edge<&'static str, u64>> {
    [
        ("A", "B", 2),
        ("A", "C", 4),
        ("B", "D", 1),
        ("C", "D", 3),
        ("C", "E", 6),
        ("D", "E", 2),
        ("B", "F", 5),
        ("E", "F", 4),
    ]
    .into_iter()
    .map(|(src, dest, weight)| Edge::new(src, dest, weight))
    .collect()
}

fn seven_node_edges() -> Vec<Edge<usize, u64>> {
    [
        (0, 1, 12),
        (0, 2, 8),
        (0, 3, 21),
        (2, 3, 6),
        (2, 6, 2),
        (5, 6, 6),
        (4, 5, 9),
        (2, 4, 4),
        (2, 5, 5),
    ]
    .into_iter()
    .map(|(src, dest, weight)| Edge::new(src, dest, weight))
    .collect()
}

fn find(parent: &mut [usize], x: usize) -> usize {
    let mut root = x;
    while parent[root] != root {
        root = parent[root];
    }
    parent[x] = root;
    root
}

/// Minimum spanning tree weight of `root`'s component, by trying every edge subset
fn exhaustive_minimum(
    graph: &UndirectedGraph<usize>,
    edges: &[Edge<usize, u64>],
    root: usize,
) -> u64 {
    let component = graph.breadth_first(&root).unwrap();
    let inside: Vec<&Edge<usize, u64>> = edges
        .iter()
        .filter(|e| component.contains(&e.src) && component.contains(&e.dest))
        .collect();
    assert!(inside.len() <= 16, "fixture too large for exhaustive search");

    let needed = component.len() - 1;
    let mut best: Option<u64> = None;

    for mask in 0u32..(1 << inside.len()) {
        if mask.count_ones() as usize != needed {
            continue;
        }

        let mut parent: Vec<usize> = (0..graph.node_count()).collect();
        let mut acyclic = true;
        let mut weight = 0;
        for (i, e) in inside.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            let (a, b) = (find(&mut parent, e.src), find(&mut parent, e.dest));
            if a == b {
                acyclic = false;
                break;
            }
            parent[a] = b;
            weight += e.weight;
        }

        // needed acyclic edges over the component's nodes always span it
        if acyclic {
            best = Some(best.map_or(weight, |b| b.min(weight)));
        }
    }

    best.unwrap_or(0)
}

#[test]
fn test_scenario_spanning_tree() {
    let graph: UndirectedGraph<&str> = UndirectedGraph::new(scenario_edges());
    let tree = graph.minimum_spanning_tree(&"A").unwrap();

    // B-D(1), A-B(2), D-E(2), C-D(3), E-F(4)
    assert_eq!(tree.total_weight, 12);
    assert_eq!(tree.root, "A");
    assert_eq!(tree.parent(&"A"), None);

    let expected: BTreeMap<&str, &str> =
        [("B", "A"), ("C", "D"), ("D", "B"), ("E", "D"), ("F", "E")]
            .into_iter()
            .collect();
    assert_eq!(tree.parents, expected);
    assert_eq!(tree.weights[&"C"], 3);
    assert_eq!(tree.weights[&"F"], 4);
    assert_eq!(tree.edge_count(), 5);
}

#[test]
fn test_seven_node_fixture_tree() {
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(7, seven_node_edges());
    let tree = graph.minimum_spanning_tree(&0).unwrap();

    assert_eq!(tree.total_weight, 37);
    let expected: BTreeMap<usize, usize> = [(1, 0), (2, 0), (3, 2), (4, 2), (5, 2), (6, 2)]
        .into_iter()
        .collect();
    assert_eq!(tree.parents, expected);
}

#[test]
fn test_algorithm_struct_matches_convenience_method() {
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(7, seven_node_edges());
    let prim = Prim::new();

    assert_eq!(
        SpanningTreeAlgorithm::<usize, u64, UndirectedGraph<usize>>::name(&prim),
        "Prim"
    );
    assert_eq!(
        prim.compute_spanning_tree(&graph, &4).unwrap(),
        graph.minimum_spanning_tree(&4).unwrap()
    );
}

#[test]
fn test_total_weight_is_minimal_by_exhaustive_comparison() {
    let fixture = seven_node_edges();
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(7, fixture.clone());
    for root in 0..7 {
        let tree = graph.minimum_spanning_tree(&root).unwrap();
        assert_eq!(tree.total_weight, exhaustive_minimum(&graph, &fixture, root));
    }

    let mut rng = StdRng::seed_from_u64(41);
    for _ in 0..20 {
        let edges = generate_random_edges(7, 2.0, 9, &mut rng);
        let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(7, edges.clone());
        let tree = graph.minimum_spanning_tree(&0).unwrap();
        assert_eq!(tree.total_weight, exhaustive_minimum(&graph, &edges, 0));
    }
}

#[test]
fn test_tree_edges_exist_and_sum_to_total() {
    let mut rng = StdRng::seed_from_u64(43);
    let edges = generate_random_edges(200, 3.0, 40, &mut rng);
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(200, edges);
    let tree = graph.minimum_spanning_tree(&0).unwrap();

    let mut sum = 0;
    for (parent, child, weight) in tree.edges() {
        assert!(
            graph
                .neighbors_of(child)
                .any(|(n, w)| n == parent && w == weight),
            "Tree edge ({}, {}, {}) must exist in the graph",
            parent,
            child,
            weight
        );
        sum += weight;
    }
    assert_eq!(sum, tree.total_weight);

    // One edge per reachable node besides the root
    let reachable = graph.depth_first(&0).unwrap();
    assert_eq!(tree.edge_count(), reachable.len() - 1);
    assert!(reachable.iter().all(|v| tree.contains(v)));
}

#[test]
fn test_disconnected_graph_spans_root_component_only() {
    let graph: UndirectedGraph<&str> = UndirectedGraph::new(vec![
        ("a", "b", 3),
        ("b", "c", 1),
        ("a", "c", 2),
        ("x", "y", 7),
    ]);
    let tree = graph.minimum_spanning_tree(&"a").unwrap();

    assert_eq!(tree.total_weight, 3);
    assert!(tree.contains(&"c"));
    assert!(!tree.contains(&"x"));
    assert!(!tree.contains(&"y"));
    assert_eq!(tree.parent(&"y"), None);

    let other = graph.minimum_spanning_tree(&"y").unwrap();
    assert_eq!(other.total_weight, 7);
    assert_eq!(other.parent(&"x"), Some(&"y"));
}

#[test]
fn test_isolated_root_gives_empty_tree() {
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(3, vec![(0, 1, 5)]);
    let tree = graph.minimum_spanning_tree(&2).unwrap();

    assert_eq!(tree.total_weight, 0);
    assert_eq!(tree.edge_count(), 0);
    assert!(tree.contains(&2));
    assert!(!tree.contains(&0));
}

#[test]
fn test_parallel_edges_use_lightest_weight() {
    let graph: UndirectedGraph<usize> =
        UndirectedGraph::new(vec![(0, 1, 9), (0, 1, 2), (1, 0, 4), (1, 1, 0)]);
    let tree = graph.minimum_spanning_tree(&0).unwrap();

    assert_eq!(tree.total_weight, 2);
    assert_eq!(tree.weights[&1], 2);
}

#[test]
fn test_grid_spanning_tree_weight() {
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(36, generate_grid_edges(6, 6));
    let tree = graph.minimum_spanning_tree(&14).unwrap();

    // Unit weights: any spanning tree costs one per non-root node
    assert_eq!(tree.total_weight, 35);
}

#[test]
fn test_overflowing_total_weight_is_an_error() {
    let graph: UndirectedGraph<&str> =
        UndirectedGraph::new(vec![("a", "b", u64::MAX), ("b", "c", 1)]);

    match graph.minimum_spanning_tree(&"a") {
        Err(Error::AlgorithmError(msg)) => assert!(msg.contains("overflows"), "{}", msg),
        other => panic!("expected an overflow error, got {:?}", other),
    }

    // A single maximal edge still fits
    let single: UndirectedGraph<&str> = UndirectedGraph::new(vec![("a", "b", u64::MAX)]);
    assert_eq!(single.minimum_spanning_tree(&"a").unwrap().total_weight, u64::MAX);
}

#[test]
fn test_missing_root_is_an_error() {
    let graph: UndirectedGraph<&str> = UndirectedGraph::new(scenario_edges());
    assert!(matches!(
        graph.minimum_spanning_tree(&"Q"),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_result_serializes_to_json() {
    let graph: UndirectedGraph<&str> = UndirectedGraph::new(scenario_edges());
    let tree = graph.minimum_spanning_tree(&"A").unwrap();

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(json["root"], "A");
    assert_eq!(json["total_weight"], 12);
    assert_eq!(json["parents"]["F"], "E");
}
