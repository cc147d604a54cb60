use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use weighted_graph::graph::generators::generate_random_edges;
use weighted_graph::UndirectedGraph;

// Queries only read the graph, so running them in parallel must give the
// same answers as running them one after another.
#[test]
fn test_parallel_queries_match_sequential_results() {
    let mut rng = StdRng::seed_from_u64(97);
    let edges = generate_random_edges(300, 2.5, 50, &mut rng);
    let graph: UndirectedGraph<usize> = UndirectedGraph::indexed(300, edges);

    let sources: Vec<usize> = (0..300).step_by(7).collect();

    let sequential: Vec<_> = sources
        .iter()
        .map(|s| {
            (
                graph.depth_first(s).unwrap(),
                graph.breadth_first(s).unwrap(),
                graph.shortest_paths(s).unwrap(),
                graph.minimum_spanning_tree(s).unwrap(),
            )
        })
        .collect();

    let parallel: Vec<_> = sources
        .par_iter()
        .map(|s| {
            (
                graph.depth_first(s).unwrap(),
                graph.breadth_first(s).unwrap(),
                graph.shortest_paths(s).unwrap(),
                graph.minimum_spanning_tree(s).unwrap(),
            )
        })
        .collect();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_repeated_queries_are_independent() {
    let graph: UndirectedGraph<&str> =
        UndirectedGraph::new(vec![("p", "q", 4), ("q", "r", 1), ("p", "r", 7)]);

    let first = graph.shortest_paths(&"p").unwrap();
    let _other = graph.shortest_paths(&"r").unwrap();
    let again = graph.shortest_paths(&"p").unwrap();

    assert_eq!(first, again);
    assert_eq!(again.distance(&"r"), Some(5));
}
