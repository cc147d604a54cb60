use std::env;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use weighted_graph::graph::generators::generate_random_edges;
use weighted_graph::UndirectedGraph;

/// Benchmark settings, overridable as positional arguments:
/// `benchmark [max_vertices] [edge_factor] [seed] [--json]`
#[derive(Debug, Clone)]
struct BenchmarkConfig {
    max_vertices: usize,
    edge_factor: f64,
    max_weight: u64,
    seed: u64,
    json: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            max_vertices: 200_000,
            edge_factor: 2.0,
            max_weight: 100,
            seed: 42,
            json: false,
        }
    }
}

impl BenchmarkConfig {
    fn from_args(args: &[String]) -> Self {
        let mut config = Self::default();
        let mut positional = args.iter().skip(1).filter(|a| !a.starts_with("--"));

        if let Some(v) = positional.next() {
            config.max_vertices = v.parse().unwrap_or(config.max_vertices);
        }
        if let Some(v) = positional.next() {
            config.edge_factor = v.parse().unwrap_or(config.edge_factor);
        }
        if let Some(v) = positional.next() {
            config.seed = v.parse().unwrap_or(config.seed);
        }
        config.json = args.iter().any(|a| a == "--json");
        config
    }
}

#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    reachable: usize,
    depth_first_ms: f64,
    breadth_first_ms: f64,
    dijkstra_ms: f64,
    prim_ms: f64,
    spanning_weight: u64,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    generated_at: DateTime<Utc>,
    edge_factor: f64,
    seed: u64,
    results: Vec<BenchmarkRow>,
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config = BenchmarkConfig::from_args(&args);
    log::info!("Benchmark configuration: {:?}", config);

    let graph_sizes: Vec<usize> = [1_000, 10_000, 50_000, 100_000, 200_000, 500_000]
        .into_iter()
        .filter(|&size| size <= config.max_vertices)
        .collect();

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        log::info!("Generating random graph with {} vertices", size);
        let edges = generate_random_edges(size, config.edge_factor, config.max_weight, &mut rng);
        let graph = UndirectedGraph::indexed(size, edges);
        let source = 0usize;

        let (dfs, dfs_time) = timed(|| graph.depth_first(&source));
        let (_bfs, bfs_time) = timed(|| graph.breadth_first(&source));
        let (_paths, dijkstra_time) = timed(|| graph.shortest_paths(&source));
        let (tree, prim_time) = timed(|| graph.minimum_spanning_tree(&source));

        results.push(BenchmarkRow {
            vertices: graph.node_count(),
            edges: graph.edge_count(),
            reachable: dfs?.len(),
            depth_first_ms: dfs_time.as_secs_f64() * 1000.0,
            breadth_first_ms: bfs_time.as_secs_f64() * 1000.0,
            dijkstra_ms: dijkstra_time.as_secs_f64() * 1000.0,
            prim_ms: prim_time.as_secs_f64() * 1000.0,
            spanning_weight: tree?.total_weight,
        });
    }

    if config.json {
        let report = BenchmarkReport {
            generated_at: Utc::now(),
            edge_factor: config.edge_factor,
            seed: config.seed,
            results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=====================================================");
    println!("Benchmark: DFS / BFS / Dijkstra / Prim");
    println!("Edge factor: {} edges per vertex (on average)", config.edge_factor);
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<10} | {:<10} | {:<10} | {:<13} | {:<10}",
        "Vertices", "Reachable", "DFS (ms)", "BFS (ms)", "Dijk (ms)", "Prim (ms)", "MST weight"
    );
    println!("-----------------------------------------------------");

    for row in &results {
        println!(
            "{:<10} | {:<10} | {:<10.2} | {:<10.2} | {:<10.2} | {:<13.2} | {:<10}",
            row.vertices,
            row.reachable,
            row.depth_first_ms,
            row.breadth_first_ms,
            row.dijkstra_ms,
            row.prim_ms,
            row.spanning_weight
        );
    }

    Ok(())
}
