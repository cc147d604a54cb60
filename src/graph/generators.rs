use crate::graph::Edge;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates roughly `edge_factor * n` random undirected edges over nodes `0..n`
/// with integer weights in `1..=max_weight`. Self-loops are skipped.
pub fn generate_random_edges<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> Vec<Edge<usize, u64>> {
    if n < 2 {
        return Vec::new();
    }

    let num_edges = (edge_factor * n as f64) as usize;
    let mut edges = Vec::with_capacity(num_edges);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            edges.push(Edge::new(u, v, rng.gen_range(1..=max_weight.max(1))));
        }
    }

    edges
}

/// Generates a 2D grid with 4-connectivity and unit weights.
/// Node `(x, y)` has index `y * width + x`.
pub fn generate_grid_edges(width: usize, height: usize) -> Vec<Edge<usize, u64>> {
    let mut edges = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x + 1 < width {
                edges.push(Edge::new(current, current + 1, 1));
            }
            if y + 1 < height {
                edges.push(Edge::new(current, current + width, 1));
            }
        }
    }

    edges
}

/// Generates a random geometric graph in the unit square:
/// points within distance `r` are connected, weighted by their euclidean distance
pub fn generate_geometric_edges<R: Rng>(
    n: usize,
    r: f64,
    rng: &mut R,
) -> Vec<Edge<usize, OrderedFloat<f64>>> {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();

    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            if dist <= r {
                edges.push(Edge::new(i, j, OrderedFloat(dist)));
            }
        }
    }

    edges
}
