use std::collections::BTreeMap;

use crate::algorithm::traits::{label_of, resolve_start};
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::LazyMinHeap;
use crate::graph::{Graph, NodeLabel, Weight};
use crate::Result;

/// Classic Dijkstra's algorithm implementation
///
/// Requires non-negative edge weights; this is not checked.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        let source_id = resolve_start::<N, W, G>(graph, source)?;
        let n = graph.vertex_count();

        // Initialize distances and predecessors
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];

        distances[source_id] = Some(W::zero());

        let mut queue = LazyMinHeap::with_capacity(n);
        queue.push(source_id, W::zero());

        let mut relaxations = 0usize;

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: a shorter path to u was pushed after this one
            if let Some(current_dist) = distances[u] {
                if current_dist < dist_u {
                    continue;
                }
            }

            for (v, weight) in graph.neighbors(u) {
                // An overflowing sum can never beat a representable distance
                let new_dist = match dist_u.checked_sum(weight) {
                    Some(dist) => dist,
                    None => continue,
                };

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                    relaxations += 1;
                }
            }
        }

        let mut distance_map = BTreeMap::new();
        let mut predecessor_map = BTreeMap::new();
        for (v, (dist, pred)) in distances.into_iter().zip(predecessors).enumerate() {
            let label = label_of::<N, W, G>(graph, v)?;
            let pred = pred.map(|p| label_of::<N, W, G>(graph, p)).transpose()?;
            distance_map.insert(label.clone(), dist);
            predecessor_map.insert(label, pred);
        }

        log::debug!(
            "Dijkstra from {:?}: {} relaxations, {} of {} nodes reachable",
            source,
            relaxations,
            distance_map.values().filter(|d| d.is_some()).count(),
            n
        );

        Ok(ShortestPathResult {
            source: source.clone(),
            distances: distance_map,
            predecessors: predecessor_map,
        })
    }
}
