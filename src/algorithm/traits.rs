use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::graph::{Graph, NodeLabel, Weight};
use crate::{Error, Result};

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathResult<N, W> {
    /// Source node label
    pub source: N,

    /// Distance from the source to each node; `None` marks an unreachable node
    pub distances: BTreeMap<N, Option<W>>,

    /// Predecessor of each node in the shortest path tree
    pub predecessors: BTreeMap<N, Option<N>>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeLabel,
    W: Weight,
{
    /// Distance to `node`, or `None` if it is unreachable or unknown
    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).is_some()
    }

    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(Option::as_ref)
    }

    /// Iterates over reachable nodes and their distances, in label order
    pub fn reachable(&self) -> impl Iterator<Item = (&N, W)> + '_ {
        self.distances
            .iter()
            .filter_map(|(node, dist)| dist.map(|d| (node, d)))
    }

    /// Get the shortest path from the source to `target` as a sequence of nodes
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target;
        let mut visited = HashSet::new();

        // Build path in reverse order
        while *current != self.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in predecessor chain at node {:?}", current);
                return None;
            }

            path.push(current.clone());
            match self.predecessor(current) {
                Some(pred) => current = pred,
                None => {
                    log::warn!("Broken predecessor chain at node {:?}", current);
                    return None;
                }
            }
        }

        path.push(self.source.clone());
        path.reverse();

        Some(path)
    }
}

/// Result of a minimum spanning tree computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpanningTreeResult<N, W> {
    /// Root the tree was grown from
    pub root: N,

    /// Parent of every tree node except the root
    pub parents: BTreeMap<N, N>,

    /// Weight of the edge connecting each non-root tree node to its parent
    pub weights: BTreeMap<N, W>,

    /// Sum of all connecting edge weights
    pub total_weight: W,
}

impl<N, W> SpanningTreeResult<N, W>
where
    N: NodeLabel,
    W: Weight,
{
    pub fn parent(&self, node: &N) -> Option<&N> {
        self.parents.get(node)
    }

    /// Returns true if `node` belongs to the tree (the root included)
    pub fn contains(&self, node: &N) -> bool {
        *node == self.root || self.parents.contains_key(node)
    }

    /// Iterates over tree edges as (parent, child, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, W)> + '_ {
        self.parents.iter().filter_map(move |(child, parent)| {
            self.weights
                .get(child)
                .map(|&weight| (parent, child, weight))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.parents.len()
    }
}

/// Trait for reachability orderings
pub trait TraversalAlgorithm<N, W, G>
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    /// Lists every node reachable from `start`, each exactly once
    fn traverse(&self, graph: &G, start: &N) -> Result<Vec<N>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Trait for minimum spanning tree algorithms
pub trait SpanningTreeAlgorithm<N, W, G>
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    /// Grow a minimum spanning tree over the component containing `root`
    fn compute_spanning_tree(&self, graph: &G, root: &N) -> Result<SpanningTreeResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Resolves a query's start label to its vertex index
pub(crate) fn resolve_start<N, W, G>(graph: &G, node: &N) -> Result<usize>
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    graph
        .index_of(node)
        .filter(|&vertex| graph.has_vertex(vertex))
        .ok_or_else(|| Error::NodeNotFound(format!("{:?}", node)))
}

/// Translates a vertex index back to its label
pub(crate) fn label_of<N, W, G>(graph: &G, vertex: usize) -> Result<N>
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    graph.label(vertex).cloned().ok_or_else(|| {
        Error::AlgorithmError(format!("Vertex {} has no label in the graph registry", vertex))
    })
}
