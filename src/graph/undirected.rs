use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::prim::Prim;
use crate::algorithm::traversal::{BreadthFirst, DepthFirst};
use crate::algorithm::{
    ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm, SpanningTreeResult,
    TraversalAlgorithm,
};
use crate::graph::traits::{Graph, NodeLabel, Weight};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{self, Display};

/// An undirected weighted edge as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N, W> {
    pub src: N,
    pub dest: N,
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    pub fn new(src: N, dest: N, weight: W) -> Self {
        Edge { src, dest, weight }
    }
}

impl<N, W> From<(N, N, W)> for Edge<N, W> {
    fn from((src, dest, weight): (N, N, W)) -> Self {
        Edge::new(src, dest, weight)
    }
}

/// An undirected multigraph using adjacency lists over dense vertex indices
///
/// The graph is built once from an edge list and is immutable afterwards.
/// Every edge `(u, v, w)` is recorded on both endpoints in input order, and
/// parallel edges are all retained.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<N, W = u64>
where
    N: NodeLabel,
    W: Weight,
{
    /// Label of each vertex, indexed by vertex id
    labels: Vec<N>,

    /// Reverse lookup: label -> vertex id
    index: HashMap<N, usize>,

    /// Edges for each vertex: vertex_id -> [(neighbor_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,

    /// Number of accepted undirected edges
    edge_count: usize,

    /// Edges skipped during construction of a fixed-capacity graph
    rejected_edges: Vec<Edge<N, W>>,
}

impl<N, W> UndirectedGraph<N, W>
where
    N: NodeLabel,
    W: Weight,
{
    /// Builds a graph from an edge list, creating nodes on first reference
    pub fn new<I, E>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<N, W>>,
    {
        Self::with_nodes(std::iter::empty(), edges)
    }

    /// Builds a graph with a set of pre-declared nodes, which may stay isolated
    pub fn with_nodes<J, I, E>(nodes: J, edges: I) -> Self
    where
        J: IntoIterator<Item = N>,
        I: IntoIterator<Item = E>,
        E: Into<Edge<N, W>>,
    {
        let mut graph = Self::empty();
        for node in nodes {
            graph.register(node);
        }
        for edge in edges {
            graph.insert_edge(edge.into());
        }
        log::debug!(
            "Built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    fn empty() -> Self {
        UndirectedGraph {
            labels: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
            edge_count: 0,
            rejected_edges: Vec::new(),
        }
    }

    fn register(&mut self, node: N) -> usize {
        if let Some(&id) = self.index.get(&node) {
            return id;
        }
        let id = self.labels.len();
        self.index.insert(node.clone(), id);
        self.labels.push(node);
        self.adjacency.push(Vec::new());
        id
    }

    fn insert_edge(&mut self, edge: Edge<N, W>) {
        let src = self.register(edge.src);
        let dest = self.register(edge.dest);
        self.adjacency[src].push((dest, edge.weight));
        self.adjacency[dest].push((src, edge.weight));
        self.edge_count += 1;
    }

    /// Number of nodes, isolated ones included
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges; parallel edges count separately
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Iterates over every node in registration order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.labels.iter()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Returns the (neighbor, weight) pairs of a node in insertion order.
    ///
    /// A node without edges, or one the graph has never seen, yields nothing.
    pub fn neighbors_of<'a>(&'a self, node: &N) -> impl Iterator<Item = (&'a N, W)> + 'a {
        self.index
            .get(node)
            .map(|&id| self.adjacency[id].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&(neighbor, weight)| (&self.labels[neighbor], weight))
    }

    /// Number of adjacency entries recorded for a node
    pub fn degree(&self, node: &N) -> usize {
        self.index
            .get(node)
            .map_or(0, |&id| self.adjacency[id].len())
    }

    /// Edges skipped because an endpoint fell outside the declared capacity
    pub fn rejected_edges(&self) -> &[Edge<N, W>] {
        &self.rejected_edges
    }

    /// Nodes in depth-first order from `start`
    pub fn depth_first(&self, start: &N) -> Result<Vec<N>> {
        DepthFirst::new().traverse(self, start)
    }

    /// Nodes in breadth-first order from `start`
    pub fn breadth_first(&self, start: &N) -> Result<Vec<N>> {
        BreadthFirst::new().traverse(self, start)
    }

    /// Shortest distances and predecessors from `source`
    pub fn shortest_paths(&self, source: &N) -> Result<ShortestPathResult<N, W>> {
        Dijkstra::new().compute_shortest_paths(self, source)
    }

    /// Minimum spanning tree of the component containing `root`
    pub fn minimum_spanning_tree(&self, root: &N) -> Result<SpanningTreeResult<N, W>> {
        Prim::new().compute_spanning_tree(self, root)
    }
}

impl<W> UndirectedGraph<usize, W>
where
    W: Weight,
{
    /// Builds a graph over the fixed node space `0..capacity`.
    ///
    /// Every node in range exists even without edges. An edge with an endpoint
    /// outside the range is logged, kept in `rejected_edges`, and skipped.
    pub fn indexed<I, E>(capacity: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge<usize, W>>,
    {
        let mut graph = Self::empty();
        for node in 0..capacity {
            graph.register(node);
        }

        for edge in edges {
            let edge = edge.into();
            let out_of_range = [edge.src, edge.dest]
                .into_iter()
                .find(|&node| node >= capacity);

            if let Some(node) = out_of_range {
                let err = Error::NodeOutOfRange { node, capacity };
                log::warn!(
                    "Skipping edge ({}, {}, {:?}): {}",
                    edge.src,
                    edge.dest,
                    edge.weight,
                    err
                );
                graph.rejected_edges.push(edge);
                continue;
            }

            graph.insert_edge(edge);
        }

        log::debug!(
            "Built indexed graph with capacity {}, {} edges, {} rejected",
            capacity,
            graph.edge_count(),
            graph.rejected_edges.len()
        );
        graph
    }
}

impl<N, W> Graph<N, W> for UndirectedGraph<N, W>
where
    N: NodeLabel,
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    fn label(&self, vertex: usize) -> Option<&N> {
        self.labels.get(vertex)
    }
}

impl<N, W> Display for UndirectedGraph<N, W>
where
    N: NodeLabel + Display,
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, edges) in self.labels.iter().zip(&self.adjacency) {
            write!(f, "{} -->", label)?;
            for &(neighbor, weight) in edges {
                write!(f, " ({}, {})", self.labels[neighbor], weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
