//! Weighted Graph - undirected weighted graph analysis engine
//!
//! Builds an adjacency structure from a caller-supplied edge list and answers
//! four classes of query against it: depth-first order, breadth-first order,
//! single-source shortest distances (Dijkstra) and minimum spanning trees (Prim).
//!
//! Nodes are keyed by any hashable, ordered label type (small integers, strings)
//! and mapped to dense internal indices. The graph is immutable after
//! construction, so queries are independent and may run concurrently.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    prim::Prim,
    traversal::{BreadthFirst, DepthFirst},
    ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm, SpanningTreeResult,
    TraversalAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{Edge, NodeLabel, UndirectedGraph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),

    #[error("Node {node} out of range for graph with capacity {capacity}")]
    NodeOutOfRange { node: usize, capacity: usize },

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
