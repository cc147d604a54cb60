pub mod traits;
pub mod traversal;
pub mod dijkstra;
pub mod prim;

pub use traits::{
    ShortestPathAlgorithm, ShortestPathResult, SpanningTreeAlgorithm, SpanningTreeResult,
    TraversalAlgorithm,
};
