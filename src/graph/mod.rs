pub mod traits;
pub mod undirected;
pub mod generators;

pub use traits::{Graph, NodeLabel, Weight};
pub use undirected::{Edge, UndirectedGraph};
