use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Bound for node labels: anything hashable and ordered (integers, strings, ...)
pub trait NodeLabel: Clone + Eq + Hash + Ord + Debug {}

impl<T> NodeLabel for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Bound for edge weights.
///
/// Weights must be non-negative for the shortest path algorithm to be correct.
/// This is a precondition of the caller and is not checked at runtime.
pub trait Weight: Copy + Ord + Zero + Debug {
    /// Adds two weights, returning `None` when the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for OrderedFloat<$t> {
                // Finite operands summing to infinity overflowed
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.is_infinite() && self.is_finite() && other.is_finite() {
                        None
                    } else {
                        Some(sum)
                    }
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a weighted undirected graph over dense vertex indices
///
/// Implementors keep a registry mapping external labels to indices in
/// `0..vertex_count()`; algorithms work on indices and translate back to
/// labels only when building their results.
pub trait Graph<N, W>: Debug
where
    N: NodeLabel,
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the (neighbor, weight) pairs of a vertex, in insertion order
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Looks up the dense index of a label
    fn index_of(&self, node: &N) -> Option<usize>;

    /// Looks up the label of a dense index
    fn label(&self, vertex: usize) -> Option<&N>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the lightest edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.neighbors(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
