//! Reachability orderings: depth-first and breadth-first.
//!
//! Both traversals keep their visited set local to the call, so they can run
//! concurrently against the same graph.

use std::collections::VecDeque;

use crate::algorithm::traits::{label_of, resolve_start, TraversalAlgorithm};
use crate::graph::{Graph, NodeLabel, Weight};
use crate::Result;

/// Stack-based depth-first traversal.
///
/// The start node is pushed; each popped node that is not yet visited is
/// marked, emitted, and has its neighbors pushed in adjacency order. Nodes
/// already visited when popped are skipped. Because the visited check happens
/// on pop rather than on push, the order can differ from textbook recursive
/// pre-order DFS whenever a node is pushed several times before being popped.
#[derive(Debug, Default)]
pub struct DepthFirst;

impl DepthFirst {
    pub fn new() -> Self {
        DepthFirst
    }
}

impl<N, W, G> TraversalAlgorithm<N, W, G> for DepthFirst
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "DepthFirst"
    }

    fn traverse(&self, graph: &G, start: &N) -> Result<Vec<N>> {
        let start = resolve_start::<N, W, G>(graph, start)?;

        let mut visited = vec![false; graph.vertex_count()];
        let mut stack = vec![start];
        let mut order = Vec::new();

        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            order.push(label_of::<N, W, G>(graph, v)?);
            stack.extend(graph.neighbors(v).map(|(u, _)| u).filter(|&u| !visited[u]));
        }

        log::debug!("DepthFirst reached {} nodes", order.len());
        Ok(order)
    }
}

/// Queue-based breadth-first traversal.
///
/// Nodes are marked visited when enqueued, so none is enqueued twice and the
/// output is grouped by hop distance from the start.
#[derive(Debug, Default)]
pub struct BreadthFirst;

impl BreadthFirst {
    pub fn new() -> Self {
        BreadthFirst
    }
}

impl<N, W, G> TraversalAlgorithm<N, W, G> for BreadthFirst
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "BreadthFirst"
    }

    fn traverse(&self, graph: &G, start: &N) -> Result<Vec<N>> {
        let start = resolve_start::<N, W, G>(graph, start)?;

        let mut visited = vec![false; graph.vertex_count()];
        let mut queue = VecDeque::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.push_back(start);

        while let Some(v) = queue.pop_front() {
            order.push(label_of::<N, W, G>(graph, v)?);

            for (u, _) in graph.neighbors(v) {
                if !visited[u] {
                    visited[u] = true;
                    queue.push_back(u);
                }
            }
        }

        log::debug!("BreadthFirst reached {} nodes", order.len());
        Ok(order)
    }
}
