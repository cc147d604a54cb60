use std::collections::BTreeMap;

use crate::algorithm::traits::{label_of, resolve_start};
use crate::algorithm::{SpanningTreeAlgorithm, SpanningTreeResult};
use crate::data_structures::LazyMinHeap;
use crate::graph::{Graph, NodeLabel, Weight};
use crate::{Error, Result};

/// Prim's minimum spanning tree algorithm with a lazily-pruned priority queue
///
/// Only the connected component of the root is spanned; nodes in other
/// components are left out of the result rather than reported as errors.
/// Ties between equal keys are broken in favour of the entry pushed first.
#[derive(Debug, Default)]
pub struct Prim;

impl Prim {
    pub fn new() -> Self {
        Prim
    }
}

impl<N, W, G> SpanningTreeAlgorithm<N, W, G> for Prim
where
    N: NodeLabel,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Prim"
    }

    fn compute_spanning_tree(&self, graph: &G, root: &N) -> Result<SpanningTreeResult<N, W>> {
        let root_id = resolve_start::<N, W, G>(graph, root)?;
        let n = graph.vertex_count();

        // key[v]: lightest known edge connecting v to the tree, None while unknown
        let mut key: Vec<Option<W>> = vec![None; n];
        let mut in_tree = vec![false; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];

        key[root_id] = Some(W::zero());

        let mut queue = LazyMinHeap::with_capacity(n);
        queue.push(root_id, W::zero());

        while let Some((u, _)) = queue.pop() {
            if in_tree[u] {
                continue;
            }
            in_tree[u] = true;

            for (v, weight) in graph.neighbors(u) {
                if in_tree[v] {
                    continue;
                }

                let improves = match key[v] {
                    None => true,
                    Some(current) => weight < current,
                };

                if improves {
                    key[v] = Some(weight);
                    parent[v] = Some(u);
                    queue.push(v, weight);
                }
            }
        }

        let mut parents = BTreeMap::new();
        let mut weights = BTreeMap::new();
        let mut total_weight = W::zero();

        for v in 0..n {
            if let (Some(p), Some(weight)) = (parent[v], key[v]) {
                let child = label_of::<N, W, G>(graph, v)?;
                parents.insert(child.clone(), label_of::<N, W, G>(graph, p)?);
                weights.insert(child, weight);
                total_weight = total_weight.checked_sum(weight).ok_or_else(|| {
                    Error::AlgorithmError(format!(
                        "Spanning tree weight overflows {}",
                        std::any::type_name::<W>()
                    ))
                })?;
            }
        }

        log::debug!(
            "Prim from {:?}: {} tree edges, total weight {:?}",
            root,
            parents.len(),
            total_weight
        );

        Ok(SpanningTreeResult {
            root: root.clone(),
            parents,
            weights,
            total_weight,
        })
    }
}
