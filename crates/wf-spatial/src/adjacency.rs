//! Symmetric adjacency lists with precomputed edge weights.

use wf_core::NodeId;

use crate::{SpatialError, SpatialResult};

/// An undirected edge reduced to what the search needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight_m: f64,
}

/// Per-node `(neighbor, weight)` lists.
///
/// Each undirected edge appears twice, once from each end.  Entries keep
/// the order of the input edge list, which fixes the relaxation order of
/// the search and so its tie behaviour.
#[derive(Clone, Debug, Default)]
pub struct Adjacency {
    lists: Vec<Vec<(NodeId, f64)>>,
}

impl Adjacency {
    /// Build from `edges` over nodes `0..node_count`.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NodeNotFound`] if an edge names a node outside
    /// `0..node_count`.  No partial adjacency is returned.
    pub fn build(node_count: usize, edges: &[WeightedEdge]) -> SpatialResult<Self> {
        let mut lists = vec![Vec::new(); node_count];
        for e in edges {
            for n in [e.from, e.to] {
                if n.index() >= node_count {
                    return Err(SpatialError::NodeNotFound(n));
                }
            }
            lists[e.from.index()].push((e.to, e.weight_m));
            lists[e.to.index()].push((e.from, e.weight_m));
        }
        Ok(Self { lists })
    }

    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Neighbours of `node` with edge weights; empty for unknown nodes.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, f64)] {
        match self.lists.get(node.index()) {
            Some(list) => list,
            None => &[],
        }
    }
}
