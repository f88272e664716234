//! Shortest-path search over an [`Adjacency`].
//!
//! # Pluggability
//!
//! Route queries call the search through the [`PathSearch`] trait, so a
//! caller can swap in another algorithm without touching snapping or
//! reconstruction.  The default [`DijkstraSearch`] is plenty for networks
//! of building or campus size.
//!
//! # Determinism
//!
//! The frontier is a min-heap keyed by `(cost, NodeId)`.  Stale entries are
//! skipped, so every pop selects exactly the node a linear scan would: the
//! unvisited node with the smallest distance, lowest index on equal
//! distance.  The search stops when the goal is *popped*, not when it is
//! first relaxed.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use wf_core::NodeId;

use crate::adjacency::Adjacency;

// ── PathSearch trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so one instance can serve queries
/// from many transport connections at once.
pub trait PathSearch: Send + Sync {
    /// Node sequence from `start` to `goal`, both included.
    ///
    /// Returns `None` if `goal` is unreachable or either node is outside the
    /// graph.  `start == goal` yields `Some(vec![start])`.
    fn shortest_path(&self, adjacency: &Adjacency, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>>;
}

// ── DijkstraSearch ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm with deterministic tie-breaking by node index.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraSearch;

impl PathSearch for DijkstraSearch {
    fn shortest_path(&self, adjacency: &Adjacency, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
        dijkstra(adjacency, start, goal)
    }
}

/// Total order over non-NaN metre costs.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f64);

impl Eq for Cost {}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra(adjacency: &Adjacency, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let n = adjacency.node_count();
    if start.index() >= n || goal.index() >= n {
        return None;
    }

    let mut dist    = vec![f64::INFINITY; n];
    let mut prev    = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];

    dist[start.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), start)));

    let mut reached = false;
    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        // Stale entry: superseded by a cheaper push, or already settled.
        if visited[node.index()] || cost > dist[node.index()] {
            continue;
        }
        if node == goal {
            reached = true;
            break;
        }
        visited[node.index()] = true;

        for &(neighbor, weight) in adjacency.neighbors(node) {
            let alt = cost + weight;
            if alt < dist[neighbor.index()] {
                dist[neighbor.index()] = alt;
                prev[neighbor.index()] = node;
                heap.push(Reverse((Cost(alt), neighbor)));
            }
        }
    }

    if !reached {
        return None;
    }
    reconstruct(&prev, start, goal)
}

fn reconstruct(prev: &[NodeId], start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let mut path = vec![goal];
    let mut cur = goal;
    while prev[cur.index()] != NodeId::INVALID {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    (path[0] == start).then_some(path)
}
