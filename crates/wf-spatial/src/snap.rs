//! Snapping a free position onto the network, and per-query augmentation.
//!
//! A route query starts from an arbitrary coordinate.  [`snap_to_network`]
//! finds the closest point on any edge; [`augment_graph`] then adds a
//! virtual node at that point, wired to both ends of the snapped edge with
//! the partial distances as weights.  The virtual node takes index
//! `node_count()` and lives only in the returned [`AugmentedGraph`]; the
//! `PathNetwork` itself is only borrowed.

use tracing::debug;

use wf_core::{geodesic_length, nearest_point_on_polyline, slice_between, EdgeId, GeoPoint, NodeId, PolylinePosition};

use crate::adjacency::{Adjacency, WeightedEdge};
use crate::network::PathNetwork;
use crate::SpatialResult;

// ── Snap ──────────────────────────────────────────────────────────────────────

/// Where a query point landed on the network.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapResult {
    /// The closest edge.
    pub edge: EdgeId,
    /// The closest point on that edge's polyline.  `position.distance_m` is
    /// the distance from the query point.
    pub position: PolylinePosition,
    /// Along-edge distance from the snap point back to `edge.from`.
    pub dist_to_from_m: f64,
    /// Along-edge distance from the snap point on to `edge.to`.
    pub dist_to_to_m: f64,
}

impl SnapResult {
    #[inline]
    pub fn point(&self) -> GeoPoint {
        self.position.point
    }
}

/// Project `point` onto the closest edge of `network`.
///
/// Edges are tried in input order and only a strictly closer edge replaces
/// the current best, so the first-listed edge wins ties.  Returns `None`
/// when the network has no edges.
pub fn snap_to_network(network: &PathNetwork, point: GeoPoint) -> Option<SnapResult> {
    let mut best: Option<(EdgeId, PolylinePosition)> = None;
    for (i, edge) in network.edges.iter().enumerate() {
        let Some(pos) = nearest_point_on_polyline(&edge.geometry, point) else {
            continue;
        };
        if best.is_none_or(|(_, b)| pos.distance_m < b.distance_m) {
            best = Some((EdgeId::from_index(i), pos));
        }
    }

    let (edge_id, position) = best?;
    let geometry = &network.edge(edge_id).geometry;
    let start = PolylinePosition::start(geometry)?;
    let end = PolylinePosition::end(geometry)?;

    let snap = SnapResult {
        edge: edge_id,
        position,
        dist_to_from_m: geodesic_length(&slice_between(geometry, &start, &position)),
        dist_to_to_m: geodesic_length(&slice_between(geometry, &position, &end)),
    };
    debug!(
        %point,
        edge = %snap.edge,
        snapped = %snap.point(),
        offset_m = position.distance_m,
        dist_to_from_m = snap.dist_to_from_m,
        dist_to_to_m = snap.dist_to_to_m,
        "snapped query point"
    );
    Some(snap)
}

// ── Augment ───────────────────────────────────────────────────────────────────

/// A query-scoped copy of the network's graph with one extra virtual node.
#[derive(Clone, Debug)]
pub struct AugmentedGraph {
    /// Static node positions followed by the virtual node's position.
    pub node_pos: Vec<GeoPoint>,
    /// Static edges followed by the two virtual edges.
    pub edges: Vec<WeightedEdge>,
    /// Index of the virtual node (the static node count).
    pub virtual_node: NodeId,
}

impl AugmentedGraph {
    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn adjacency(&self) -> SpatialResult<Adjacency> {
        Adjacency::build(self.node_count(), &self.edges)
    }
}

/// Copy the network's nodes and edge weights and append the virtual node
/// plus its two edges: `(virtual, from, dist_to_from_m)` then
/// `(virtual, to, dist_to_to_m)`.
///
/// The virtual edges have no geometry of their own; reconstruction slices
/// the snapped edge's polyline instead.
pub fn augment_graph(network: &PathNetwork, snap: &SnapResult) -> AugmentedGraph {
    let virtual_node = NodeId::from_index(network.node_count());
    let snapped = network.edge(snap.edge);

    let mut node_pos = Vec::with_capacity(network.node_count() + 1);
    node_pos.extend_from_slice(&network.node_pos);
    node_pos.push(snap.point());

    let mut edges = network.weighted_edges();
    edges.push(WeightedEdge { from: virtual_node, to: snapped.from, weight_m: snap.dist_to_from_m });
    edges.push(WeightedEdge { from: virtual_node, to: snapped.to, weight_m: snap.dist_to_to_m });

    AugmentedGraph { node_pos, edges, virtual_node }
}
