//! Point-to-node route queries.
//!
//! [`route_from_point`] is the one entry point a transport layer needs:
//!
//! ```text
//! query point ─► snap_to_network ─► augment_graph ─► Adjacency::build
//!             ─► PathSearch::shortest_path ─► reconstruct ─► RouteResult
//! ```
//!
//! "No route" is `None`, never an error.  The transport layer decides how
//! to report it to its client.

use serde::Serialize;
use tracing::{debug, error, warn};

use wf_core::{append_leg, slice_between, GeoPoint, NodeId, PolylinePosition};

use crate::network::PathNetwork;
use crate::search::{DijkstraSearch, PathSearch};
use crate::snap::{augment_graph, snap_to_network, SnapResult};

// ── RouteResult ───────────────────────────────────────────────────────────────

/// A walking route from a snapped position to a destination node.
///
/// Serializes as `{ path, snappedAt, routeCoords, distanceM }` with
/// coordinates as `[lat, lon]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    /// Virtual node first, destination last.
    pub path: Vec<NodeId>,
    /// Where the query point landed on the network.
    pub snapped_at: GeoPoint,
    /// Stitched polyline from `snapped_at` to the destination, without
    /// repeated junction vertices.
    pub route_coords: Vec<GeoPoint>,
    /// Walking distance along `path` in metres.
    pub distance_m: f64,
}

// ── Queries ───────────────────────────────────────────────────────────────────

/// Shortest walking route from `point` to `destination` using Dijkstra.
///
/// `destination` is not validated: an index outside the network simply has
/// no route.
pub fn route_from_point(network: &PathNetwork, point: GeoPoint, destination: NodeId) -> Option<RouteResult> {
    route_from_point_with(network, &DijkstraSearch, point, destination)
}

/// Like [`route_from_point`] with a caller-supplied search.
pub fn route_from_point_with<S>(
    network: &PathNetwork,
    search: &S,
    point: GeoPoint,
    destination: NodeId,
) -> Option<RouteResult>
where
    S: PathSearch + ?Sized,
{
    let Some(snap) = snap_to_network(network, point) else {
        warn!(%point, "network has no edges to snap to");
        return None;
    };

    let graph = augment_graph(network, &snap);
    let adjacency = graph
        .adjacency()
        .inspect_err(|e| error!(error = %e, "augmented graph references a missing node"))
        .ok()?;

    let Some(path) = search.shortest_path(&adjacency, graph.virtual_node, destination) else {
        debug!(%point, %destination, "destination unreachable from snapped position");
        return None;
    };

    let route = reconstruct(network, &snap, path)?;
    debug!(
        %destination,
        hops = route.path.len() - 1,
        vertices = route.route_coords.len(),
        distance_m = route.distance_m,
        "route found"
    );
    Some(route)
}

/// Route every `(point, destination)` pair on the Rayon pool.
///
/// Results are in input order.
#[cfg(feature = "parallel")]
pub fn route_batch(network: &PathNetwork, queries: &[(GeoPoint, NodeId)]) -> Vec<Option<RouteResult>> {
    use rayon::prelude::*;

    queries
        .par_iter()
        .map(|&(point, destination)| route_from_point(network, point, destination))
        .collect()
}

// ── Reconstruction ────────────────────────────────────────────────────────────

/// Turn a search path (virtual node first) into a stitched polyline.
///
/// The first leg is the part of the snapped edge between the snap point and
/// `path[1]`, oriented in the direction of travel.  Every later hop appends
/// the stored polyline of the static edge between the two nodes, reversed
/// when the edge is stored the other way round.
pub fn reconstruct(network: &PathNetwork, snap: &SnapResult, path: Vec<NodeId>) -> Option<RouteResult> {
    if path.len() < 2 {
        return None;
    }

    let snapped = network.edge(snap.edge);
    let geometry = &snapped.geometry;
    let first_hop = path[1];
    debug_assert!(first_hop == snapped.from || first_hop == snapped.to);

    // On a loop edge both virtual edges reach the same node; the search kept
    // the lighter one, the `from` side on equal weight.
    let toward_to = if snapped.from == snapped.to {
        snap.dist_to_to_m < snap.dist_to_from_m
    } else {
        first_hop == snapped.to
    };
    let (target, first_leg_m) = if toward_to {
        (PolylinePosition::end(geometry)?, snap.dist_to_to_m)
    } else {
        (PolylinePosition::start(geometry)?, snap.dist_to_from_m)
    };

    let mut route_coords = slice_between(geometry, &snap.position, &target);
    let mut distance_m = first_leg_m;

    for hop in path[1..].windows(2) {
        let (u, v) = (hop[0], hop[1]);
        let Some(id) = network.edge_between(u, v) else {
            warn!(%u, %v, "search path uses a hop with no static edge");
            return None;
        };
        let edge = network.edge(id);
        distance_m += edge.length_m;

        if edge.from == u {
            append_leg(&mut route_coords, &edge.geometry);
        } else {
            let reversed: Vec<GeoPoint> = edge.geometry.iter().rev().copied().collect();
            append_leg(&mut route_coords, &reversed);
        }
    }

    Some(RouteResult { path, snapped_at: snap.point(), route_coords, distance_m })
}
