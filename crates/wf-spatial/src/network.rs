//! Static path network and its builder.
//!
//! # Data layout
//!
//! Nodes are stored positionally: `NodeId(i)` is `node_pos[i]`.  Edges are
//! undirected and kept in input order, each with its physical polyline and
//! the cached geodesic length of that polyline.  Input order matters:
//! snapping resolves equidistant edges in favour of the first one listed.
//!
//! A built `PathNetwork` is never mutated.  Route queries borrow it and do
//! their own per-query augmentation (see [`crate::snap`]), so one network
//! can serve any number of concurrent queries.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest `NodeId`, for
//! transport layers that resolve a destination from a coordinate.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;
use tracing::debug;

use wf_core::{geodesic_length, EdgeId, GeoPoint, NetworkConfig, NodeId};

use crate::adjacency::WeightedEdge;
use crate::{SpatialError, SpatialResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Node position in a local plane: `[lat, lon * kx]`, where `kx` is the
/// cosine of the network's mean latitude.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 2],
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in the scaled plane.  Ranks nodes like
    /// ground distance as long as the network spans a small latitude band.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// An undirected walkway between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Physical shape, running from `from` to `to`.  Never empty; the first
    /// and last vertices equal the node coordinates exactly (except for a
    /// degenerate single-point polyline).
    pub geometry: Vec<GeoPoint>,
    /// Geodesic length of `geometry` in metres.
    pub length_m: f64,
}

// ── PathNetwork ───────────────────────────────────────────────────────────────

/// Immutable walking network: positional nodes, undirected polyline edges,
/// an undirected edge lookup and a node R-tree.
///
/// Do not construct directly; use [`PathNetworkBuilder`] or the loaders in
/// [`crate::loader`].
#[derive(Debug)]
pub struct PathNetwork {
    /// Position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,
    /// Optional display label of each node.  Indexed by `NodeId`.
    pub node_name: Vec<Option<String>>,
    /// Edges in input order.  Indexed by `EdgeId`.
    pub edges: Vec<Edge>,

    /// `(min(u, v), max(u, v))` → connecting edge.  With parallel edges the
    /// shortest wins, the first listed on equal length.
    edge_lookup: FxHashMap<(NodeId, NodeId), EdgeId>,
    spatial_idx: RTree<NodeEntry>,
    /// Longitude scale of the R-tree plane.
    kx: f64,
}

impl PathNetwork {
    /// A network with no nodes or edges.  Every route query against it
    /// returns `None`.
    pub fn empty() -> Self {
        PathNetworkBuilder::new().build()
    }

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node_name.get(id.index())?.as_deref()
    }

    /// The edge connecting `u` and `v` in either stored direction.
    pub fn edge_between(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        self.edge_lookup.get(&undirected_key(u, v)).copied()
    }

    /// `(from, to, length_m)` of every static edge, in input order.
    pub fn weighted_edges(&self) -> Vec<WeightedEdge> {
        self.edges
            .iter()
            .map(|e| WeightedEdge { from: e.from, to: e.to, weight_m: e.length_m })
            .collect()
    }

    /// The node closest to `pos`, or `None` if the network has no nodes.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon * self.kx])
            .map(|e| e.id)
    }
}

#[inline]
fn undirected_key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
    if u <= v { (u, v) } else { (v, u) }
}

// ── PathNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`PathNetwork`] incrementally, then call [`build`](Self::build).
///
/// Nodes must be added before the edges that reference them.  Edge
/// validation happens in [`add_edge`](Self::add_edge), so a corrupt dataset
/// aborts construction at the first bad edge.
///
/// # Example
///
/// ```
/// use wf_core::GeoPoint;
/// use wf_spatial::PathNetworkBuilder;
///
/// let mut b = PathNetworkBuilder::new();
/// let lobby = b.add_named_node(GeoPoint::new(51.5226, -0.1302), "Lobby");
/// let lab   = b.add_node(GeoPoint::new(51.5230, -0.1302));
/// b.add_straight_edge(lobby, lab).unwrap();
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.edge_count(), 1);
/// ```
pub struct PathNetworkBuilder {
    config: NetworkConfig,
    nodes:  Vec<GeoPoint>,
    names:  Vec<Option<String>>,
    edges:  Vec<Edge>,
}

impl PathNetworkBuilder {
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self { config, nodes: Vec::new(), names: Vec::new(), edges: Vec::new() }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: GeoPoint) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(pos);
        self.names.push(None);
        id
    }

    pub fn add_named_node(&mut self, pos: GeoPoint, name: impl Into<String>) -> NodeId {
        let id = self.add_node(pos);
        self.names[id.index()] = Some(name.into());
        id
    }

    /// Add an undirected edge whose shape runs from `from` to `to`.
    ///
    /// An empty `geometry` becomes the straight segment between the two
    /// nodes.  Polyline endpoints within `endpoint_tolerance_m` of their
    /// nodes are pinned to the node coordinates, and repeated consecutive
    /// vertices are dropped.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NodeNotFound`] if either node does not exist,
    /// [`SpatialError::EndpointMismatch`] if a polyline endpoint is further
    /// than the tolerance from its node.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        mut geometry: Vec<GeoPoint>,
    ) -> SpatialResult<EdgeId> {
        let from_pos = *self.nodes.get(from.index()).ok_or(SpatialError::NodeNotFound(from))?;
        let to_pos   = *self.nodes.get(to.index()).ok_or(SpatialError::NodeNotFound(to))?;
        let edge = self.edges.len();

        if geometry.is_empty() {
            geometry = vec![from_pos, to_pos];
        } else if geometry.len() > 1 {
            let last = geometry.len() - 1;
            self.pin_endpoint(edge, &mut geometry[0], from, from_pos)?;
            self.pin_endpoint(edge, &mut geometry[last], to, to_pos)?;
        }
        geometry.dedup();

        let length_m = geodesic_length(&geometry);
        self.edges.push(Edge { from, to, geometry, length_m });
        Ok(EdgeId::from_index(edge))
    }

    /// Convenience: an edge drawn as the straight segment between its nodes.
    pub fn add_straight_edge(&mut self, from: NodeId, to: NodeId) -> SpatialResult<EdgeId> {
        self.add_edge(from, to, Vec::new())
    }

    fn pin_endpoint(
        &self,
        edge: usize,
        vertex: &mut GeoPoint,
        node: NodeId,
        node_pos: GeoPoint,
    ) -> SpatialResult<()> {
        if *vertex == node_pos {
            return Ok(());
        }
        let offset_m = vertex.distance_m(node_pos);
        if offset_m > self.config.endpoint_tolerance_m {
            return Err(SpatialError::EndpointMismatch { edge, node, offset_m });
        }
        debug!(edge, %node, offset_m, "pinning polyline endpoint to node");
        *vertex = node_pos;
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce a [`PathNetwork`].
    pub fn build(self) -> PathNetwork {
        let mut edge_lookup: FxHashMap<(NodeId, NodeId), EdgeId> =
            FxHashMap::with_capacity_and_hasher(self.edges.len(), Default::default());
        for (i, e) in self.edges.iter().enumerate() {
            let id = EdgeId::from_index(i);
            edge_lookup
                .entry(undirected_key(e.from, e.to))
                .and_modify(|best| {
                    if e.length_m < self.edges[best.index()].length_m {
                        *best = id;
                    }
                })
                .or_insert(id);
        }

        let kx = if self.nodes.is_empty() {
            1.0
        } else {
            let mean_lat = self.nodes.iter().fold(0.0, |acc, p| acc + p.lat) / self.nodes.len() as f64;
            mean_lat.to_radians().cos()
        };
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry { point: [pos.lat, pos.lon * kx], id: NodeId::from_index(i) })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        PathNetwork {
            node_pos: self.nodes,
            node_name: self.names,
            edges: self.edges,
            edge_lookup,
            spatial_idx,
            kx,
        }
    }
}

impl Default for PathNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
