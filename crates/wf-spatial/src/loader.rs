//! JSON path-network loader.
//!
//! # Format
//!
//! ```json
//! {
//!   "nodes": [
//!     { "lat": 51.52260, "lng": -0.13020, "name": "Main entrance" },
//!     { "lat": 51.52300, "lng": -0.13020 }
//!   ],
//!   "edges": [
//!     { "from": 0, "to": 1, "coords": [[51.52260, -0.13020], [51.52300, -0.13020]] }
//!   ]
//! }
//! ```
//!
//! Node identity is the position in `nodes`.  `name` is optional (display
//! only), and so is `coords`: an edge without it is drawn straight.  `lon`
//! is accepted in place of `lng`.
//!
//! Loading fails on the first integrity problem (see
//! [`PathNetworkBuilder::add_edge`]) rather than producing a partial network.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use wf_core::{GeoPoint, NetworkConfig, NodeId};

use crate::network::{PathNetwork, PathNetworkBuilder};
use crate::{SpatialError, SpatialResult};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct NetworkRecord {
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Deserialize)]
struct NodeRecord {
    lat:  f64,
    #[serde(alias = "lon")]
    lng:  f64,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct EdgeRecord {
    from:   u32,
    to:     u32,
    #[serde(default)]
    coords: Vec<GeoPoint>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`PathNetwork`] from a JSON file with the default [`NetworkConfig`].
pub fn load_network_json(path: &Path) -> SpatialResult<PathNetwork> {
    load_network_json_with(path, &NetworkConfig::default())
}

pub fn load_network_json_with(path: &Path, config: &NetworkConfig) -> SpatialResult<PathNetwork> {
    let file = std::fs::File::open(path)?;
    let network = load_network_reader_with(std::io::BufReader::new(file), config)?;
    info!(
        path = %path.display(),
        nodes = network.node_count(),
        edges = network.edge_count(),
        "loaded path network"
    );
    Ok(network)
}

/// Like [`load_network_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for datasets fetched
/// over the network.
pub fn load_network_reader<R: Read>(reader: R) -> SpatialResult<PathNetwork> {
    load_network_reader_with(reader, &NetworkConfig::default())
}

pub fn load_network_reader_with<R: Read>(reader: R, config: &NetworkConfig) -> SpatialResult<PathNetwork> {
    let record: NetworkRecord = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            SpatialError::Io(e.into())
        } else {
            SpatialError::Parse(e.to_string())
        }
    })?;

    let mut b = PathNetworkBuilder::with_config(config.clone());
    for n in record.nodes {
        let pos = GeoPoint::new(n.lat, n.lng);
        match n.name {
            Some(name) => b.add_named_node(pos, name),
            None => b.add_node(pos),
        };
    }
    for e in record.edges {
        b.add_edge(NodeId(e.from), NodeId(e.to), e.coords)?;
    }
    Ok(b.build())
}
