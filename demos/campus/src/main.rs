//! campus: walking-route queries over a campus path network.
//!
//! ```text
//! campus                              # built-in network, demo kiosk queries
//! campus network.json                 # loaded network, node 0 → every node
//! campus network.json LAT LNG DEST    # loaded network, one query
//! ```
//!
//! Each result is printed as the JSON payload a transport layer would send
//! (`null` when there is no route).  Log level comes from `RUST_LOG`
//! (default `info`).

mod network;

use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wf_core::{GeoPoint, NodeId};
use wf_spatial::{load_network_json, route_batch, route_from_point, PathNetwork};

use network::build_network;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Kiosk positions on the built-in campus, paired with destinations.
fn demo_queries(nodes: &[NodeId; 7]) -> Vec<(GeoPoint, NodeId)> {
    let [main_gate, _, lecture_hall, lab, _, sports_hall, north_gate] = *nodes;
    vec![
        // Standing just off the main-gate path, heading for the lab.
        (GeoPoint::new(51.52230, -0.13405), lab),
        // By the fountain, heading for the sports hall.
        (GeoPoint::new(51.52280, -0.13350), sports_hall),
        // Outside the cafe, heading for the north gate.
        (GeoPoint::new(51.52195, -0.13320), north_gate),
        // Next to the lecture hall, heading back out.
        (GeoPoint::new(51.52262, -0.13302), main_gate),
        // Already at the lecture hall.
        (GeoPoint::new(51.52260, -0.13300), lecture_hall),
    ]
}

fn print_route(network: &PathNetwork, point: GeoPoint, dest: NodeId, payload: &serde_json::Value) {
    let label = network.node_name(dest).unwrap_or("unnamed");
    println!("{point} → {dest} ({label}):");
    println!("{payload}");
    println!();
}

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. Network: loaded dataset or the built-in campus.
    let (network, queries) = match args.as_slice() {
        [] => {
            let (network, nodes) = build_network()?;
            let queries = demo_queries(&nodes);
            (network, queries)
        }
        [path] => {
            let network = load_network_json(Path::new(path))
                .with_context(|| format!("loading {path}"))?;
            let Some(&origin) = network.node_pos.first() else {
                bail!("{path} has no nodes");
            };
            let queries = (1..network.node_count())
                .map(|i| (origin, NodeId::from_index(i)))
                .collect();
            (network, queries)
        }
        [path, lat, lng, dest] => {
            let network = load_network_json(Path::new(path))
                .with_context(|| format!("loading {path}"))?;
            let point = GeoPoint::new(lat.parse().context("LAT")?, lng.parse().context("LNG")?);
            let dest = NodeId::from_index(dest.parse().context("DEST")?);
            (network, vec![(point, dest)])
        }
        _ => bail!("usage: campus [DATASET.json [LAT LNG DEST]]"),
    };
    info!(nodes = network.node_count(), edges = network.edge_count(), "path network ready");

    // 2. Single queries, one at a time.
    let t0 = Instant::now();
    for &(point, dest) in &queries {
        let route = route_from_point(&network, point, dest);
        if route.is_none() {
            warn!(%point, %dest, "no route");
        }
        print_route(&network, point, dest, &serde_json::to_value(&route)?);
    }
    info!(queries = queries.len(), elapsed_ms = t0.elapsed().as_secs_f64() * 1e3, "sequential queries done");

    // 3. The same queries as one parallel batch; results must not differ.
    let t0 = Instant::now();
    let batch = route_batch(&network, &queries);
    let identical = batch
        .iter()
        .zip(&queries)
        .all(|(r, &(point, dest))| *r == route_from_point(&network, point, dest));
    info!(
        queries = batch.len(),
        elapsed_ms = t0.elapsed().as_secs_f64() * 1e3,
        identical,
        "parallel batch done"
    );
    if !identical {
        bail!("parallel batch disagrees with sequential queries");
    }

    Ok(())
}
