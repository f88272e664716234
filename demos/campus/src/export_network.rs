//! Export the built-in campus network as a loadable JSON dataset.
//!
//! Writes `output/campus/network.json` in the format read by
//! `wf_spatial::load_network_json`, so the file can be fed straight back
//! into `campus`.
//!
//! Run with: `cargo run -p campus --bin export_network`

mod network;

use std::fs;

use anyhow::Result;
use serde_json::json;

use network::build_network;

fn main() -> Result<()> {
    let (net, _nodes) = build_network()?;

    fs::create_dir_all("output/campus")?;

    let nodes: Vec<serde_json::Value> = net
        .node_pos
        .iter()
        .zip(&net.node_name)
        .map(|(pos, name)| json!({ "lat": pos.lat, "lng": pos.lon, "name": name }))
        .collect();

    let edges: Vec<serde_json::Value> = net
        .edges
        .iter()
        .map(|e| json!({ "from": e.from, "to": e.to, "coords": e.geometry }))
        .collect();

    let dataset = json!({ "nodes": nodes, "edges": edges });
    fs::write("output/campus/network.json", serde_json::to_string_pretty(&dataset)?)?;
    println!(
        "Wrote output/campus/network.json ({} nodes, {} edges)",
        nodes.len(),
        edges.len()
    );

    Ok(())
}
