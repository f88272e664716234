//! Built-in campus walking network.
//!
//! A 7-node synthetic quad with a few bent walkways.  Both `campus` (the
//! query demo) and `export_network` (the dataset writer) call this.

use wf_core::{GeoPoint, NodeId};
use wf_spatial::{PathNetwork, PathNetworkBuilder, SpatialResult};

/// Build the campus network.
///
/// Returns `(network, [main_gate, library, lecture_hall, lab, cafe,
/// sports_hall, north_gate])`.
pub fn build_network() -> SpatialResult<(PathNetwork, [NodeId; 7])> {
    let mut b = PathNetworkBuilder::new();

    let main_gate    = b.add_named_node(GeoPoint::new(51.52200, -0.13400), "Main gate");
    let library      = b.add_named_node(GeoPoint::new(51.52260, -0.13400), "Library");
    let lecture_hall = b.add_named_node(GeoPoint::new(51.52260, -0.13300), "Lecture hall");
    let lab          = b.add_named_node(GeoPoint::new(51.52320, -0.13300), "Lab");
    let cafe         = b.add_named_node(GeoPoint::new(51.52200, -0.13300), "Cafe");
    let sports_hall  = b.add_named_node(GeoPoint::new(51.52320, -0.13200), "Sports hall");
    let north_gate   = b.add_named_node(GeoPoint::new(51.52360, -0.13400), "North gate");

    b.add_straight_edge(main_gate, library)?;
    b.add_straight_edge(main_gate, cafe)?;
    b.add_straight_edge(cafe, lecture_hall)?;
    // Path around the fountain.
    b.add_edge(library, lecture_hall, vec![
        GeoPoint::new(51.52260, -0.13400),
        GeoPoint::new(51.52275, -0.13370),
        GeoPoint::new(51.52275, -0.13330),
        GeoPoint::new(51.52260, -0.13300),
    ])?;
    b.add_straight_edge(lecture_hall, lab)?;
    // Covered walkway, stored from the sports hall end.
    b.add_edge(sports_hall, lab, vec![
        GeoPoint::new(51.52320, -0.13200),
        GeoPoint::new(51.52330, -0.13250),
        GeoPoint::new(51.52320, -0.13300),
    ])?;
    b.add_edge(library, north_gate, vec![
        GeoPoint::new(51.52260, -0.13400),
        GeoPoint::new(51.52310, -0.13420),
        GeoPoint::new(51.52360, -0.13400),
    ])?;

    let net = b.build();
    Ok((net, [main_gate, library, lecture_hall, lab, cafe, sports_hall, north_gate]))
}
