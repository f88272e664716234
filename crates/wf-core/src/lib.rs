//! `wf-core`: foundational types for the campus wayfinding router.
//!
//! This crate has no `wf-*` dependencies and no required external ones
//! (only optional `serde`).
//!
//! # What lives here
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`ids`]        | `NodeId`, `EdgeId`                                        |
//! | [`geo`]        | `GeoPoint`, haversine distance                            |
//! | [`polyline`]   | `geodesic_length`, `nearest_point_on_polyline`, `sub_slice` |
//! | [`config`]     | `NetworkConfig`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod geo;
pub mod ids;
pub mod polyline;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::NetworkConfig;
pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use polyline::{
    append_leg, geodesic_length, nearest_point_on_polyline, slice_between, sub_slice,
    PolylinePosition,
};
