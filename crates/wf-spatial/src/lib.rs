//! `wf-spatial`: path network, point snapping and walking-route queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`network`]   | `PathNetwork` (edges + lookup + R-tree), `PathNetworkBuilder` |
//! | [`adjacency`] | `Adjacency`, `WeightedEdge`                                 |
//! | [`search`]    | `PathSearch` trait, `DijkstraSearch`                        |
//! | [`snap`]      | `snap_to_network`, `augment_graph`, `SnapResult`            |
//! | [`router`]    | `route_from_point`, `RouteResult`, `reconstruct`            |
//! | [`loader`]    | `load_network_json`, `load_network_reader`                  |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Enables `route_batch` on the Rayon thread pool.          |

pub mod adjacency;
pub mod error;
pub mod loader;
pub mod network;
pub mod router;
pub mod search;
pub mod snap;


pub use adjacency::{Adjacency, WeightedEdge};
pub use error::{SpatialError, SpatialResult};
pub use loader::{load_network_json, load_network_json_with, load_network_reader, load_network_reader_with};
pub use network::{Edge, PathNetwork, PathNetworkBuilder};
pub use router::{reconstruct, route_from_point, route_from_point_with, RouteResult};
#[cfg(feature = "parallel")]
pub use router::route_batch;
pub use search::{DijkstraSearch, PathSearch};
pub use snap::{augment_graph, snap_to_network, AugmentedGraph, SnapResult};
