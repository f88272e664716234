//! Network construction settings.

/// Settings applied when a path network is built from raw nodes and edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NetworkConfig {
    /// Maximum distance in metres between an edge polyline's first/last
    /// vertex and the coordinate of the node it connects.  Endpoints within
    /// the tolerance are pinned to the node coordinate; anything further is
    /// a data-integrity error.
    pub endpoint_tolerance_m: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { endpoint_tolerance_m: 1.0 }
    }
}
