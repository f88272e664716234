//! Spatial-subsystem error type.
//!
//! Only construction and loading fail.  An unreachable destination is an
//! ordinary query outcome and is reported as `None`, not as an error.

use thiserror::Error;

use wf_core::NodeId;

/// Errors produced by `wf-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("node {0} not found in network")]
    NodeNotFound(NodeId),

    #[error("edge {edge} polyline ends {offset_m:.2} m away from {node}")]
    EndpointMismatch { edge: usize, node: NodeId, offset_m: f64 },

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
