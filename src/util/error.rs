//! Error types for the FBX ASCII exporter.

use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric value was built from an empty array
    #[error("Numeric value must contain at least one element")]
    EmptyValue,

    /// An animation has no frames to sample
    #[error("Animation has no frames")]
    EmptyAnimation,

    /// Frame rotation cannot be normalized (zero length or non-finite)
    #[error("Frame {frame} has a rotation that cannot be normalized")]
    InvalidRotation { frame: usize },

    /// Frame position, scale or time is NaN or infinite
    #[error("Frame {frame} has a non-finite position, scale or time")]
    NonFiniteFrame { frame: usize },

    /// Keys driven by frame index need a positive frame rate
    #[error("Frame rate must be positive (got {0})")]
    InvalidFrameRate(u32),

    /// Mesh topology other than triangles or quads
    #[error("Meshes of {0} topology are unsupported")]
    UnsupportedTopology(String),

    /// Index array does not split into whole polygons
    #[error("Index count {count} is not a multiple of polygon size {polygon_size}")]
    InvalidIndexCount { count: usize, polygon_size: usize },

    /// Polygon index does not address a vertex
    #[error("Vertex index {index} out of bounds (count: {vertex_count})")]
    IndexOutOfRange { index: u32, vertex_count: usize },

    /// Connection endpoint is not registered in this export session
    #[error("Object {0} is not registered in this export")]
    UnknownObject(u64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, Error>;
