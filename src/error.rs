//! Error types for readorder library.

use std::io;
use thiserror::Error;

/// Result type alias for readorder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing reading order.
///
/// Geometric ambiguity is never an error: spans outside every region are
/// dropped with a tag and unknown block types are filtered out. The variants
/// below cover caller mistakes and the I/O surface only.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading page input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Page input could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A bounding box is inverted or has non-finite coordinates.
    #[error("Invalid bounding box for {what}: [{x0}, {y0}, {x1}, {y1}]")]
    InvalidBBox {
        /// Which item carried the box (e.g. "span 3")
        what: String,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
    },

    /// Layout regions are not supplied in reading order.
    #[error("Layout region at position {position} has order {order}, expected more than {previous}")]
    RegionOrder {
        /// Position of the offending region in the input sequence
        position: usize,
        /// Its declared reading-order index
        order: usize,
        /// Reading-order index of the region before it
        previous: usize,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
