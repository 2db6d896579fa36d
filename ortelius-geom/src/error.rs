//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum OrteliusGeomError {
    /// A polygon constructor was given a vertex count larger than the
    /// coordinate buffers it was told to read from.
    #[error("vertex count {count} exceeds coordinate buffer length {available}")]
    CountOutOfBounds {
        /// Requested number of vertices.
        count: usize,
        /// Length of the shortest input buffer.
        available: usize,
    },
}
