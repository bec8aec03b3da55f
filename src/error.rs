//! Error types for tracery.
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Result type alias using [`WireError`].
pub type Result<T> = std::result::Result<T, WireError>;

/// Errors that can occur while building or reconstructing a wireframe.
///
/// Geometric degeneracy (collinear arc triples, zero-length edges, isolated
/// points) is never an error: the reconstruction engine recovers locally and
/// degrades to fewer or zero-area faces instead. Only grossly invalid input
/// and I/O failures surface here.
#[derive(Error, Debug)]
pub enum WireError {
    /// An edge references a point index outside the point array.
    #[error("edge {edge} references invalid point index {point}")]
    InvalidPointIndex {
        /// The edge index.
        edge: usize,
        /// The invalid point index.
        point: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed wireframe listing.
    #[error("malformed wireframe data at line {line}: {message}")]
    Parse {
        /// The 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}
