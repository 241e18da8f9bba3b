//! Error types for swatch.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`SwatchError`].
pub type Result<T> = std::result::Result<T, SwatchError>;

/// Errors that can occur during mesh loading or component analysis.
#[derive(Error, Debug)]
pub enum SwatchError {
    /// A triangle references a vertex index outside the vertex range.
    #[error("triangle {triangle} references invalid vertex index {vertex} (mesh has {vertex_count} vertices)")]
    InvalidVertexIndex {
        /// The triangle index.
        triangle: usize,
        /// The invalid vertex index.
        vertex: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The color buffer length does not match the vertex count.
    #[error("color count {colors} does not match vertex count {vertices}")]
    ColorCountMismatch {
        /// Number of color entries supplied.
        colors: usize,
        /// Number of vertices in the mesh.
        vertices: usize,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}
