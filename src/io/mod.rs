//! Mesh file I/O.
//!
//! This module provides loading and saving of colored triangle meshes.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | PLY | `.ply` | ✓ | ✓ | Stanford polygon format, with per-vertex colors |
//!
//! PLY is the only supported format because the analysis needs per-vertex
//! colors, which the common OBJ/STL interchange formats do not carry.
//!
//! # Usage
//!
//! ```no_run
//! use swatch::io::{load, save};
//!
//! let mesh = load("model.ply").unwrap();
//! save(&mesh, "output.ply").unwrap();
//! ```

pub mod ply;

use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::mesh::ColorMesh;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// PLY (Stanford polygon) format.
    Ply,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "ply" => Some(Format::Ply),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Load a colored mesh from a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<ColorMesh> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| SwatchError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Ply => ply::load(path),
    }
}

/// Save a colored mesh to a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(mesh: &ColorMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| SwatchError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Ply => ply::save(mesh, path),
    }
}
