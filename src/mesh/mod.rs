//! Core mesh data structure.
//!
//! This module provides [`ColorMesh`], a plain face-vertex triangle mesh with
//! a per-vertex color attribute. The component analysis in [`crate::algo`]
//! operates on raw arrays (vertex count, triangle index buffer, color
//! buffer), so the container's job is only to hold validated buffers between
//! file I/O and the algorithm.
//!
//! # Construction
//!
//! Meshes come from file I/O or from buffers directly:
//!
//! ```
//! use swatch::mesh::ColorMesh;
//! use nalgebra::{Point3, Vector3};
//!
//! let positions = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.5, 1.0, 0.0),
//! ];
//! let triangles = vec![[0, 1, 2]];
//! let colors = vec![Vector3::new(1.0, 0.0, 0.0); 3];
//!
//! let mesh = ColorMesh::new(positions, triangles, colors).unwrap();
//! ```

mod color_mesh;

pub use color_mesh::ColorMesh;
