//! # Swatch
//!
//! Identically colored connected component analysis for triangle meshes.
//!
//! Swatch partitions the vertices of a vertex-colored triangle mesh into
//! maximal groups that are connected through mesh edges and share an exactly
//! equal color: an edge only links its endpoints into one group when their
//! colors match. The result is an ordered list of groups — largest first,
//! equal sizes ordered by their smallest vertex index — that partitions the
//! vertex set exactly.
//!
//! ## Quick Start
//!
//! ```no_run
//! use swatch::prelude::*;
//!
//! // Load a colored mesh
//! let mesh = swatch::io::load("model.ply").unwrap();
//!
//! // Partition its vertices by color-connectivity
//! let components = mesh
//!     .identically_colored_components(&ComponentsOptions::default())
//!     .unwrap();
//!
//! println!("{} components", components.component_count());
//! for group in components.iter() {
//!     println!("{:?}", group);
//! }
//! ```
//!
//! ## Working from raw buffers
//!
//! The algorithm itself is decoupled from any mesh container: it takes a
//! vertex count, a triangle index buffer, and a color per vertex, where the
//! color may be any exact-equality type.
//!
//! ```
//! use swatch::algo::{identically_colored_components, ComponentsOptions};
//!
//! let triangles = [[0, 1, 2], [1, 3, 2]];
//! let colors = ["red", "red", "blue", "red"];
//!
//! let result =
//!     identically_colored_components(4, &triangles, &colors, &ComponentsOptions::default())
//!         .unwrap();
//! assert_eq!(result.groups(), [vec![0, 1, 3], vec![2]]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod mesh;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types and functions:
///
/// ```
/// use swatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algo::{
        identically_colored_components, ColorComponents, ComponentsOptions,
    };
    pub use crate::error::{Result, SwatchError};
    pub use crate::mesh::ColorMesh;
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use nalgebra::{Point3, Vector3};

    #[test]
    fn test_mesh_to_components() {
        let positions = vec![
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.5, 0.0),
            Point3::new(1.0, 3.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(2.0, 2.0, 0.0),
        ];
        let triangles = vec![
            [0, 2, 3],
            [0, 3, 1],
            [1, 3, 4],
            [2, 5, 3],
            [3, 5, 6],
            [3, 6, 4],
        ];
        let red = Vector3::new(1.0, 0.0, 0.0);
        let green = Vector3::new(0.0, 1.0, 0.0);
        let blue = Vector3::new(0.0, 0.0, 1.0);
        let colors = vec![red, green, blue, red, green, red, red];

        let mesh = ColorMesh::new(positions, triangles, colors).unwrap();
        let components = mesh
            .identically_colored_components(&ComponentsOptions::default())
            .unwrap();

        assert_eq!(
            components.groups(),
            [vec![0, 3, 5, 6], vec![1, 4], vec![2]]
        );
    }
}
