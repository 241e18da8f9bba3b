//! Face-vertex triangle mesh with per-vertex colors.

use nalgebra::{Point3, Vector3};

use crate::algo::{identically_colored_components, ColorComponents, ComponentsOptions};
use crate::error::{Result, SwatchError};

/// A triangle mesh with a color attribute per vertex.
///
/// This is a plain face-vertex representation: vertex positions, a triangle
/// index buffer, and one color per vertex. Vertices are identified by their
/// dense index in `[0, num_vertices())`. The container is immutable glue
/// between file I/O and the component analysis in [`crate::algo`]; it carries
/// no connectivity structure of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMesh {
    positions: Vec<Point3<f64>>,
    triangles: Vec<[usize; 3]>,
    colors: Vec<Vector3<f64>>,
}

impl ColorMesh {
    /// Build a mesh from vertex positions, triangle indices, and per-vertex colors.
    ///
    /// Every triangle index must lie in `[0, positions.len())` and `colors`
    /// must have exactly one entry per vertex. Degenerate triangles (repeated
    /// vertex index) and duplicate triangles are accepted; they are handled by
    /// the component analysis, not rejected here.
    ///
    /// # Example
    /// ```
    /// use swatch::mesh::ColorMesh;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let positions = vec![
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.5, 1.0, 0.0),
    /// ];
    /// let triangles = vec![[0, 1, 2]];
    /// let colors = vec![Vector3::new(1.0, 0.0, 0.0); 3];
    ///
    /// let mesh = ColorMesh::new(positions, triangles, colors).unwrap();
    /// assert_eq!(mesh.num_vertices(), 3);
    /// assert_eq!(mesh.num_triangles(), 1);
    /// ```
    pub fn new(
        positions: Vec<Point3<f64>>,
        triangles: Vec<[usize; 3]>,
        colors: Vec<Vector3<f64>>,
    ) -> Result<Self> {
        if colors.len() != positions.len() {
            return Err(SwatchError::ColorCountMismatch {
                colors: colors.len(),
                vertices: positions.len(),
            });
        }

        for (ti, tri) in triangles.iter().enumerate() {
            for &vi in tri {
                if vi >= positions.len() {
                    return Err(SwatchError::InvalidVertexIndex {
                        triangle: ti,
                        vertex: vi,
                        vertex_count: positions.len(),
                    });
                }
            }
        }

        Ok(Self {
            positions,
            triangles,
            colors,
        })
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Vertex positions, indexed by vertex.
    #[inline]
    pub fn positions(&self) -> &[Point3<f64>] {
        &self.positions
    }

    /// Triangle index buffer.
    #[inline]
    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Per-vertex colors, indexed by vertex.
    #[inline]
    pub fn colors(&self) -> &[Vector3<f64>] {
        &self.colors
    }

    /// Count the distinct color values used by the mesh.
    pub fn num_distinct_colors(&self) -> usize {
        let mut seen: Vec<Vector3<f64>> = Vec::new();
        for c in &self.colors {
            if !seen.contains(c) {
                seen.push(*c);
            }
        }
        seen.len()
    }

    /// Partition the vertices into identically colored connected components.
    ///
    /// Convenience wrapper around
    /// [`identically_colored_components`](crate::algo::identically_colored_components)
    /// over this mesh's triangle and color buffers.
    pub fn identically_colored_components(
        &self,
        options: &ComponentsOptions,
    ) -> Result<ColorComponents> {
        identically_colored_components(self.num_vertices(), &self.triangles, &self.colors, options)
    }

    /// Axis-aligned bounding box of the vertex positions.
    ///
    /// Returns `None` for a mesh with no vertices.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.positions.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.positions[1..] {
            for i in 0..3 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        Some((min, max))
    }
}
