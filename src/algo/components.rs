//! Identically colored connected components.
//!
//! Partitions the vertices of a triangle mesh into maximal groups that are
//! connected through mesh edges whose two endpoints carry exactly equal
//! colors. Two vertices end up in the same group iff a path of edges links
//! them along which every step joins two identically colored vertices; a
//! vertex with no same-colored neighbor forms a singleton group.
//!
//! Merging uses a disjoint-set forest over the deduplicated adjacency edge
//! set, so the partition is independent of edge iteration order. The group
//! ordering of the result is a deterministic post-processing sort.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::error::{Result, SwatchError};

use super::adjacency::{vertex_adjacency_edges, vertex_adjacency_edges_parallel};

/// Options for the component analysis.
#[derive(Debug, Clone)]
pub struct ComponentsOptions {
    /// Whether adjacency edge extraction runs across threads.
    ///
    /// The merged edge set is identical either way, and the merging and
    /// ordering stages always run single-threaded, so the output does not
    /// depend on this flag.
    pub parallel: bool,
}

impl Default for ComponentsOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl ComponentsOptions {
    /// Set whether edge extraction runs in parallel.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Disjoint-set forest over dense vertex indices, with path compression and
/// union by size.
#[derive(Debug)]
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
    }
}

/// Result of the identically colored connected component analysis.
///
/// Groups are ordered by descending size; among equal-size groups, by
/// ascending smallest member index. Each group lists its vertex indices in
/// ascending order, and together the groups partition `[0, vertex_count)`
/// exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorComponents {
    groups: Vec<Vec<usize>>,
}

impl ColorComponents {
    fn new(groups: Vec<Vec<usize>>) -> Self {
        Self { groups }
    }

    /// Number of components.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no components (empty mesh).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// All groups, largest first.
    #[inline]
    pub fn groups(&self) -> &[Vec<usize>] {
        &self.groups
    }

    /// The largest component, if any.
    pub fn largest(&self) -> Option<&[usize]> {
        self.groups.first().map(|g| g.as_slice())
    }

    /// The smallest component, if any.
    pub fn smallest(&self) -> Option<&[usize]> {
        self.groups.last().map(|g| g.as_slice())
    }

    /// Iterate over the groups as slices.
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> {
        self.groups.iter().map(|g| g.as_slice())
    }

    /// Consume the result, returning the raw group list.
    pub fn into_groups(self) -> Vec<Vec<usize>> {
        self.groups
    }
}

/// Partition mesh vertices into identically colored connected components.
///
/// Vertices are identified by dense indices in `[0, vertex_count)`. Each
/// triangle contributes its three edges to an adjacency set; an edge merges
/// its endpoints only when their colors compare exactly equal. Colors may be
/// any exact-equality type; the mesh container uses `Vector3<f64>`.
///
/// Degenerate triangles (repeated vertex index), duplicate triangles, and
/// isolated vertices are all well-formed input: self-edges are dropped,
/// duplicate edges collapse, and an isolated vertex becomes a singleton
/// group.
///
/// # Errors
///
/// Fails before any partitioning work if `colors.len() != vertex_count`
/// ([`SwatchError::ColorCountMismatch`]) or a triangle references an index
/// outside `[0, vertex_count)` ([`SwatchError::InvalidVertexIndex`]).
///
/// # Example
///
/// ```
/// use swatch::algo::{identically_colored_components, ComponentsOptions};
///
/// // Two triangles sharing an edge; the shared edge's endpoints are both
/// // red, everything else differs.
/// let triangles = [[0, 1, 2], [1, 3, 2]];
/// let colors = ["red", "red", "blue", "green"];
///
/// let result =
///     identically_colored_components(4, &triangles, &colors, &ComponentsOptions::default())
///         .unwrap();
/// assert_eq!(result.groups(), [vec![0, 1], vec![2], vec![3]]);
/// ```
pub fn identically_colored_components<C: PartialEq>(
    vertex_count: usize,
    triangles: &[[usize; 3]],
    colors: &[C],
    options: &ComponentsOptions,
) -> Result<ColorComponents> {
    if colors.len() != vertex_count {
        return Err(SwatchError::ColorCountMismatch {
            colors: colors.len(),
            vertices: vertex_count,
        });
    }

    for (ti, tri) in triangles.iter().enumerate() {
        for &vi in tri {
            if vi >= vertex_count {
                return Err(SwatchError::InvalidVertexIndex {
                    triangle: ti,
                    vertex: vi,
                    vertex_count,
                });
            }
        }
    }

    let edges = if options.parallel {
        vertex_adjacency_edges_parallel(triangles)
    } else {
        vertex_adjacency_edges(triangles)
    };

    let mut sets = DisjointSet::new(vertex_count);
    for &(a, b) in &edges {
        if colors[a] == colors[b] {
            sets.union(a, b);
        }
    }

    // Visiting vertices in ascending order keeps each group's member list
    // sorted without a per-group sort.
    let mut members: HashMap<usize, Vec<usize>> = HashMap::new();
    for v in 0..vertex_count {
        let root = sets.find(v);
        members.entry(root).or_default().push(v);
    }

    let mut groups: Vec<Vec<usize>> = members.into_values().collect();
    groups.sort_by_key(|g| (Reverse(g.len()), g[0]));

    Ok(ColorComponents::new(groups))
}
