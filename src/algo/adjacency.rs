//! Vertex adjacency extraction from triangle index buffers.
//!
//! Each triangle `(i, j, k)` implies the three undirected edges `{i,j}`,
//! `{j,k}`, `{k,i}`. Edges are normalized (smaller index first) so the same
//! edge seen from two triangles collapses to one entry, and self-edges from
//! degenerate triangles are dropped.

use std::collections::HashSet;

use rayon::prelude::*;

/// The three normalized edges of a triangle, skipping self-edges.
fn normalized_edges(tri: &[usize; 3]) -> impl Iterator<Item = (usize, usize)> {
    let [i, j, k] = *tri;
    [(i, j), (j, k), (k, i)]
        .into_iter()
        .filter(|&(a, b)| a != b)
        .map(|(a, b)| (a.min(b), a.max(b)))
}

/// Extract the deduplicated set of undirected vertex-adjacency edges implied
/// by a triangle buffer.
///
/// Triangle indices are assumed to be in range; callers validate them against
/// the vertex count before edge extraction (see
/// [`identically_colored_components`](crate::algo::identically_colored_components)).
/// The result has at most `3 * triangles.len()` entries, each a pair
/// `(a, b)` with `a < b`.
///
/// # Example
/// ```
/// use swatch::algo::vertex_adjacency_edges;
///
/// // Two triangles sharing the edge {1, 2}.
/// let edges = vertex_adjacency_edges(&[[0, 1, 2], [2, 1, 3]]);
/// assert_eq!(edges.len(), 5);
/// assert!(edges.contains(&(1, 2)));
/// ```
pub fn vertex_adjacency_edges(triangles: &[[usize; 3]]) -> HashSet<(usize, usize)> {
    let mut edges = HashSet::with_capacity(triangles.len() * 3);
    for tri in triangles {
        edges.extend(normalized_edges(tri));
    }
    edges
}

/// Parallel variant of [`vertex_adjacency_edges`].
///
/// Edge extraction is independent per triangle, so triangles are processed
/// across threads and the results merged into one deduplicated set. Produces
/// exactly the same set as the sequential path.
pub fn vertex_adjacency_edges_parallel(triangles: &[[usize; 3]]) -> HashSet<(usize, usize)> {
    triangles.par_iter().flat_map_iter(normalized_edges).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle() {
        let edges = vertex_adjacency_edges(&[[0, 1, 2]]);
        let expected: HashSet<_> = [(0, 1), (1, 2), (0, 2)].into_iter().collect();
        assert_eq!(edges, expected);
    }

    #[test]
    fn test_shared_edges_deduplicate() {
        // Both triangles contain the edge {1, 2}; it must appear once.
        let edges = vertex_adjacency_edges(&[[0, 1, 2], [1, 3, 2]]);
        assert_eq!(edges.len(), 5);
        assert!(edges.contains(&(1, 2)));
    }

    #[test]
    fn test_orientation_does_not_matter() {
        // The same triangle with opposite winding yields the same edges.
        let forward = vertex_adjacency_edges(&[[0, 1, 2]]);
        let backward = vertex_adjacency_edges(&[[2, 1, 0]]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_degenerate_triangle_drops_self_edges() {
        // (5, 5, 7) implies {5,5} twice (dropped) and {5,7} once.
        let edges = vertex_adjacency_edges(&[[5, 5, 7]]);
        let expected: HashSet<_> = [(5, 7)].into_iter().collect();
        assert_eq!(edges, expected);

        // Fully collapsed triangle contributes nothing.
        let edges = vertex_adjacency_edges(&[[3, 3, 3]]);
        assert!(edges.is_empty());
    }

    #[test]
    fn test_duplicate_triangles() {
        let once = vertex_adjacency_edges(&[[0, 1, 2]]);
        let thrice = vertex_adjacency_edges(&[[0, 1, 2], [0, 1, 2], [2, 1, 0]]);
        assert_eq!(once, thrice);
    }

    #[test]
    fn test_empty_input() {
        assert!(vertex_adjacency_edges(&[]).is_empty());
        assert!(vertex_adjacency_edges_parallel(&[]).is_empty());
    }

    #[test]
    fn test_edge_count_bound() {
        let triangles = vec![[0, 1, 2], [1, 2, 3], [2, 3, 4], [0, 2, 4]];
        let edges = vertex_adjacency_edges(&triangles);
        assert!(edges.len() <= 3 * triangles.len());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut triangles = Vec::new();
        for i in 0..200 {
            triangles.push([i, i + 1, i + 2]);
            triangles.push([i + 2, i + 1, i]);
        }
        assert_eq!(
            vertex_adjacency_edges(&triangles),
            vertex_adjacency_edges_parallel(&triangles)
        );
    }
}
