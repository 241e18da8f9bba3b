//! Mesh analysis algorithms.
//!
//! - **Adjacency extraction**: [`vertex_adjacency_edges`] derives the
//!   deduplicated undirected vertex-adjacency edge set from a triangle
//!   buffer.
//! - **Color components**: [`identically_colored_components`] partitions the
//!   vertex set into maximal groups connected through edges whose endpoints
//!   share an exactly equal color.

pub mod adjacency;
pub mod components;

pub use adjacency::{vertex_adjacency_edges, vertex_adjacency_edges_parallel};
pub use components::{identically_colored_components, ColorComponents, ComponentsOptions};
