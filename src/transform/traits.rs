//! Transform trait - maps figure vertices to new positions
//!
//! Transforms are pure: they never mutate the buffer they read from, so a
//! shape can always recompute its displayed geometry from its working
//! vertices without accumulating error.

use crate::shapes::{Vertex, VertexBuffer};

/// A geometric transform applied point by point
pub trait Transform {
    /// Transform a single vertex
    fn apply(&self, vertex: Vertex) -> Vertex;

    /// Get the name of this transform (for logging)
    fn name(&self) -> &str;

    /// Transform every vertex of a buffer, preserving order
    fn apply_all(&self, vertices: &[Vertex]) -> VertexBuffer {
        vertices.iter().map(|v| self.apply(*v)).collect()
    }
}
