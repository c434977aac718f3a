//! Vertex type - a single 2D point of a figure outline
//!
//! Figures are stored as ordered vertex lists. The order matters: the
//! renderer connects consecutive vertices into a line strip, and closed
//! outlines repeat their first vertex as the last one.

/// A 2D point in figure-local coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vertex {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of vertices at one stage of the pipeline
pub type VertexBuffer = Vec<Vertex>;

/// Build a vertex buffer from a static `(x, y)` table
pub fn buffer_from(points: &[(f32, f32)]) -> VertexBuffer {
    points.iter().copied().map(Vertex::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_from_keeps_order() {
        let buffer = buffer_from(&[(0.0, 1.0), (2.0, 3.0), (0.0, 1.0)]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer[1], Vertex::new(2.0, 3.0));
        assert_eq!(buffer.first(), buffer.last());
    }
}
