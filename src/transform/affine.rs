//! Transform implementations - Rotate, Scale, Translate
//!
//! All three act about the figure's local origin. Translation is only
//! used when placing a figure in world space for drawing.

use nalgebra::{Point2, Rotation2};

use super::traits::Transform;
use crate::shapes::Vertex;

/// Rotation about the origin
///
/// ```text
/// x' = x * cos(θ) - y * sin(θ)
/// y' = x * sin(θ) + y * cos(θ)
/// ```
pub struct Rotate {
    rotation: Rotation2<f32>,
}

impl Rotate {
    /// Create a rotation from an angle in degrees (counter-clockwise)
    pub fn degrees(angle: f32) -> Self {
        Self {
            rotation: Rotation2::new(angle.to_radians()),
        }
    }
}

impl Transform for Rotate {
    fn apply(&self, vertex: Vertex) -> Vertex {
        let p = self.rotation * Point2::new(vertex.x, vertex.y);
        Vertex::new(p.x, p.y)
    }

    fn name(&self) -> &str {
        "Rotate"
    }
}

/// Per-axis scale about the origin
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale {
    /// X scale factor (1.0 = no change)
    pub x: f32,
    /// Y scale factor (1.0 = no change)
    pub y: f32,
}

impl Scale {
    /// Create a uniform scale
    pub fn uniform(factor: f32) -> Self {
        Self {
            x: factor,
            y: factor,
        }
    }

    /// Scale only one axis, leaving the other untouched
    pub fn along(factor: f32, axis_is_x: bool) -> Self {
        if axis_is_x {
            Self { x: factor, y: 1.0 }
        } else {
            Self { x: 1.0, y: factor }
        }
    }
}

impl Transform for Scale {
    fn apply(&self, vertex: Vertex) -> Vertex {
        Vertex::new(vertex.x * self.x, vertex.y * self.y)
    }

    fn name(&self) -> &str {
        "Scale"
    }
}

/// Fixed offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Translate {
    /// X offset
    pub x: f32,
    /// Y offset
    pub y: f32,
}

impl Translate {
    /// Create a translation
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Transform for Translate {
    fn apply(&self, vertex: Vertex) -> Vertex {
        Vertex::new(vertex.x + self.x, vertex.y + self.y)
    }

    fn name(&self) -> &str {
        "Translate"
    }
}
