//! Figure table - the predefined outlines the editor starts with
//!
//! Every figure shares the same behaviour; they differ only in the data
//! stored here: outline, color and starting position.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::vertex::{buffer_from, VertexBuffer};

/// RGB color with components in `[0, 1]`
pub type Rgb = [f32; 3];

/// Color all figures are drawn in while not selected
pub const FIGURE_COLOR: Rgb = [0.992, 0.965, 0.686];

const PLANE: &[(f32, f32)] = &[
    (0.0, 76.0), (-32.0, 16.0), (-76.0, 16.0), (-96.0, -12.0), (-32.0, -12.0),
    (0.0, -72.0), (36.0, -72.0), (4.0, -12.0), (40.0, -12.0), (96.0, 44.0),
    (64.0, 44.0), (36.0, 16.0), (0.0, 16.0), (32.0, 76.0), (0.0, 76.0),
];

const TREE: &[(f32, f32)] = &[
    (0.0, 80.0), (-30.0, 40.0), (-10.0, 40.0), (-40.0, 0.0), (-20.0, 0.0),
    (-50.0, -50.0), (-10.0, -50.0), (-10.0, -90.0), (10.0, -90.0), (10.0, -50.0),
    (50.0, -50.0), (20.0, 0.0), (40.0, 0.0), (10.0, 40.0), (30.0, 40.0), (0.0, 80.0),
];

const HEART: &[(f32, f32)] = &[
    (0.0, 70.0), (-30.0, 90.0), (-60.0, 90.0), (-90.0, 60.0), (-90.0, 20.0),
    (-60.0, -30.0), (0.0, -90.0), (60.0, -30.0), (90.0, 20.0), (90.0, 60.0),
    (60.0, 90.0), (30.0, 90.0), (0.0, 70.0),
];

/// Raised when a name or slot does not match any figure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown shape '{0}'")]
pub struct UnknownShape(pub String);

/// Identifies one of the predefined figures
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeId {
    Plane,
    Tree,
    Heart,
}

/// Static data describing a figure
pub struct FigureDef {
    pub outline: &'static [(f32, f32)],
    pub color: Rgb,
    /// Starting offset (x, y, z); z is carried but never edited
    pub translation: [f32; 3],
}

impl FigureDef {
    /// The outline as an owned vertex buffer
    pub fn vertices(&self) -> VertexBuffer {
        buffer_from(self.outline)
    }
}

impl ShapeId {
    /// All figures, in slot order
    pub fn all() -> &'static [ShapeId] {
        &[ShapeId::Plane, ShapeId::Tree, ShapeId::Heart]
    }

    /// Get the display name of this figure
    pub fn name(&self) -> &'static str {
        match self {
            ShapeId::Plane => "Plane",
            ShapeId::Tree => "Tree",
            ShapeId::Heart => "Heart",
        }
    }

    /// Zero-based slot of this figure in `all()`
    pub fn slot(&self) -> usize {
        *self as usize
    }

    /// Look up a figure by its zero-based slot
    pub fn from_slot(slot: usize) -> Result<Self, UnknownShape> {
        Self::all()
            .get(slot)
            .copied()
            .ok_or_else(|| UnknownShape(format!("slot {}", slot)))
    }

    pub fn definition(&self) -> FigureDef {
        match self {
            ShapeId::Plane => FigureDef {
                outline: PLANE,
                color: FIGURE_COLOR,
                translation: [-250.0, 0.0, 0.0],
            },
            ShapeId::Tree => FigureDef {
                outline: TREE,
                color: FIGURE_COLOR,
                translation: [0.0, -250.0, 0.0],
            },
            ShapeId::Heart => FigureDef {
                outline: HEART,
                color: FIGURE_COLOR,
                translation: [0.0, 0.0, 0.0],
            },
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownShape(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlines_are_closed() {
        for id in ShapeId::all() {
            let v = id.definition().vertices();
            assert_eq!(v.first(), v.last(), "{} outline is open", id);
        }
    }

    #[test]
    fn test_outline_sizes() {
        assert_eq!(ShapeId::Plane.definition().vertices().len(), 15);
        assert_eq!(ShapeId::Tree.definition().vertices().len(), 16);
        assert_eq!(ShapeId::Heart.definition().vertices().len(), 13);
    }

    #[test]
    fn test_heart_is_mirror_symmetric() {
        let heart = ShapeId::Heart.definition().vertices();
        let last = heart.len() - 1;
        for i in 0..heart.len() {
            assert_eq!(heart[i].x, -heart[last - i].x);
            assert_eq!(heart[i].y, heart[last - i].y);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("plane".parse::<ShapeId>(), Ok(ShapeId::Plane));
        assert_eq!(" Heart ".parse::<ShapeId>(), Ok(ShapeId::Heart));
        assert_eq!(
            "boat".parse::<ShapeId>(),
            Err(UnknownShape("boat".to_string()))
        );
    }

    #[test]
    fn test_slots() {
        assert_eq!(ShapeId::from_slot(1), Ok(ShapeId::Tree));
        assert!(ShapeId::from_slot(3).is_err());
        for id in ShapeId::all() {
            assert_eq!(ShapeId::from_slot(id.slot()), Ok(*id));
        }
    }
}
