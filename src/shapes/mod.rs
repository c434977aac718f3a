//! Shapes module - the editable figures
//!
//! This module provides:
//! - `Vertex` and `VertexBuffer` for outline geometry
//! - The static figure table (`ShapeId`, `FigureDef`)
//! - `ShapeState`, one figure with its transform history

mod figures;
mod state;
mod vertex;

pub use figures::{FigureDef, Rgb, ShapeId, UnknownShape, FIGURE_COLOR};
pub use state::{Axis, ShapeState, SELECTED_COLOR};
pub use vertex::{buffer_from, Vertex, VertexBuffer};
