//! Render module - UI components for visualization
//!
//! This module provides:
//! - The figure canvas widget

mod canvas;

pub use canvas::{Canvas, CanvasSettings};
