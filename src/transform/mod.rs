//! Transform module - geometric operations on vertex buffers
//!
//! This module provides:
//! - `Transform` trait for point-wise transforms
//! - Rotate, Scale and Translate implementations

mod affine;
mod traits;

pub use affine::{Rotate, Scale, Translate};
pub use traits::Transform;
