//! Curve module - spline smoothing of figure outlines

mod bspline;

pub use bspline::{fit, CurveError, CURVE_SAMPLES};
