//! Periodic B-spline smoothing of closed outlines
//!
//! A closed control polygon is turned into a smooth closed curve by
//! padding it with its own ends and fitting an ordinary (non-periodic)
//! uniform B-spline through the padded sequence.
//!
//! ## Wrapping
//!
//! ```text
//! points  = [p0, p1, ..., pm]
//! wrapped = [p(m-d+1) .. pm] ++ points ++ [p0 .. p(d-1)]
//! ```
//!
//! The padding supplies the neighbours each end span needs, so the curve
//! wraps around without periodic knot handling. Only the base
//! interval `[knot[d], knot[n]]` is evaluated; outside it the basis
//! functions do not sum to one.

use thiserror::Error;

use crate::shapes::{Vertex, VertexBuffer};

/// Number of points produced by a curve fit
pub const CURVE_SAMPLES: usize = 100;

/// Errors that can occur while fitting a curve
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("Invalid spline degree {degree} for {points} control points (need 1 <= degree < points)")]
    InvalidDegree { degree: usize, points: usize },
}

/// A uniform B-spline over scalar coefficients
///
/// x and y are fitted as two independent splines sharing one knot vector.
struct UniformBSpline<'a> {
    knots: &'a [f64],
    coefficients: Vec<f64>,
    degree: usize,
}

impl UniformBSpline<'_> {
    /// Index `l` of the knot span holding `u`, with `knots[l] <= u < knots[l + 1]`
    ///
    /// Restricted to the base interval; `u == knots[n]` belongs to the last span.
    fn span(&self, u: f64) -> usize {
        let n = self.coefficients.len();
        let mut l = self.degree;
        while l < n - 1 && u >= self.knots[l + 1] {
            l += 1;
        }
        l
    }

    /// Evaluate with de Boor's algorithm
    fn eval(&self, u: f64) -> f64 {
        let k = self.degree;
        let l = self.span(u);
        let t = self.knots;

        let mut d: Vec<f64> = (0..=k).map(|j| self.coefficients[j + l - k]).collect();

        for r in 1..=k {
            for j in (r..=k).rev() {
                let left = t[j + l - k];
                let right = t[j + 1 + l - r];
                let alpha = (u - left) / (right - left);
                d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
            }
        }

        d[k]
    }
}

/// Pad a closed polygon with `degree` points from each opposite end
fn wrap(points: &[Vertex], degree: usize) -> VertexBuffer {
    let len = points.len();
    let mut wrapped = Vec::with_capacity(len + 2 * degree);
    wrapped.extend_from_slice(&points[len - degree..]);
    wrapped.extend_from_slice(points);
    wrapped.extend_from_slice(&points[..degree]);
    wrapped
}

/// `count` evenly spaced values from `start` to `end`, both inclusive
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Smooth a closed polygon into a resampled curve
///
/// # Arguments
/// * `points` - Closed control polygon, in drawing order
/// * `degree` - Spline degree, `1 <= degree < points.len()`
///
/// # Returns
/// Exactly [`CURVE_SAMPLES`] points along the curve
pub fn fit(points: &[Vertex], degree: usize) -> Result<VertexBuffer, CurveError> {
    if degree == 0 || degree >= points.len() {
        return Err(CurveError::InvalidDegree {
            degree,
            points: points.len(),
        });
    }

    let wrapped = wrap(points, degree);
    let n = wrapped.len();
    let knots = linspace(0.0, 1.0, n + degree + 1);

    let spline_x = UniformBSpline {
        knots: &knots,
        coefficients: wrapped.iter().map(|v| v.x as f64).collect(),
        degree,
    };
    let spline_y = UniformBSpline {
        knots: &knots,
        coefficients: wrapped.iter().map(|v| v.y as f64).collect(),
        degree,
    };

    let curve = linspace(knots[degree], knots[n], CURVE_SAMPLES)
        .into_iter()
        .map(|u| Vertex::new(spline_x.eval(u) as f32, spline_y.eval(u) as f32))
        .collect();

    Ok(curve)
}
