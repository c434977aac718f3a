//! Shape state - one editable figure and its accumulated transforms
//!
//! ## Pipeline
//!
//! ```text
//! base ──resize/curve──▶ working ──rotate(angle)──▶ display
//! ```
//!
//! `base` never changes. `working` is rewritten by `resize` and `b_spline`.
//! `display` is always rebuilt from `working` with the full cumulative
//! angle, so repeated small rotations never drift.

use crate::curve::{self, CurveError};
use crate::transform::{Rotate, Scale, Transform};

use super::figures::{Rgb, ShapeId};
use super::vertex::{Vertex, VertexBuffer};

/// Color used for a figure while it is selected
pub const SELECTED_COLOR: Rgb = [0.0, 1.0, 0.0];

/// Translation axis that user input can move along
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

/// A figure plus everything that has been done to it
#[derive(Clone, Debug)]
pub struct ShapeState {
    id: ShapeId,
    base_vertices: VertexBuffer,
    working_vertices: VertexBuffer,
    display_vertices: VertexBuffer,
    /// Cumulative rotation in degrees, unbounded
    rotation_angle: f32,
    /// Product of every resize delta applied so far
    scale_factor: f32,
    translation: [f32; 3],
    is_curved: bool,
    is_selected: bool,
    color: Rgb,
    selected_color: Rgb,
}

impl ShapeState {
    /// Create a figure in its initial state
    pub fn new(id: ShapeId) -> Self {
        let def = id.definition();
        let base = def.vertices();

        Self {
            id,
            working_vertices: base.clone(),
            display_vertices: base.clone(),
            base_vertices: base,
            rotation_angle: 0.0,
            scale_factor: 1.0,
            translation: def.translation,
            is_curved: false,
            is_selected: false,
            color: def.color,
            selected_color: SELECTED_COLOR,
        }
    }

    /// Override the highlight color used while selected
    pub fn with_selected_color(mut self, color: Rgb) -> Self {
        self.selected_color = color;
        self
    }

    /// Rotate by `delta` degrees and rebuild the display buffer
    ///
    /// The rotation is applied from scratch to the working vertices with the
    /// new cumulative angle. `rotate(0.0)` only refreshes the display buffer.
    pub fn rotate(&mut self, delta: f32) {
        self.rotation_angle += delta;
        self.display_vertices =
            Rotate::degrees(self.rotation_angle).apply_all(&self.working_vertices);
    }

    /// Scale the working vertices by `scale_delta`
    ///
    /// # Arguments
    /// * `scale_delta` - Multiplier for this step (1.1 grows, 0.9 shrinks)
    /// * `axis_is_x` - Which axis to scale when not in anchor mode
    /// * `anchor_mode` - Scale both axes (pointer-driven zoom)
    ///
    /// The scaled buffer is the current working buffer, so steps compound.
    /// No bounds are enforced.
    pub fn resize(&mut self, scale_delta: f32, axis_is_x: bool, anchor_mode: bool) {
        self.scale_factor *= scale_delta;

        let scale = if anchor_mode {
            Scale::uniform(scale_delta)
        } else {
            Scale::along(scale_delta, axis_is_x)
        };
        log::trace!(
            "{} on {}: {:?} (cumulative {})",
            scale.name(),
            self.id,
            scale,
            self.scale_factor
        );

        self.working_vertices = scale.apply_all(&self.working_vertices);
        self.rotate(0.0);
    }

    /// Replace the working outline with a smoothed spline curve
    ///
    /// Only the first call does anything; returns whether the curve was
    /// applied. Undone only by recreating the shape.
    pub fn b_spline(&mut self, degree: usize) -> Result<bool, CurveError> {
        if self.is_curved {
            return Ok(false);
        }

        self.working_vertices = curve::fit(&self.working_vertices, degree)?;
        self.is_curved = true;
        self.rotate(0.0);
        Ok(true)
    }

    /// Move the figure along one axis; z is never touched
    pub fn translate(&mut self, axis: Axis, delta: f32) {
        match axis {
            Axis::X => self.translation[0] += delta,
            Axis::Y => self.translation[1] += delta,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn base_vertices(&self) -> &[Vertex] {
        &self.base_vertices
    }

    pub fn working_vertices(&self) -> &[Vertex] {
        &self.working_vertices
    }

    /// Working vertices rotated by the cumulative angle, ready to draw
    pub fn display_vertices(&self) -> &[Vertex] {
        &self.display_vertices
    }

    pub fn rotation_angle(&self) -> f32 {
        self.rotation_angle
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn translation(&self) -> [f32; 3] {
        self.translation
    }

    pub fn is_curved(&self) -> bool {
        self.is_curved
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Current draw color: the highlight while selected, the base otherwise
    pub fn color(&self) -> Rgb {
        if self.is_selected {
            self.selected_color
        } else {
            self.color
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::CURVE_SAMPLES;

    const TOL: f32 = 1e-3;

    fn assert_close(a: &[Vertex], b: &[Vertex]) {
        assert_eq!(a.len(), b.len());
        for (p, q) in a.iter().zip(b) {
            assert!((p.x - q.x).abs() < TOL, "{:?} != {:?}", p, q);
            assert!((p.y - q.y).abs() < TOL, "{:?} != {:?}", p, q);
        }
    }

    #[test]
    fn test_new_state() {
        let shape = ShapeState::new(ShapeId::Plane);
        assert_eq!(shape.rotation_angle(), 0.0);
        assert_eq!(shape.scale_factor(), 1.0);
        assert_eq!(shape.translation(), [-250.0, 0.0, 0.0]);
        assert!(!shape.is_curved());
        assert_eq!(shape.working_vertices(), shape.base_vertices());
        assert_eq!(shape.display_vertices(), shape.base_vertices());
    }

    #[test]
    fn test_rotate_then_back_restores() {
        let mut shape = ShapeState::new(ShapeId::Tree);
        let before = shape.display_vertices().to_vec();
        shape.rotate(33.0);
        shape.rotate(-33.0);
        assert_close(shape.display_vertices(), &before);
        assert_eq!(shape.rotation_angle(), 0.0);
    }

    #[test]
    fn test_rotation_never_compounds() {
        // Seventy-two 5° steps land exactly where one 360° turn does.
        let mut stepped = ShapeState::new(ShapeId::Heart);
        for _ in 0..72 {
            stepped.rotate(5.0);
        }
        assert_close(stepped.display_vertices(), stepped.working_vertices());
        assert_eq!(stepped.working_vertices(), stepped.base_vertices());
    }

    #[test]
    fn test_rotate_leaves_working_untouched() {
        let mut shape = ShapeState::new(ShapeId::Plane);
        shape.rotate(90.0);
        assert_eq!(shape.working_vertices(), shape.base_vertices());
        // (0, 76) rotated by 90° is (-76, 0)
        let first = shape.display_vertices()[0];
        assert!((first.x + 76.0).abs() < TOL);
        assert!(first.y.abs() < TOL);
    }

    #[test]
    fn test_anchor_resize_round_trip() {
        let mut shape = ShapeState::new(ShapeId::Heart);
        let before = shape.working_vertices().to_vec();
        shape.resize(1.1, true, true);
        shape.resize(1.0 / 1.1, true, true);
        assert_close(shape.working_vertices(), &before);
        assert!((shape.scale_factor() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_compounds() {
        let mut shape = ShapeState::new(ShapeId::Plane);
        shape.resize(1.1, true, true);
        shape.resize(1.1, true, true);
        // (0, 76) -> (0, 76 * 1.21)
        let first = shape.working_vertices()[0];
        assert!((first.y - 76.0 * 1.21).abs() < TOL);
        assert!((shape.scale_factor() - 1.21).abs() < 1e-5);
    }

    #[test]
    fn test_axis_resize_touches_one_axis() {
        let mut shape = ShapeState::new(ShapeId::Plane);
        shape.resize(0.9, true, false);
        for (w, b) in shape.working_vertices().iter().zip(shape.base_vertices()) {
            assert!((w.x - b.x * 0.9).abs() < TOL);
            assert_eq!(w.y, b.y);
        }

        let mut shape = ShapeState::new(ShapeId::Plane);
        shape.resize(1.1, false, false);
        for (w, b) in shape.working_vertices().iter().zip(shape.base_vertices()) {
            assert_eq!(w.x, b.x);
            assert!((w.y - b.y * 1.1).abs() < TOL);
        }
    }

    #[test]
    fn test_resize_refreshes_rotation() {
        let mut shape = ShapeState::new(ShapeId::Tree);
        shape.rotate(180.0);
        shape.resize(2.0, true, true);
        let expected = Rotate::degrees(180.0).apply_all(shape.working_vertices());
        assert_close(shape.display_vertices(), &expected);
    }

    #[test]
    fn test_b_spline_once() {
        let mut shape = ShapeState::new(ShapeId::Heart);
        assert_eq!(shape.b_spline(2), Ok(true));
        let first = shape.working_vertices().to_vec();
        assert_eq!(first.len(), CURVE_SAMPLES);

        assert_eq!(shape.b_spline(2), Ok(false));
        assert_eq!(shape.b_spline(5), Ok(false));
        assert_eq!(shape.working_vertices(), &first[..]);
        assert!(shape.is_curved());
    }

    #[test]
    fn test_b_spline_invalid_degree_keeps_state() {
        let mut shape = ShapeState::new(ShapeId::Heart);
        let err = shape.b_spline(13).unwrap_err();
        assert_eq!(err, CurveError::InvalidDegree { degree: 13, points: 13 });
        assert!(!shape.is_curved());
        assert_eq!(shape.working_vertices(), shape.base_vertices());
    }

    #[test]
    fn test_curve_rotate_resize_scenario() {
        let mut shape = ShapeState::new(ShapeId::Plane);
        let curve = curve::fit(shape.base_vertices(), 2).unwrap();

        shape.b_spline(2).unwrap();
        shape.rotate(90.0);
        shape.resize(0.9, true, false);

        let display = shape.display_vertices();
        assert_eq!(display.len(), 100);
        // x scaled by 0.9, then rotated 90°: (x, y) -> (-y, 0.9 x)
        for &i in &[0usize, 37, 99] {
            let expected = Vertex::new(-curve[i].y, 0.9 * curve[i].x);
            assert!((display[i].x - expected.x).abs() < TOL);
            assert!((display[i].y - expected.y).abs() < TOL);
        }
    }

    #[test]
    fn test_translate_round_trip_is_exact() {
        let mut shape = ShapeState::new(ShapeId::Tree);
        let start = shape.translation();
        shape.translate(Axis::X, 5.0);
        shape.translate(Axis::X, -5.0);
        assert_eq!(shape.translation(), start);

        shape.translate(Axis::Y, 5.0);
        assert_eq!(shape.translation(), [0.0, -245.0, 0.0]);
    }

    #[test]
    fn test_color_follows_selection() {
        let mut shape = ShapeState::new(ShapeId::Heart).with_selected_color([1.0, 0.0, 0.0]);
        assert_eq!(shape.color(), crate::shapes::FIGURE_COLOR);
        shape.set_selected(true);
        assert_eq!(shape.color(), [1.0, 0.0, 0.0]);
        shape.set_selected(false);
        assert_eq!(shape.color(), crate::shapes::FIGURE_COLOR);
    }
}
