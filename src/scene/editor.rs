//! Scene - every figure plus the active selection
//!
//! The scene is the only owner of shape state. At most one figure is
//! selected; commands that edit a figure act on that one, and are no-ops
//! reported as `SceneError::NoActiveSelection` while nothing is selected.

use crate::shapes::{Axis, Rgb, ShapeId, ShapeState, Vertex, SELECTED_COLOR};

use super::command::{Applied, Command};
use super::error::SceneError;

/// All editable figures and the current selection
#[derive(Clone, Debug)]
pub struct Scene {
    /// One state per figure, indexed by `ShapeId::slot`
    shapes: Vec<ShapeState>,
    selected: Option<ShapeId>,
    selected_color: Rgb,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene with every figure in its initial state
    pub fn new() -> Self {
        Self::with_selected_color(SELECTED_COLOR)
    }

    /// Create a scene whose selection highlight uses `color`
    pub fn with_selected_color(color: Rgb) -> Self {
        Self {
            shapes: Self::fresh_shapes(color),
            selected: None,
            selected_color: color,
        }
    }

    fn fresh_shapes(selected_color: Rgb) -> Vec<ShapeState> {
        ShapeId::all()
            .iter()
            .map(|id| ShapeState::new(*id).with_selected_color(selected_color))
            .collect()
    }

    /// Apply one command
    ///
    /// Errors leave the scene untouched.
    pub fn apply(&mut self, command: Command) -> Result<Applied, SceneError> {
        log::debug!("Applying {:?}", command);

        if command.needs_selection() && self.selected.is_none() {
            return Err(SceneError::NoActiveSelection);
        }

        match command {
            Command::Select(id) => {
                self.select(id);
                Ok(Applied::Changed)
            }
            Command::Rotate(delta) => {
                self.rotate(delta)?;
                Ok(Applied::Changed)
            }
            Command::Resize {
                scale_delta,
                axis_is_x,
                anchor_mode,
            } => {
                self.resize(scale_delta, axis_is_x, anchor_mode)?;
                Ok(Applied::Changed)
            }
            Command::CurveFit(degree) => {
                if self.curve_fit(degree)? {
                    Ok(Applied::Changed)
                } else {
                    Ok(Applied::Unchanged)
                }
            }
            Command::Move { axis, delta } => {
                self.translate(axis, delta)?;
                Ok(Applied::Changed)
            }
            Command::Reset => {
                self.reset();
                Ok(Applied::Changed)
            }
            Command::Quit => Ok(Applied::Quit),
        }
    }

    /// Select a figure, or clear the selection
    pub fn select(&mut self, id: Option<ShapeId>) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
        self.selected = id;

        match id {
            Some(id) => {
                self.shapes[id.slot()].set_selected(true);
                log::info!("Selected {}", id);
            }
            None => log::info!("Selection cleared"),
        }
    }

    /// Look up a figure by name and select it
    pub fn select_by_name(&mut self, name: &str) -> Result<ShapeId, SceneError> {
        let id: ShapeId = name.parse()?;
        self.select(Some(id));
        Ok(id)
    }

    fn active_mut(&mut self) -> Result<&mut ShapeState, SceneError> {
        let id = self.selected.ok_or(SceneError::NoActiveSelection)?;
        Ok(&mut self.shapes[id.slot()])
    }

    pub fn rotate(&mut self, delta: f32) -> Result<(), SceneError> {
        self.active_mut()?.rotate(delta);
        Ok(())
    }

    pub fn resize(
        &mut self,
        scale_delta: f32,
        axis_is_x: bool,
        anchor_mode: bool,
    ) -> Result<(), SceneError> {
        self.active_mut()?.resize(scale_delta, axis_is_x, anchor_mode);
        Ok(())
    }

    /// Curve the selected figure; `Ok(false)` if it was already curved
    pub fn curve_fit(&mut self, degree: usize) -> Result<bool, SceneError> {
        let shape = self.active_mut()?;
        let applied = shape.b_spline(degree)?;
        if applied {
            log::info!("Curved {} (degree {})", shape.id(), degree);
        }
        Ok(applied)
    }

    pub fn translate(&mut self, axis: Axis, delta: f32) -> Result<(), SceneError> {
        self.active_mut()?.translate(axis, delta);
        Ok(())
    }

    /// Recreate every figure and clear the selection
    pub fn reset(&mut self) {
        self.shapes = Self::fresh_shapes(self.selected_color);
        self.selected = None;
        log::info!("Scene reset");
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selected
    }

    pub fn shape(&self, id: ShapeId) -> &ShapeState {
        &self.shapes[id.slot()]
    }

    pub fn display_vertices(&self, id: ShapeId) -> &[Vertex] {
        self.shape(id).display_vertices()
    }

    pub fn color(&self, id: ShapeId) -> Rgb {
        self.shape(id).color()
    }

    pub fn translation(&self, id: ShapeId) -> [f32; 3] {
        self.shape(id).translation()
    }
}
