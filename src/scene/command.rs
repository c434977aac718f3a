//! Commands - the discrete edits the host can request
//!
//! Input handling produces `Command`s; `Scene::apply` consumes them. Keeping
//! the two apart is what lets the editing logic run without a window.

use crate::shapes::{Axis, ShapeId};

/// One user-level edit
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Command {
    /// Select a figure, or clear the selection with `None`
    Select(Option<ShapeId>),
    /// Rotate the selection by this many degrees
    Rotate(f32),
    /// Scale the selection
    Resize {
        scale_delta: f32,
        axis_is_x: bool,
        anchor_mode: bool,
    },
    /// Smooth the selection with a spline of this degree
    CurveFit(usize),
    /// Move the selection along one axis
    Move { axis: Axis, delta: f32 },
    /// Recreate every figure in its initial state
    Reset,
    /// End the session
    Quit,
}

impl Command {
    /// Whether this command acts on the selected figure
    pub fn needs_selection(&self) -> bool {
        matches!(
            self,
            Command::Rotate(_)
                | Command::Resize { .. }
                | Command::CurveFit(_)
                | Command::Move { .. }
        )
    }
}

/// What applying a command did
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Applied {
    /// The scene changed
    Changed,
    /// Valid command with nothing to do (e.g. curving twice)
    Unchanged,
    /// The host should stop its frame loop
    Quit,
}
