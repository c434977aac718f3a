use thiserror::Error;

use crate::curve::CurveError;
use crate::shapes::UnknownShape;

/// Errors reported by scene commands
///
/// None of these are fatal; the host logs them and keeps running.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error(transparent)]
    InvalidDegree(#[from] CurveError),

    #[error("No shape selected")]
    NoActiveSelection,

    #[error(transparent)]
    UnknownShapeId(#[from] UnknownShape),
}

impl SceneError {
    /// Whether this is the expected "nothing selected" no-op
    pub fn is_silent(&self) -> bool {
        matches!(self, SceneError::NoActiveSelection)
    }
}
