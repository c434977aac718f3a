//! Scene module - figure collection, selection and command dispatch
//!
//! This module provides:
//! - `Command`, the discrete edits input handling can request
//! - `Scene`, which owns every figure and applies commands
//! - `SceneError` for recoverable command failures

mod command;
mod editor;
mod error;

pub use command::{Applied, Command};
pub use editor::Scene;
pub use error::SceneError;
