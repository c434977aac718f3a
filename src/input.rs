//! Input mapping - turns keyboard and scroll input into scene commands
//!
//! ## Controls
//!
//! | Input          | Command                              |
//! |----------------|--------------------------------------|
//! | `1` `2` `3`    | select Plane / Tree / Heart          |
//! | `4`            | clear selection                      |
//! | `R`            | reset every figure                   |
//! | `K` / `L`      | rotate counter-clockwise / clockwise |
//! | arrows         | move                                 |
//! | `C`            | smooth into a spline curve           |
//! | `W` / `S`      | grow / shrink vertically             |
//! | `A` / `D`      | grow / shrink horizontally           |
//! | scroll up/down | grow / shrink uniformly              |
//! | `Esc`          | quit                                 |

use eframe::egui::{self, Key};

use crate::scene::Command;
use crate::settings::AppSettings;
use crate::shapes::{Axis, ShapeId};

/// Step sizes used when translating input into commands
#[derive(Clone, Debug, PartialEq)]
pub struct KeyMap {
    pub rotation_step: f32,
    pub move_step: f32,
    pub grow_factor: f32,
    pub shrink_factor: f32,
    pub curve_degree: usize,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

impl KeyMap {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            rotation_step: settings.rotation_step,
            move_step: settings.move_step,
            grow_factor: settings.grow_factor,
            shrink_factor: settings.shrink_factor,
            curve_degree: settings.curve_degree,
        }
    }

    fn resize(scale_delta: f32, axis_is_x: bool, anchor_mode: bool) -> Command {
        Command::Resize {
            scale_delta,
            axis_is_x,
            anchor_mode,
        }
    }

    fn slot(slot: usize) -> Option<Command> {
        match ShapeId::from_slot(slot) {
            Ok(id) => Some(Command::Select(Some(id))),
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    /// Command for a key press, if the key is bound
    pub fn key(&self, key: Key) -> Option<Command> {
        let command = match key {
            Key::Num1 => return Self::slot(0),
            Key::Num2 => return Self::slot(1),
            Key::Num3 => return Self::slot(2),
            Key::Num4 => Command::Select(None),
            Key::R => Command::Reset,
            Key::Escape => Command::Quit,

            Key::K => Command::Rotate(self.rotation_step),
            Key::L => Command::Rotate(-self.rotation_step),

            Key::ArrowUp => Command::Move {
                axis: Axis::Y,
                delta: self.move_step,
            },
            Key::ArrowDown => Command::Move {
                axis: Axis::Y,
                delta: -self.move_step,
            },
            Key::ArrowLeft => Command::Move {
                axis: Axis::X,
                delta: -self.move_step,
            },
            Key::ArrowRight => Command::Move {
                axis: Axis::X,
                delta: self.move_step,
            },

            Key::C => Command::CurveFit(self.curve_degree),

            Key::W => Self::resize(self.grow_factor, false, false),
            Key::S => Self::resize(self.shrink_factor, false, false),
            Key::A => Self::resize(self.grow_factor, true, false),
            Key::D => Self::resize(self.shrink_factor, true, false),

            _ => return None,
        };
        Some(command)
    }

    /// Command for a vertical scroll amount (positive = up)
    pub fn scroll(&self, delta_y: f32) -> Option<Command> {
        if delta_y > 0.0 {
            Some(Self::resize(self.grow_factor, true, true))
        } else if delta_y < 0.0 {
            Some(Self::resize(self.shrink_factor, true, true))
        } else {
            None
        }
    }

    /// Collect this frame's commands, in the order the input arrived
    pub fn collect(&self, input: &egui::InputState) -> Vec<Command> {
        let mut commands: Vec<Command> = input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => self.key(*key),
                _ => None,
            })
            .collect();

        commands.extend(self.scroll(input.raw_scroll_delta.y));
        commands
    }
}
