//! figure-lab - Interactive 2D figure editor
//!
//! Shows a plane, a tree and a heart outline. The selected figure can be
//! rotated, scaled, moved, and smoothed into a B-spline curve.
//!
//! ## Frame loop
//! Each frame the host:
//! - maps this frame's keyboard/scroll input to `Command`s
//! - applies them to the `Scene` in arrival order
//! - draws every figure

use std::time::Duration;

use eframe::egui;

mod curve;
mod input;
mod render;
mod scene;
mod settings;
mod shapes;
mod transform;

use input::KeyMap;
use render::{Canvas, CanvasSettings};
use scene::{Applied, Command, Scene};
use settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting figure-lab");

    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(settings.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "figure-lab",
        options,
        Box::new(|_cc| Ok(Box::new(FigureApp::new(settings)))),
    )
}

/// Main application state
struct FigureApp {
    scene: Scene,
    settings: AppSettings,
    settings_dirty: bool,
}

impl FigureApp {
    fn new(settings: AppSettings) -> Self {
        let mut scene = Scene::with_selected_color(settings.selected_color);

        if let Some(name) = &settings.initial_selection {
            if let Err(e) = scene.select_by_name(name) {
                log::warn!("Ignoring initial selection: {}", e);
            }
        }

        Self {
            scene,
            settings,
            settings_dirty: false,
        }
    }

    /// Apply commands in order; returns true when the session should end
    fn handle_commands(&mut self, commands: Vec<Command>) -> bool {
        for command in commands {
            match self.scene.apply(command) {
                Ok(Applied::Quit) => return true,
                Ok(_) => {}
                Err(e) if e.is_silent() => log::debug!("Ignored {:?}: {}", command, e),
                Err(e) => log::warn!("{:?} failed: {}", command, e),
            }
        }
        false
    }

    fn status_text(&self) -> String {
        match self.scene.selected() {
            Some(id) => {
                let shape = self.scene.shape(id);
                format!(
                    "{} | angle {:.0}° | scale {:.3} | {} | {} points (outline {})",
                    id,
                    shape.rotation_angle(),
                    shape.scale_factor(),
                    if shape.is_curved() { "curved" } else { "polygon" },
                    shape.display_vertices().len(),
                    shape.base_vertices().len(),
                )
            }
            None => "Nothing selected (press 1, 2 or 3)".to_string(),
        }
    }

    fn settings_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings_panel")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Controls");
                ui.separator();

                let s = &mut self.settings;
                let mut changed = false;
                changed |= ui
                    .add(egui::Slider::new(&mut s.rotation_step, 1.0..=45.0).text("Rotate step (°)"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut s.move_step, 1.0..=50.0).text("Move step"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut s.grow_factor, 1.01..=2.0).text("Grow factor"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut s.shrink_factor, 0.5..=0.99).text("Shrink factor"))
                    .changed();
                changed |= ui
                    .add(egui::Slider::new(&mut s.curve_degree, 1..=5).text("Curve degree"))
                    .changed();

                ui.separator();
                ui.collapsing("Display", |ui| {
                    changed |= ui
                        .add(egui::Slider::new(&mut s.line_width, 0.5..=5.0).text("Line width"))
                        .changed();
                    changed |= ui.checkbox(&mut s.show_grid, "Show grid").changed();
                });

                self.settings_dirty |= changed;
            });
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let fps = self.settings.fps.max(1);
        ctx.request_repaint_after(Duration::from_secs_f32(1.0 / fps as f32));

        // Input pass; typing into widgets must not edit figures
        let commands = if ctx.wants_keyboard_input() {
            Vec::new()
        } else {
            let keymap = KeyMap::from_settings(&self.settings);
            ctx.input(|i| keymap.collect(i))
        };
        let quit = self.handle_commands(commands);

        let closing = quit || ctx.input(|i| i.viewport().close_requested());
        if closing && self.settings_dirty {
            self.settings.save();
            self.settings_dirty = false;
        }
        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("figure-lab");
                ui.separator();
                if ui.toggle_value(&mut self.settings.show_settings, "⚙ Settings").changed() {
                    self.settings_dirty = true;
                }
                ui.separator();
                if ui.button("⟲ Reset").clicked() {
                    self.handle_commands(vec![Command::Reset]);
                }
            });
        });

        if self.settings.show_settings {
            self.settings_panel(ctx);
        }

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.small(self.status_text());
        });

        // Render pass
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let canvas = Canvas::with_settings(CanvasSettings::from_settings(&self.settings));
                canvas.show(ui, &self.scene);
            });
    }
}
