//! Figure canvas widget
//!
//! Draws every figure of a scene as a connected line strip.
//!
//! ## Coordinate System
//!
//! World coordinates are centred on the origin with y pointing up. The
//! visible world spans `world_width × world_height` units and is fitted
//! into the widget rectangle without distorting the aspect ratio.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};

use crate::scene::Scene;
use crate::settings::AppSettings;
use crate::shapes::{Rgb, ShapeId, Vertex};
use crate::transform::{Transform, Translate};

/// Convert a `[0, 1]` RGB triple to an egui color
pub fn to_color32(rgb: Rgb) -> Color32 {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgb(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

/// Display settings for the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasSettings {
    /// Background color
    pub background: Rgb,
    /// Line thickness in pixels
    pub line_width: f32,
    /// Whether to show grid lines
    pub show_grid: bool,
    /// Visible world width in figure units
    pub world_width: f32,
    /// Visible world height in figure units
    pub world_height: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

impl CanvasSettings {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            background: settings.background,
            line_width: settings.line_width,
            show_grid: settings.show_grid,
            world_width: settings.window_width,
            world_height: settings.window_height,
        }
    }
}

/// Canvas widget
pub struct Canvas {
    /// Display settings
    pub settings: CanvasSettings,
}

impl Canvas {
    pub fn with_settings(settings: CanvasSettings) -> Self {
        Self { settings }
    }

    /// Pixels per world unit for a given widget rectangle
    fn pixels_per_unit(&self, rect: Rect) -> f32 {
        (rect.width() / self.settings.world_width).min(rect.height() / self.settings.world_height)
    }

    /// Convert a world-space vertex to screen coordinates
    ///
    /// Note: Y is inverted (screen Y increases downward)
    fn world_to_screen(&self, vertex: Vertex, rect: Rect) -> Pos2 {
        let scale = self.pixels_per_unit(rect);
        let center = rect.center();
        Pos2::new(center.x + vertex.x * scale, center.y - vertex.y * scale)
    }

    /// Draw the canvas
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `scene` - Figures to draw
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&self, ui: &mut egui::Ui, scene: &Scene) -> egui::Response {
        let size: Vec2 = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, to_color32(self.settings.background));

        if self.settings.show_grid {
            self.draw_grid(&painter, rect);
        }

        // Selected figure last so it stays on top
        let mut ids = ShapeId::all().to_vec();
        ids.sort_by_key(|id| scene.shape(*id).is_selected());

        for id in ids {
            let [tx, ty, _] = scene.translation(id);
            let placed = Translate::new(tx, ty).apply_all(scene.display_vertices(id));
            self.draw_strip(&painter, rect, &placed, scene.color(id));
        }

        response
    }

    /// Draw the grid (10 divisions each way, axes highlighted)
    fn draw_grid(&self, painter: &egui::Painter, rect: Rect) {
        let grid_color = Color32::from_rgba_unmultiplied(200, 220, 220, 25);
        let axis_color = Color32::from_rgba_unmultiplied(200, 220, 220, 60);

        let stroke_grid = Stroke::new(0.5, grid_color);
        let stroke_axis = Stroke::new(1.0, axis_color);

        let half_w = self.settings.world_width / 2.0;
        let half_h = self.settings.world_height / 2.0;

        for i in 0..=10 {
            let t = i as f32 / 10.0;
            let stroke = if i == 5 { stroke_axis } else { stroke_grid };

            // Vertical lines
            let x = -half_w + t * self.settings.world_width;
            let top = self.world_to_screen(Vertex::new(x, half_h), rect);
            let bottom = self.world_to_screen(Vertex::new(x, -half_h), rect);
            painter.line_segment([top, bottom], stroke);

            // Horizontal lines
            let y = -half_h + t * self.settings.world_height;
            let left = self.world_to_screen(Vertex::new(-half_w, y), rect);
            let right = self.world_to_screen(Vertex::new(half_w, y), rect);
            painter.line_segment([left, right], stroke);
        }
    }

    /// Draw world-space vertices as one connected line strip
    fn draw_strip(&self, painter: &egui::Painter, rect: Rect, vertices: &[Vertex], color: Rgb) {
        if vertices.len() < 2 {
            return;
        }

        let points: Vec<Pos2> = vertices
            .iter()
            .map(|v| self.world_to_screen(*v, rect))
            .collect();

        let stroke = Stroke::new(self.settings.line_width, to_color32(color));
        painter.add(egui::Shape::line(points, stroke));
    }
}
