#![cfg(feature = "egui")]

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Stroke};

use crate::layout::Point;
use crate::session::Scene;

pub fn rgb_to_color32(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// Font size for a bubble label: 12pt, shrunk so long numbers stay inside the disc.
pub fn label_font_size(label: &str, radius: f32) -> f32 {
    // Proportional digits are roughly 0.6 em wide.
    let fit = (2.0 * radius * 0.9) / (label.chars().count().max(1) as f32 * 0.6);
    fit.clamp(6.0, 12.0)
}

/// Paint bubbles and arrows of `scene`, whose coordinates are relative to `origin`.
pub fn paint_scene(painter: &egui::Painter, origin: Pos2, scene: &Scene, accent: Color32) {
    let to_pos = |p: Point| Pos2::new(origin.x + p.x, origin.y + p.y);
    let outline = Stroke::new(2.0, Color32::BLACK);
    for b in &scene.bubbles {
        let c = to_pos(b.center);
        painter.circle(c, b.radius, accent, outline);
        painter.text(
            c,
            Align2::CENTER_CENTER,
            &b.label,
            FontId::proportional(label_font_size(&b.label, b.radius)),
            Color32::WHITE,
        );
    }
    for a in &scene.arrows {
        let from = to_pos(a.from);
        let to = to_pos(a.to);
        painter.arrow(from, to - from, outline);
    }
}
