#![cfg(feature = "egui")]

use eframe::egui;

use crate::config::VisualizerConfig;
use crate::session::Session;

/// Interactive eframe application: an input row, zoom controls and the bubble canvas.
pub struct CollatzApp {
    pub session: Session,
    /// Contents of the number text field.
    pub input: String,
    /// Animate the pre-filled input on the first frame, once the canvas size is known.
    pub animate_on_start: bool,
}

impl CollatzApp {
    /// Create the app; when `initial` is given the field is pre-filled and animated immediately.
    pub fn new(config: VisualizerConfig, initial: Option<String>) -> Self {
        let animate_on_start = initial.is_some();
        Self {
            session: Session::new(config),
            input: initial.unwrap_or_default(),
            animate_on_start,
        }
    }
}

impl eframe::App for CollatzApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::update(self, ctx);
    }
}
