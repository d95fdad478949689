//! Egui-based interactive window for the Collatz visualizer (feature = "egui").
//!
//! `state` holds the eframe application, `ui` turns egui input into session
//! commands each frame, `render` paints the session's scene and `chart` shows
//! the line chart in its own native viewport.

#![cfg(feature = "egui")]

mod chart;
mod render;
mod state;
mod ui;

pub use chart::{plot_sequence, show_chart_window};
pub use render::{label_font_size, paint_scene, rgb_to_color32};
pub use state::CollatzApp;
