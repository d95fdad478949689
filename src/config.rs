use serde::{Deserialize, Serialize};

use crate::layout::CanvasSize;

/// Default number of steps before a trajectory is abandoned.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Tunables of the visualizer. Built from command-line flags in `main`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    /// Initial inner size of the main window.
    pub window_size: CanvasSize,
    /// Inner size of the chart window.
    pub chart_size: CanvasSize,
    pub bubble_radius: f32,
    /// Fill colour of bubbles and the chart line, as RGB.
    pub accent: [u8; 3],
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    pub max_steps: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            window_size: CanvasSize::new(900.0, 700.0),
            chart_size: CanvasSize::new(800.0, 500.0),
            bubble_radius: 20.0,
            accent: [0xff, 0x2f, 0x5d],
            zoom_in_factor: 1.2,
            zoom_out_factor: 0.8,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}
