//! Visualizer session: the state behind one window and the commands that change it.
//!
//! The frontend turns UI events into [`Command`]s, feeds them to
//! [`Session::handle`] and paints whatever [`Session::scene`] returns. Nothing
//! here depends on egui, so every interaction can be driven from tests.

use tracing::{debug, info, warn};

use crate::chart::ChartView;
use crate::config::VisualizerConfig;
use crate::error::InputError;
use crate::input::parse_start;
use crate::layout::{CanvasSize, Layout, Point, arrow_segment, radial_layout};
use crate::sequence::{Sequence, collatz_sequence};

/// Everything the user can do to the canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Parse `input`, generate its sequence and lay it out on a canvas of the given size.
    Animate { input: String, canvas: CanvasSize },
    ZoomIn,
    ZoomOut,
    /// Pan button pressed at a canvas-local pointer position.
    PanStart(Point),
    /// Pointer moved while the pan button is held.
    PanDrag(Point),
    PanEnd,
    CloseChart,
    DismissError,
}

/// What a command did, so the frontend knows what to refresh.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Redraw,
    /// A new sequence was laid out and its chart opened.
    ChartOpened,
    Rejected(InputError),
    Ignored,
}

/// Viewport translation applied after zoom.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub dx: f32,
    pub dy: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub center: Point,
    pub radius: f32,
    pub value: u64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub from: Point,
    pub to: Point,
}

/// Draw instructions in canvas-local coordinates (origin at the top-left corner).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub bubbles: Vec<Bubble>,
    pub arrows: Vec<Arrow>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty() && self.arrows.is_empty()
    }
}

/// Short description of the current sequence for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub start: u64,
    pub steps: usize,
    pub peak: u64,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: VisualizerConfig,
    sequence: Option<Sequence>,
    layout: Option<Layout>,
    zoom: f32,
    pan: PanOffset,
    /// Pointer position and offset at the moment panning started.
    pan_mark: Option<(Point, PanOffset)>,
    chart: Option<ChartView>,
    error: Option<InputError>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(VisualizerConfig::default())
    }
}

impl Session {
    pub fn new(config: VisualizerConfig) -> Self {
        Self {
            config,
            sequence: None,
            layout: None,
            zoom: 1.0,
            pan: PanOffset::default(),
            pan_mark: None,
            chart: None,
            error: None,
        }
    }

    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn sequence(&self) -> Option<&Sequence> {
        self.sequence.as_ref()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    pub fn is_panning(&self) -> bool {
        self.pan_mark.is_some()
    }

    pub fn chart(&self) -> Option<&ChartView> {
        self.chart.as_ref().filter(|c| c.open)
    }

    /// Error waiting to be shown in the input dialog.
    pub fn error(&self) -> Option<&InputError> {
        self.error.as_ref()
    }

    pub fn summary(&self) -> Option<Summary> {
        self.sequence.as_ref().map(|s| Summary {
            start: s.start(),
            steps: s.steps(),
            peak: s.peak(),
        })
    }

    /// Apply one command.
    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!(?command, "handling command");
        match command {
            Command::Animate { input, canvas } => self.animate(&input, canvas),
            Command::ZoomIn => self.zoom_by(self.config.zoom_in_factor),
            Command::ZoomOut => self.zoom_by(self.config.zoom_out_factor),
            Command::PanStart(pos) => {
                self.pan_mark = Some((pos, self.pan));
                Outcome::Ignored
            }
            Command::PanDrag(pos) => self.pan_to(pos),
            Command::PanEnd => {
                self.pan_mark = None;
                Outcome::Ignored
            }
            Command::CloseChart => match self.chart.as_mut() {
                Some(c) if c.open => {
                    c.open = false;
                    Outcome::Redraw
                }
                _ => Outcome::Ignored,
            },
            Command::DismissError => {
                if self.error.take().is_some() { Outcome::Redraw } else { Outcome::Ignored }
            }
        }
    }

    // Input is validated before anything is cleared, so a rejected value
    // leaves the previous drawing in place.
    fn animate(&mut self, input: &str, canvas: CanvasSize) -> Outcome {
        let seq = match parse_start(input)
            .and_then(|n| collatz_sequence(n, self.config.max_steps).map_err(InputError::from))
        {
            Ok(seq) => seq,
            Err(e) => {
                warn!(input, error = %e, "rejected input");
                self.error = Some(e.clone());
                return Outcome::Rejected(e);
            }
        };
        let layout = radial_layout(&seq, canvas);
        info!(
            start = seq.start(),
            steps = seq.steps(),
            peak = seq.peak(),
            bubbles = layout.points.len(),
            "animated sequence"
        );
        self.chart = Some(ChartView::from_sequence(&seq));
        self.sequence = Some(seq);
        self.layout = Some(layout);
        self.zoom = 1.0;
        self.pan = PanOffset::default();
        self.pan_mark = None;
        self.error = None;
        Outcome::ChartOpened
    }

    fn zoom_by(&mut self, factor: f32) -> Outcome {
        if self.layout.is_none() {
            return Outcome::Ignored;
        }
        self.zoom *= factor;
        debug!(zoom = self.zoom, "zoom changed");
        Outcome::Redraw
    }

    fn pan_to(&mut self, pos: Point) -> Outcome {
        let Some((mark, base)) = self.pan_mark else {
            return Outcome::Ignored;
        };
        self.pan = PanOffset {
            dx: base.dx + (pos.x - mark.x),
            dy: base.dy + (pos.y - mark.y),
        };
        Outcome::Redraw
    }

    /// Map a stored layout point onto the canvas: scale its offset from the
    /// layout centre by the zoom level, then translate by the pan offset.
    pub fn to_screen(&self, p: Point, canvas: CanvasSize) -> Point {
        let layout_center = self.layout.as_ref().map(|l| l.center).unwrap_or(canvas.center());
        let c = canvas.center();
        Point::new(
            c.x + (p.x - layout_center.x) * self.zoom + self.pan.dx,
            c.y + (p.y - layout_center.y) * self.zoom + self.pan.dy,
        )
    }

    /// Draw instructions for the stored layout on a canvas of the given size.
    pub fn scene(&self, canvas: CanvasSize) -> Scene {
        let Some(layout) = self.layout.as_ref() else {
            return Scene::default();
        };
        if canvas.is_degenerate() {
            return Scene::default();
        }
        let radius = self.config.bubble_radius;
        let centers: Vec<Point> = layout
            .points
            .iter()
            .map(|p| self.to_screen(p.pos(), canvas))
            .collect();
        let bubbles = layout
            .points
            .iter()
            .zip(&centers)
            .map(|(p, &center)| Bubble {
                center,
                radius,
                value: p.value,
                label: p.value.to_string(),
            })
            .collect();
        let arrows = centers
            .windows(2)
            .filter_map(|w| arrow_segment(w[0], w[1], radius))
            .map(|(from, to)| Arrow { from, to })
            .collect();
        Scene { bubbles, arrows }
    }
}
