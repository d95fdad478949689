//! Radial (spiral) placement of sequence values on the canvas.

use serde::{Deserialize, Serialize};

use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// A canvas with no drawable area; layouts and scenes on it are empty.
    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Anchor of one bubble: screen position plus the value it shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub x: f32,
    pub y: f32,
    pub value: u64,
}

impl BubblePoint {
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Bubble anchors for one sequence together with the canvas centre they were laid out around.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub center: Point,
    pub points: Vec<BubblePoint>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Angular distance between consecutive bubbles, in degrees.
pub fn angle_step_degrees(count: usize) -> f32 {
    if count == 0 { 0.0 } else { 360.0 / count as f32 }
}

/// Radial distance added per bubble so the last one stays roughly inside the canvas.
pub fn radius_step(canvas: CanvasSize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    canvas.width.min(canvas.height) / (2.0 * count as f32)
}

/// Lay out `seq` as an outward spiral around the canvas centre.
///
/// Point `i` sits at angle `i * 360/m` degrees and radius `i * min(W, H) / 2m`,
/// so the first value is exactly at the centre.
pub fn radial_layout(seq: &Sequence, canvas: CanvasSize) -> Layout {
    let center = canvas.center();
    if canvas.is_degenerate() || seq.is_empty() {
        return Layout { center, points: Vec::new() };
    }
    let m = seq.len();
    let angle_step = angle_step_degrees(m);
    let r_step = radius_step(canvas, m);
    let points = seq
        .values()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let theta = (i as f32 * angle_step).to_radians();
            let r = i as f32 * r_step;
            BubblePoint {
                x: center.x + r * theta.cos(),
                y: center.y + r * theta.sin(),
                value,
            }
        })
        .collect();
    Layout { center, points }
}

/// Segment for the arrow between two bubble centres, trimmed to the bubble rims.
///
/// Overlapping bubbles keep the untrimmed centre-to-centre segment. Returns
/// `None` only when both centres coincide.
pub fn arrow_segment(from: Point, to: Point, bubble_radius: f32) -> Option<(Point, Point)> {
    let d = from.distance(to);
    if d == 0.0 || !d.is_finite() {
        return None;
    }
    if d <= 2.0 * bubble_radius {
        return Some((from, to));
    }
    let ux = (to.x - from.x) / d;
    let uy = (to.y - from.y) / d;
    let start = Point::new(from.x + ux * bubble_radius, from.y + uy * bubble_radius);
    let end = Point::new(to.x - ux * bubble_radius, to.y - uy * bubble_radius);
    Some((start, end))
}
