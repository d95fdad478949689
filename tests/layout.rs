use std::num::NonZeroU64;

use collatz_viz::layout::{
    CanvasSize, Point, angle_step_degrees, arrow_segment, radial_layout, radius_step,
};
use collatz_viz::sequence::{Sequence, collatz_sequence};

const EPS: f32 = 1e-3;

fn seq(n: u64) -> Sequence {
    collatz_sequence(NonZeroU64::new(n).unwrap(), 10_000).unwrap()
}

#[test]
fn test_layout_of_six() {
    let canvas = CanvasSize::new(900.0, 630.0);
    let s = seq(6);
    assert_eq!(angle_step_degrees(s.len()), 40.0);
    assert!((radius_step(canvas, s.len()) - 630.0 / 18.0).abs() < EPS);

    let layout = radial_layout(&s, canvas);
    assert_eq!(layout.points.len(), 9);
    assert_eq!(layout.center, Point::new(450.0, 315.0));
    let values: Vec<u64> = layout.points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![6, 3, 10, 5, 16, 8, 4, 2, 1]);

    // First bubble sits exactly at the centre.
    assert_eq!(layout.points[0].pos(), layout.center);

    let r_step = 630.0 / 18.0;
    for (i, p) in layout.points.iter().enumerate() {
        let r = layout.center.distance(p.pos());
        assert!((r - i as f32 * r_step).abs() < EPS, "radius of point {i}");
        if i > 0 {
            let theta = (p.y - layout.center.y).atan2(p.x - layout.center.x).to_degrees();
            let expected = i as f32 * 40.0;
            let diff = (theta - expected).rem_euclid(360.0);
            assert!(diff < 0.01 || diff > 359.99, "angle of point {i}: {theta}");
        }
    }
}

#[test]
fn test_radius_uses_smaller_side() {
    let s = seq(6);
    let tall = radial_layout(&s, CanvasSize::new(400.0, 1000.0));
    let last = tall.points.last().unwrap();
    assert!((tall.center.distance(last.pos()) - 8.0 * 400.0 / 18.0).abs() < EPS);
}

#[test]
fn test_degenerate_canvas_gives_empty_layout() {
    let s = seq(6);
    assert!(radial_layout(&s, CanvasSize::new(0.0, 500.0)).is_empty());
    assert!(radial_layout(&s, CanvasSize::new(500.0, 0.0)).is_empty());
    assert!(CanvasSize::default().is_degenerate());
}

#[test]
fn test_single_point_layout() {
    let layout = radial_layout(&seq(1), CanvasSize::new(200.0, 100.0));
    assert_eq!(layout.points.len(), 1);
    assert_eq!(layout.points[0].pos(), Point::new(100.0, 50.0));
    assert_eq!(layout.points[0].value, 1);
}

#[test]
fn test_arrow_trimmed_to_rims() {
    let (a, b) = arrow_segment(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 20.0).unwrap();
    assert_eq!(a, Point::new(20.0, 0.0));
    assert_eq!(b, Point::new(80.0, 0.0));
}

#[test]
fn test_arrow_between_overlapping_bubbles() {
    let from = Point::new(0.0, 0.0);
    let to = Point::new(0.0, 30.0);
    assert_eq!(arrow_segment(from, to, 20.0), Some((from, to)));
    assert_eq!(arrow_segment(from, from, 20.0), None);
}
