#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn rect_100() -> Rect {
    Rect::new(0.0, 0.0, 100.0, 100.0)
}

// --- to_canvas_point ---

#[test]
fn canvas_point_inside_rect() {
    let p = to_canvas_point(30.0, 40.0, rect_100());
    assert!(point_approx_eq(p, Point::new(30.0, 40.0)));
}

#[test]
fn canvas_point_subtracts_rect_origin() {
    let rect = Rect::new(50.0, 20.0, 100.0, 100.0);
    let p = to_canvas_point(80.0, 60.0, rect);
    assert!(point_approx_eq(p, Point::new(30.0, 40.0)));
}

#[test]
fn canvas_point_clamps_negative() {
    let p = to_canvas_point(-500.0, -1.0, rect_100());
    assert!(point_approx_eq(p, Point::new(0.0, 0.0)));
}

#[test]
fn canvas_point_clamps_past_far_edge() {
    let p = to_canvas_point(1e6, 101.0, rect_100());
    assert!(point_approx_eq(p, Point::new(100.0, 100.0)));
}

#[test]
fn canvas_point_always_within_bounds() {
    let rect = Rect::new(10.0, 10.0, 200.0, 150.0);
    let wild = [(-1e9, -1e9), (1e9, 1e9), (0.0, 1e9), (1e9, 0.0), (15.0, 15.0)];
    for (cx, cy) in wild {
        let p = to_canvas_point(cx, cy, rect);
        assert!(p.x >= 0.0 && p.x <= rect.width, "x out of range: {}", p.x);
        assert!(p.y >= 0.0 && p.y <= rect.height, "y out of range: {}", p.y);
    }
}

// --- to_normalized_point ---

#[test]
fn normalized_point_basic() {
    let p = to_normalized_point(10.0, 10.0, rect_100());
    assert!(point_approx_eq(p, Point::new(0.1, 0.1)));
}

#[test]
fn normalized_point_with_offset_rect() {
    let rect = Rect::new(100.0, 200.0, 400.0, 300.0);
    let p = to_normalized_point(300.0, 350.0, rect);
    assert!(point_approx_eq(p, Point::new(0.5, 0.5)));
}

#[test]
fn normalized_point_always_in_unit_range() {
    let rect = Rect::new(25.0, 75.0, 640.0, 480.0);
    let wild = [(-1e9, 1e9), (1e9, -1e9), (0.0, 0.0), (665.0, 555.0), (664.9, 75.0)];
    for (cx, cy) in wild {
        let p = to_normalized_point(cx, cy, rect);
        assert!((0.0..=1.0).contains(&p.x), "x out of range: {}", p.x);
        assert!((0.0..=1.0).contains(&p.y), "y out of range: {}", p.y);
    }
}

#[test]
fn normalized_point_corners() {
    assert!(point_approx_eq(to_normalized_point(0.0, 0.0, rect_100()), Point::new(0.0, 0.0)));
    assert!(point_approx_eq(to_normalized_point(100.0, 100.0, rect_100()), Point::new(1.0, 1.0)));
}

#[test]
fn normalized_point_degenerate_rect_yields_origin_not_nan() {
    let rect = Rect::new(0.0, 0.0, 0.0, 0.0);
    let p = to_normalized_point(50.0, 50.0, rect);
    assert_eq!(p, Point::new(0.0, 0.0));
}

// --- simplify: small inputs ---

#[test]
fn simplify_empty_is_empty() {
    assert!(simplify(&[], 0.01).is_empty());
}

#[test]
fn simplify_single_point_unchanged() {
    let p = vec![Point::new(0.5, 0.5)];
    assert_eq!(simplify(&p, 0.01), p);
}

#[test]
fn simplify_two_points_unchanged() {
    let p = vec![Point::new(0.1, 0.1), Point::new(0.2, 0.1)];
    assert_eq!(simplify(&p, 0.01), p);
}

// --- simplify: behavior ---

#[test]
fn simplify_drops_collinear_interior_points() {
    let p: Vec<Point> = (0..=10).map(|i| Point::new(f64::from(i) / 10.0, 0.5)).collect();
    let out = simplify(&p, 0.001);
    assert_eq!(out, vec![Point::new(0.0, 0.5), Point::new(1.0, 0.5)]);
}

#[test]
fn simplify_keeps_corner_above_tolerance() {
    let p = vec![
        Point::new(0.0, 0.0),
        Point::new(0.5, 0.5),
        Point::new(1.0, 0.0),
    ];
    let out = simplify(&p, 0.01);
    assert_eq!(out, p);
}

#[test]
fn simplify_drops_jitter_below_tolerance() {
    let p = vec![
        Point::new(0.0, 0.0),
        Point::new(0.5, 0.001),
        Point::new(1.0, 0.0),
    ];
    let out = simplify(&p, 0.01);
    assert_eq!(out, vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]);
}

#[test]
fn simplify_preserves_endpoints() {
    let p: Vec<Point> = (0..50)
        .map(|i| {
            let t = f64::from(i) / 49.0;
            Point::new(t, (t * 12.0).sin() * 0.25 + 0.5)
        })
        .collect();
    let out = simplify(&p, 0.02);
    assert_eq!(out.first(), p.first());
    assert_eq!(out.last(), p.last());
}

#[test]
fn simplify_never_increases_point_count() {
    let p: Vec<Point> = (0..100)
        .map(|i| {
            let t = f64::from(i) / 99.0;
            Point::new(t, (t * 40.0).cos() * 0.3 + 0.5)
        })
        .collect();
    for tol in [0.0001, 0.001, 0.01, 0.1] {
        assert!(simplify(&p, tol).len() <= p.len());
    }
}

#[test]
fn simplify_is_idempotent() {
    let p: Vec<Point> = (0..60)
        .map(|i| {
            let t = f64::from(i) / 59.0;
            Point::new(t, (t * 9.0).sin() * 0.4 + 0.5)
        })
        .collect();
    let once = simplify(&p, 0.01);
    let twice = simplify(&once, 0.01);
    assert_eq!(once, twice);
}

#[test]
fn simplify_is_deterministic() {
    let p: Vec<Point> = (0..30)
        .map(|i| {
            let t = f64::from(i) / 29.0;
            Point::new(t, (t * 7.0).sin() * 0.3)
        })
        .collect();
    assert_eq!(simplify(&p, 0.005), simplify(&p, 0.005));
}

#[test]
fn simplify_tie_goes_to_first_maximal_point() {
    // Two interior points at equal distance from the chord; the first in
    // scan order must be the one kept at the top level.
    let p = vec![
        Point::new(0.0, 0.0),
        Point::new(0.25, 0.5),
        Point::new(0.75, 0.5),
        Point::new(1.0, 0.0),
    ];
    let out = simplify(&p, 0.01);
    // Both survive here (each exceeds tolerance in its sub-segment), but the
    // split pivot is the first — the output ordering must be stable.
    assert_eq!(out, p);
}

#[test]
fn simplify_closed_loop_degenerate_chord() {
    // First and last points coincide, so the top-level chord has zero
    // length; distances fall back to point distance from the shared end.
    let p = vec![
        Point::new(0.5, 0.5),
        Point::new(0.9, 0.5),
        Point::new(0.5, 0.9),
        Point::new(0.5, 0.5),
    ];
    let out = simplify(&p, 0.01);
    assert_eq!(out.first(), p.first());
    assert_eq!(out.last(), p.last());
    assert!(out.len() >= 3);
}

#[test]
fn simplify_zero_tolerance_keeps_noncollinear_points() {
    let p = vec![
        Point::new(0.0, 0.0),
        Point::new(0.3, 0.1),
        Point::new(0.6, 0.05),
        Point::new(1.0, 0.2),
    ];
    assert_eq!(simplify(&p, 0.0), p);
}

// --- chord_dist_sq ---

#[test]
fn chord_dist_perpendicular() {
    let d = chord_dist_sq(Point::new(0.5, 0.5), Point::new(0.0, 0.0), Point::new(1.0, 0.0));
    assert!(approx_eq(d, 0.25));
}

#[test]
fn chord_dist_on_the_chord_is_zero() {
    let d = chord_dist_sq(Point::new(0.5, 0.5), Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    assert!(approx_eq(d, 0.0));
}

#[test]
fn chord_dist_degenerate_chord_falls_back_to_point_distance() {
    let d = chord_dist_sq(Point::new(0.3, 0.4), Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert!(approx_eq(d, 0.25));
}
