//! Coordinate conversions and path simplification.
//!
//! Pointer events arrive in client coordinates; everything stored by this
//! crate is normalized to `[0, 1]` relative to the drawing surface so that
//! strokes survive a surface resize unchanged. This module owns both
//! conversions plus the Douglas–Peucker simplification applied to a stroke
//! when it is finished. All functions here are pure.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

/// A point in normalized space: both components in `[0, 1]` as a fraction of
/// the surface's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of the target surface in client coordinates, as
/// supplied by the host layout (the shape of a `DOMRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

/// Convert client coordinates to canvas-space pixels, clamped to the rect.
///
/// The pointer may be captured outside the surface during a fast drag, so the
/// raw offset can be negative or past the far edge; the result is always
/// within `[0, width] × [0, height]`.
#[must_use]
pub fn to_canvas_point(client_x: f64, client_y: f64, rect: Rect) -> Point {
    Point {
        x: (client_x - rect.left).clamp(0.0, rect.width.max(0.0)),
        y: (client_y - rect.top).clamp(0.0, rect.height.max(0.0)),
    }
}

/// Convert client coordinates to normalized `[0, 1]` space.
///
/// A degenerate rect (zero or negative extent) maps everything to the origin
/// rather than producing NaN.
#[must_use]
pub fn to_normalized_point(client_x: f64, client_y: f64, rect: Rect) -> Point {
    let canvas = to_canvas_point(client_x, client_y, rect);
    Point {
        x: normalize(canvas.x, rect.width),
        y: normalize(canvas.y, rect.height),
    }
}

fn normalize(value: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        (value / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Douglas–Peucker path simplification.
///
/// Recursively keeps, between the endpoints of each chord, the point with the
/// maximum perpendicular distance when that distance exceeds `tolerance`;
/// all distances are compared in squared space to avoid square roots. The
/// first and last points are always preserved. Ties go to the first maximal
/// point in start→end scan order, so the output is deterministic.
///
/// Paths of two or fewer points are returned unchanged.
#[must_use]
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let tolerance_sq = tolerance * tolerance;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[points.len() - 1] = true;
    mark_kept(points, 0, points.len() - 1, tolerance_sq, &mut keep);

    points
        .iter()
        .zip(&keep)
        .filter(|&(_, &kept)| kept)
        .map(|(p, _)| *p)
        .collect()
}

/// Mark the points to keep between `first` and `last` (both already kept).
fn mark_kept(points: &[Point], first: usize, last: usize, tolerance_sq: f64, keep: &mut [bool]) {
    if last <= first + 1 {
        return;
    }

    let mut max_dist_sq = 0.0;
    let mut max_index = first;
    for i in (first + 1)..last {
        let dist_sq = chord_dist_sq(points[i], points[first], points[last]);
        if dist_sq > max_dist_sq {
            max_dist_sq = dist_sq;
            max_index = i;
        }
    }

    if max_dist_sq > tolerance_sq {
        keep[max_index] = true;
        mark_kept(points, first, max_index, tolerance_sq, keep);
        mark_kept(points, max_index, last, tolerance_sq, keep);
    }
}

/// Squared perpendicular distance from `p` to the chord through `a` and `b`.
///
/// Falls back to the squared distance to `a` when the chord is degenerate.
fn chord_dist_sq(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        let px = p.x - a.x;
        let py = p.y - a.y;
        return px * px + py * py;
    }
    let cross = dx * (a.y - p.y) - (a.x - p.x) * dy;
    (cross * cross) / len_sq
}
