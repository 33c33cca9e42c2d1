#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

fn settings(color: &str, size: f64) -> BrushSettings {
    BrushSettings { color: color.to_string(), opacity: 1.0, size }
}

// --- BrushSettings ---

#[test]
fn default_brush_matches_constants() {
    let b = BrushSettings::default();
    assert_eq!(b.color, DEFAULT_BRUSH_COLOR);
    assert_eq!(b.opacity, DEFAULT_BRUSH_OPACITY);
    assert_eq!(b.size, DEFAULT_BRUSH_SIZE);
}

#[test]
fn brush_serde_roundtrip() {
    let b = settings("#00ff88", 4.5);
    let json = serde_json::to_string(&b).unwrap();
    let back: BrushSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
}

// --- Stroke ---

#[test]
fn stroke_exposes_points_in_order() {
    let points = vec![Point::new(0.1, 0.1), Point::new(0.2, 0.1), Point::new(0.3, 0.2)];
    let s = Stroke::new(points.clone(), BrushSettings::default());
    assert_eq!(s.points(), points.as_slice());
}

#[test]
fn stroke_keeps_its_settings() {
    let s = Stroke::new(vec![Point::new(0.5, 0.5)], settings("blue", 2.0));
    assert_eq!(s.settings().color, "blue");
    assert_eq!(s.settings().size, 2.0);
}

#[test]
fn single_point_stroke_is_a_dot() {
    let dot = Stroke::new(vec![Point::new(0.5, 0.5)], BrushSettings::default());
    assert!(dot.is_dot());

    let line = Stroke::new(vec![Point::new(0.1, 0.1), Point::new(0.9, 0.9)], BrushSettings::default());
    assert!(!line.is_dot());
}

#[test]
fn stroke_serde_roundtrip() {
    let s = Stroke::new(
        vec![Point::new(0.1, 0.1), Point::new(0.2, 0.1)],
        settings("#123456", 3.0),
    );
    let json = serde_json::to_string(&s).unwrap();
    let back: Stroke = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
