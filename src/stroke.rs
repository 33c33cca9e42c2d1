//! Stroke data model: brush settings and committed strokes.
//!
//! A `Stroke` is the frozen result of one drawing gesture: the simplified
//! normalized path plus the brush settings it was drawn with. Settings are
//! snapshotted into the session at pointer-down, so mutating the engine's
//! brush mid-drag never retroactively alters an in-flight or committed
//! stroke. Everything here serializes with serde so the host can persist
//! drawn content alongside its own state.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_OPACITY, DEFAULT_BRUSH_SIZE};
use crate::coords::Point;

/// Brush parameters applied to a stroke.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    /// CSS color string (hex, `rgb(...)`, named, etc.).
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Stroke width in surface pixels.
    pub size: f64,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_BRUSH_COLOR.to_string(),
            opacity: DEFAULT_BRUSH_OPACITY,
            size: DEFAULT_BRUSH_SIZE,
        }
    }
}

/// One committed freehand stroke: an ordered normalized path and the brush
/// settings frozen at the start of the gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
    settings: BrushSettings,
}

impl Stroke {
    #[must_use]
    pub fn new(points: Vec<Point>, settings: BrushSettings) -> Self {
        Self { points, settings }
    }

    /// The normalized path, in draw order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn settings(&self) -> &BrushSettings {
        &self.settings
    }

    /// A stroke from a tap with no drag: a single point, rendered as a dot.
    #[must_use]
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}
