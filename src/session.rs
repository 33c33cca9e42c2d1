//! Drawing session state machine.
//!
//! One gesture at a time: `Idle → Drawing` on pointer-down, back to `Idle`
//! on pointer-up (finished) or pointer-leave (cancelled). The `Drawing`
//! variant carries everything the gesture needs: the in-progress normalized
//! path and the brush settings frozen when the gesture began.
//!
//! The live path is kept at full fidelity; simplification happens once, in
//! [`Session::finish`]. Policy: preview renders the full path (dropping
//! points mid-stroke is visible under the pointer), only the committed
//! stroke is simplified.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::coords::{Point, simplify};
use crate::stroke::{BrushSettings, Stroke};

/// The active drawing gesture, if any.
#[derive(Debug, Clone, Default)]
pub enum Session {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A stroke is being drawn.
    Drawing {
        /// Normalized points accumulated so far, seeded with the down point.
        path: Vec<Point>,
        /// Brush settings snapshotted at pointer-down.
        settings: BrushSettings,
    },
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::Idle
    }

    /// Start a new gesture at `point`. The path is seeded immediately so a
    /// simple tap produces a one-point stroke. An in-flight gesture is
    /// replaced (a second pointer-down means the up event was lost).
    pub fn begin(&mut self, point: Point, settings: BrushSettings) {
        if matches!(self, Self::Drawing { .. }) {
            tracing::debug!("pointer-down during active gesture; restarting");
        }
        *self = Self::Drawing { path: vec![point], settings };
    }

    /// Append a point to the in-progress path. Ignored while idle (moves
    /// arrive constantly; only those inside a gesture matter).
    pub fn extend(&mut self, point: Point) {
        if let Self::Drawing { path, .. } = self {
            path.push(point);
        }
    }

    /// Finish the gesture: simplify the accumulated path with `tolerance`
    /// and return the frozen stroke. Returns `None` while idle or if the
    /// path is somehow empty — no empty stroke is ever produced.
    pub fn finish(&mut self, tolerance: f64) -> Option<Stroke> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Drawing { path, settings } => {
                if path.is_empty() {
                    return None;
                }
                Some(Stroke::new(simplify(&path, tolerance), settings))
            }
        }
    }

    /// Abandon the gesture without committing anything.
    pub fn cancel(&mut self) {
        if matches!(self, Self::Drawing { .. }) {
            tracing::debug!("gesture cancelled");
        }
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    /// The in-progress path, for live preview rendering.
    #[must_use]
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::Idle => None,
            Self::Drawing { path, .. } => Some(path),
        }
    }

    /// The settings frozen at pointer-down.
    #[must_use]
    pub fn settings(&self) -> Option<&BrushSettings> {
        match self {
            Self::Idle => None,
            Self::Drawing { settings, .. } => Some(settings),
        }
    }
}
