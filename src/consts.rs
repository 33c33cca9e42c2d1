//! Shared constants and defaults for the drawing engine.

/// Default Douglas–Peucker tolerance in normalized units (0.5% of the canvas
/// extent). Small enough to preserve visual shape; exposed as a tunable on
/// the engine rather than a contract.
pub const DEFAULT_SIMPLIFY_TOLERANCE: f64 = 0.005;

/// Default brush color as a CSS color string.
pub const DEFAULT_BRUSH_COLOR: &str = "#ff0000";

/// Default brush opacity (fully opaque).
pub const DEFAULT_BRUSH_OPACITY: f64 = 1.0;

/// Default stroke width in surface pixels.
pub const DEFAULT_BRUSH_SIZE: f64 = 10.0;
