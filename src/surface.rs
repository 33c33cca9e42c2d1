//! Drawing surfaces: the board and preview canvases.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. The board is the persistent surface
//! showing committed content; the preview is an ephemeral overlay for the
//! in-progress stroke, cleared and fully replayed on every pointer-move
//! (never incrementally diffed; replaying one stroke is cheap and keeps the
//! move handler idempotent).
//!
//! Paths are stored normalized, so every draw call scales by the surface's
//! pixel dimensions *at call time*; a resize simply changes the numbers read
//! on the next redraw.

use std::f64::consts::PI;
use std::fmt;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::coords::Point;
use crate::error::Error;
use crate::stroke::BrushSettings;

/// Which surface an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Persistent surface showing committed strokes/snapshots.
    Board,
    /// Ephemeral overlay showing the in-progress stroke.
    Preview,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board => write!(f, "board"),
            Self::Preview => write!(f, "preview"),
        }
    }
}

/// A resolved 2d context plus the surface's current pixel dimensions.
pub struct ResolvedContext {
    pub ctx: CanvasRenderingContext2d,
    pub width: f64,
    pub height: f64,
}

/// Registry of the two canvas elements, attached by the host after mount.
#[derive(Default)]
pub struct Surfaces {
    board: Option<HtmlCanvasElement>,
    preview: Option<HtmlCanvasElement>,
}

impl Surfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach (or replace) the canvas element for a surface.
    pub fn attach(&mut self, kind: SurfaceKind, canvas: HtmlCanvasElement) {
        match kind {
            SurfaceKind::Board => self.board = Some(canvas),
            SurfaceKind::Preview => self.preview = Some(canvas),
        }
    }

    #[must_use]
    pub fn canvas(&self, kind: SurfaceKind) -> Option<&HtmlCanvasElement> {
        match kind {
            SurfaceKind::Board => self.board.as_ref(),
            SurfaceKind::Preview => self.preview.as_ref(),
        }
    }

    /// Resolve a surface's 2d context and pixel dimensions.
    ///
    /// # Errors
    ///
    /// `SurfaceNotAttached` if the host never attached this surface,
    /// `ContextUnavailable` if the element refuses a 2d context.
    pub fn resolve(&self, kind: SurfaceKind) -> Result<ResolvedContext, Error> {
        let canvas = self.canvas(kind).ok_or(Error::SurfaceNotAttached(kind))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(Error::ContextUnavailable(kind))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::ContextUnavailable(kind))?;
        Ok(ResolvedContext {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }

    /// Erase the full visible area of a surface. Idempotent.
    ///
    /// # Errors
    ///
    /// Fails fast if the surface is not attached; see [`Surfaces::resolve`].
    pub fn clear(&self, kind: SurfaceKind) -> Result<(), Error> {
        let resolved = self.resolve(kind)?;
        resolved.ctx.clear_rect(0.0, 0.0, resolved.width, resolved.height);
        Ok(())
    }

    /// Clear the surface, then draw `path` with `settings`.
    ///
    /// Used for the live preview: the whole surface is replaced by the
    /// current state of the one in-progress stroke.
    ///
    /// # Errors
    ///
    /// See [`Surfaces::resolve`]; also fails if a canvas call fails.
    pub fn redraw(&self, kind: SurfaceKind, path: &[Point], settings: &BrushSettings) -> Result<(), Error> {
        let resolved = self.resolve(kind)?;
        resolved.ctx.clear_rect(0.0, 0.0, resolved.width, resolved.height);
        draw_path(&resolved, path, settings)
    }

    /// Draw `path` with `settings` on top of the surface's existing content.
    ///
    /// Used to stamp a committed stroke onto the board without erasing
    /// previously committed content.
    ///
    /// # Errors
    ///
    /// See [`Surfaces::redraw`].
    pub fn paint(&self, kind: SurfaceKind, path: &[Point], settings: &BrushSettings) -> Result<(), Error> {
        let resolved = self.resolve(kind)?;
        draw_path(&resolved, path, settings)
    }
}

/// Apply brush settings to a context ahead of a draw pass: round caps and
/// joins, `source-over` compositing, and either fill or stroke styling.
///
/// Must be called before every draw — context style does not persist across
/// a clear, and the host may share the context with other code.
///
/// # Errors
///
/// Fails if the compositing mode is rejected by the context.
pub fn configure_stroke(
    ctx: &CanvasRenderingContext2d,
    settings: &BrushSettings,
    is_fill: bool,
) -> Result<(), Error> {
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_global_composite_operation("source-over")?;
    ctx.set_global_alpha(settings.opacity);
    if is_fill {
        ctx.set_fill_style_str(&settings.color);
    } else {
        ctx.set_stroke_style_str(&settings.color);
        ctx.set_line_width(settings.size);
    }
    Ok(())
}

/// Draw a normalized path scaled to the surface's pixel dimensions.
///
/// Zero points draws nothing; one point draws a filled dot (tap feedback);
/// two or more draws a single polyline stroked once at the end, not
/// per-segment, to avoid visible seams at anti-aliased joins.
fn draw_path(resolved: &ResolvedContext, path: &[Point], settings: &BrushSettings) -> Result<(), Error> {
    let ctx = &resolved.ctx;
    match path {
        [] => Ok(()),
        [only] => {
            configure_stroke(ctx, settings, true)?;
            ctx.begin_path();
            ctx.arc(
                only.x * resolved.width,
                only.y * resolved.height,
                settings.size / 2.0,
                0.0,
                2.0 * PI,
            )?;
            ctx.fill();
            Ok(())
        }
        [first, rest @ ..] => {
            configure_stroke(ctx, settings, false)?;
            ctx.begin_path();
            ctx.move_to(first.x * resolved.width, first.y * resolved.height);
            for p in rest {
                ctx.line_to(p.x * resolved.width, p.y * resolved.height);
            }
            ctx.stroke();
            Ok(())
        }
    }
}
