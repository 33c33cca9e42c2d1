//! Top-level drawing engine.
//!
//! [`EngineCore`] holds all logic that does not depend on a canvas element —
//! the gesture session, the per-shape history store, the current brush —
//! so it can be tested without WASM/browser dependencies. [`Engine`] wraps
//! the core together with the board and preview surfaces and performs the
//! actual drawing: live preview replay on every move, stroke stamping and
//! snapshotting on pointer-up.
//!
//! Input handlers return an [`Action`] for the host to process (emit as an
//! event, persist, or apply to the board image). Everything is synchronous
//! and single-threaded; the only writer is the UI event loop.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use web_sys::HtmlCanvasElement;

use crate::consts::DEFAULT_SIMPLIFY_TOLERANCE;
use crate::coords::{Rect, to_normalized_point};
use crate::error::Error;
use crate::history::{HistoryEntry, HistoryStore, ShapeId};
use crate::session::Session;
use crate::stroke::{BrushSettings, Stroke};
use crate::surface::{SurfaceKind, Surfaces};

/// Actions returned from engine handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// Nothing for the host to do.
    None,
    /// The preview surface changed (in-progress stroke updated or cleared).
    PreviewChanged,
    /// A stroke was finished and committed to the active shape's history.
    StrokeCommitted(Stroke),
    /// The cursor moved in history; the host should restore the board from
    /// this snapshot's image value.
    BoardRestore(HistoryEntry),
    /// The board content is stale and needs a host-driven re-render.
    RenderNeeded,
}

/// Core engine state — all logic that doesn't depend on the canvas elements.
///
/// Separated from [`Engine`] so it can be tested without a browser.
pub struct EngineCore {
    /// Current brush; snapshotted into the session at pointer-down.
    pub settings: BrushSettings,
    /// Douglas–Peucker tolerance applied when a stroke is finished, in
    /// normalized units.
    pub tolerance: f64,
    /// The active drawing gesture.
    pub session: Session,
    /// Per-shape undo/redo histories.
    pub history: HistoryStore,
    /// The shape that receives commits and history commands.
    pub active_shape: Option<ShapeId>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            settings: BrushSettings::default(),
            tolerance: DEFAULT_SIMPLIFY_TOLERANCE,
            session: Session::new(),
            history: HistoryStore::new(),
            active_shape: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Configuration ---

    /// Replace the brush settings used for subsequent strokes. An in-flight
    /// gesture keeps the settings it started with.
    pub fn set_settings(&mut self, settings: BrushSettings) {
        self.settings = settings;
    }

    /// Tune the simplification tolerance (normalized units).
    pub fn set_tolerance(&mut self, tolerance: f64) {
        self.tolerance = tolerance;
    }

    // --- Shapes ---

    /// Create a new shape with an empty history and make it active.
    pub fn create_shape(&mut self) -> ShapeId {
        let id = ShapeId::new_v4();
        self.history.register(id);
        self.active_shape = Some(id);
        tracing::debug!(shape = %id, "shape created");
        id
    }

    /// Select which shape receives commits and history commands.
    pub fn set_active_shape(&mut self, id: Option<ShapeId>) {
        self.active_shape = id;
    }

    // --- Pointer events ---

    /// Pointer-down inside `rect`: start a gesture seeded with the down
    /// point, brush settings frozen now.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64, rect: Rect) -> Action {
        let point = to_normalized_point(client_x, client_y, rect);
        self.session.begin(point, self.settings.clone());
        Action::PreviewChanged
    }

    /// Pointer-move: append to the in-progress path. Moves outside a gesture
    /// are ignored.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, rect: Rect) -> Action {
        if !self.session.is_drawing() {
            return Action::None;
        }
        self.session.extend(to_normalized_point(client_x, client_y, rect));
        Action::PreviewChanged
    }

    /// Pointer-up: finish the gesture, returning the simplified stroke ready
    /// for commit. `None` if no gesture was in progress.
    pub fn pointer_up(&mut self) -> Option<Stroke> {
        self.session.finish(self.tolerance)
    }

    /// Pointer left the surface (or an external clear): abandon the gesture.
    /// No partial commit is ever persisted.
    pub fn pointer_leave(&mut self) -> Action {
        self.session.cancel();
        Action::PreviewChanged
    }

    // --- Host commands ---

    /// Commit a snapshot of the board into the active shape's history.
    ///
    /// `value` is the board's image snapshot (data URL); `stroke` is present
    /// when the commit came from a drawing gesture.
    ///
    /// # Errors
    ///
    /// `NoActiveShape` if no shape is selected to receive the commit.
    pub fn save(&mut self, value: String, stroke: Option<Stroke>) -> Result<Action, Error> {
        let id = self.active_shape.ok_or(Error::NoActiveShape)?;
        let entry = HistoryEntry { value, stroke: stroke.clone() };
        self.history.commit(id, entry);
        Ok(match stroke {
            Some(stroke) => Action::StrokeCommitted(stroke),
            None => Action::RenderNeeded,
        })
    }

    /// Step the active shape's history back. Silent no-op at the floor or
    /// with no active shape.
    pub fn undo(&mut self) -> Action {
        match self.active_shape.and_then(|id| self.history.undo(id)) {
            Some(entry) => Action::BoardRestore(entry.clone()),
            None => Action::None,
        }
    }

    /// Step the active shape's history forward. Silent no-op at the ceiling
    /// or with no active shape.
    pub fn redo(&mut self) -> Action {
        match self.active_shape.and_then(|id| self.history.redo(id)) {
            Some(entry) => Action::BoardRestore(entry.clone()),
            None => Action::None,
        }
    }

    /// Collapse the active shape's history to one entry (the current cursor
    /// unless `keep_index` says otherwise). Irreversible. The surviving
    /// entry is returned as [`Action::BoardRestore`] so the host can redraw
    /// the board from it; `keep_index` may select an entry other than the
    /// one the board currently shows.
    pub fn clear_history(&mut self, keep_index: Option<usize>) -> Action {
        let Some(id) = self.active_shape else {
            return Action::None;
        };
        self.history.clear(id, keep_index);
        match self.history.current_snapshot(id) {
            Some(entry) => Action::BoardRestore(entry.clone()),
            None => Action::None,
        }
    }

    /// Delete the active shape's history entirely and deselect it. Any
    /// in-progress gesture is discarded.
    pub fn delete_shape(&mut self) -> Action {
        let Some(id) = self.active_shape.take() else {
            return Action::None;
        };
        self.history.delete(id);
        self.session.cancel();
        Action::RenderNeeded
    }

    // --- Queries ---

    /// The entry at the active shape's history cursor.
    #[must_use]
    pub fn current_snapshot(&self) -> Option<&HistoryEntry> {
        self.history.current_snapshot(self.active_shape?)
    }
}

/// The full drawing engine. Wraps [`EngineCore`] and owns the browser canvas
/// surfaces.
pub struct Engine {
    surfaces: Surfaces,
    pub core: EngineCore,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self { surfaces: Surfaces::new(), core: EngineCore::new() }
    }

    /// Attach the persistent board canvas.
    pub fn attach_board(&mut self, canvas: HtmlCanvasElement) {
        self.surfaces.attach(SurfaceKind::Board, canvas);
    }

    /// Attach the ephemeral preview canvas.
    pub fn attach_preview(&mut self, canvas: HtmlCanvasElement) {
        self.surfaces.attach(SurfaceKind::Preview, canvas);
    }

    /// Resize both surfaces' backing stores. Stored paths are normalized,
    /// so existing strokes re-render correctly at the next redraw.
    pub fn set_size(&mut self, width: u32, height: u32) {
        for kind in [SurfaceKind::Board, SurfaceKind::Preview] {
            if let Some(canvas) = self.surfaces.canvas(kind) {
                canvas.set_width(width);
                canvas.set_height(height);
            }
        }
    }

    /// Bounding rect of the preview surface in client coordinates.
    fn surface_rect(&self) -> Result<Rect, Error> {
        let canvas = self
            .surfaces
            .canvas(SurfaceKind::Preview)
            .ok_or(Error::SurfaceNotAttached(SurfaceKind::Preview))?;
        let rect = canvas.get_bounding_client_rect();
        Ok(Rect::new(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    /// Replay the in-progress path onto the preview surface.
    fn redraw_preview(&self) -> Result<(), Error> {
        if let (Some(path), Some(settings)) = (self.core.session.path(), self.core.session.settings()) {
            self.surfaces.redraw(SurfaceKind::Preview, path, settings)
        } else {
            self.surfaces.clear(SurfaceKind::Preview)
        }
    }

    // --- Pointer events ---

    /// Pointer-down in client coordinates: start a gesture and show the
    /// seeded dot on the preview.
    ///
    /// # Errors
    ///
    /// Fails if the preview surface is missing or a canvas call fails.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) -> Result<Action, Error> {
        let rect = self.surface_rect()?;
        let action = self.core.pointer_down(client_x, client_y, rect);
        self.redraw_preview()?;
        Ok(action)
    }

    /// Pointer-move: extend the gesture and replay the preview. Cheap enough
    /// to run at native input-event frequency; allocates nothing beyond the
    /// appended point.
    ///
    /// # Errors
    ///
    /// Fails if the preview surface is missing or a canvas call fails.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) -> Result<Action, Error> {
        if !self.core.session.is_drawing() {
            return Ok(Action::None);
        }
        let rect = self.surface_rect()?;
        let action = self.core.pointer_move(client_x, client_y, rect);
        self.redraw_preview()?;
        Ok(action)
    }

    /// Pointer-up: finish the gesture, stamp the simplified stroke onto the
    /// board, clear the preview, snapshot the board, and commit.
    ///
    /// The commit target is checked before the board is touched: a gesture
    /// with no active shape is discarded whole, so the board never shows a
    /// stroke that no history entry records.
    ///
    /// # Errors
    ///
    /// Fails if a surface is missing, a canvas call fails, or no shape is
    /// active to receive the commit.
    pub fn pointer_up(&mut self) -> Result<Action, Error> {
        if self.core.session.is_drawing() && self.core.active_shape.is_none() {
            self.core.session.cancel();
            if self.surfaces.canvas(SurfaceKind::Preview).is_some() {
                self.surfaces.clear(SurfaceKind::Preview)?;
            }
            return Err(Error::NoActiveShape);
        }
        let Some(stroke) = self.core.pointer_up() else {
            self.surfaces.clear(SurfaceKind::Preview)?;
            return Ok(Action::None);
        };
        self.surfaces.paint(SurfaceKind::Board, stroke.points(), stroke.settings())?;
        self.surfaces.clear(SurfaceKind::Preview)?;
        let value = self.board_snapshot()?;
        self.core.save(value, Some(stroke))
    }

    /// Pointer left the surface: abandon the gesture and clear the preview.
    ///
    /// # Errors
    ///
    /// Fails if the preview surface is missing.
    pub fn pointer_leave(&mut self) -> Result<Action, Error> {
        let action = self.core.pointer_leave();
        self.surfaces.clear(SurfaceKind::Preview)?;
        Ok(action)
    }

    // --- Host commands ---

    /// Commit the board's current pixels as a new history entry for the
    /// active shape (a host-initiated save, no stroke attached).
    ///
    /// # Errors
    ///
    /// Fails if the board surface is missing or no shape is active.
    pub fn save(&mut self) -> Result<Action, Error> {
        let value = self.board_snapshot()?;
        self.core.save(value, None)
    }

    /// Step history back; the returned [`Action::BoardRestore`] carries the
    /// snapshot for the host to apply to the board image.
    pub fn undo(&mut self) -> Action {
        self.core.undo()
    }

    /// Step history forward; see [`Engine::undo`].
    pub fn redo(&mut self) -> Action {
        self.core.redo()
    }

    /// Collapse the active shape's history to a single entry; the returned
    /// [`Action::BoardRestore`] carries the surviving snapshot for the host
    /// to apply to the board image.
    pub fn clear_history(&mut self, keep_index: Option<usize>) -> Action {
        self.core.clear_history(keep_index)
    }

    /// Delete the active shape's history and wipe both surfaces.
    ///
    /// # Errors
    ///
    /// Fails if a surface is missing.
    pub fn delete_shape(&mut self) -> Result<Action, Error> {
        let action = self.core.delete_shape();
        self.surfaces.clear(SurfaceKind::Preview)?;
        self.surfaces.clear(SurfaceKind::Board)?;
        Ok(action)
    }

    // --- Snapshots ---

    /// Capture the board's current pixels as a data URL.
    fn board_snapshot(&self) -> Result<String, Error> {
        let canvas = self
            .surfaces
            .canvas(SurfaceKind::Board)
            .ok_or(Error::SurfaceNotAttached(SurfaceKind::Board))?;
        Ok(canvas.to_data_url()?)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
