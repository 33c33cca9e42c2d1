//! Per-shape undo/redo history of canvas snapshots.
//!
//! Each shape owns an ordered list of `HistoryEntry` snapshots plus a cursor
//! into that list. Commit appends at the cursor and discards any redo state
//! beyond it (standard linear-undo semantics); undo and redo move the cursor
//! and are silent no-ops at their bounds, since the host UI treats those as
//! routine button states rather than errors.
//!
//! Histories are keyed by a stable [`ShapeId`] (UUID). Positional indexes
//! into the host's shape collection never enter this crate; the host resolves
//! index→id at its own boundary, so reordering or deleting shapes cannot
//! corrupt the association.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::stroke::Stroke;

/// Stable identifier for a shape with drawable history.
pub type ShapeId = Uuid;

/// One committed, undoable snapshot of a shape's drawn content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Opaque image snapshot: a data URL or host-resolvable image URL.
    pub value: String,
    /// The stroke committed by this entry, when the entry came from a
    /// drawing gesture (a host-initiated save has no single stroke).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,
}

/// Linear undo history for a single shape.
///
/// Invariant: `cursor < entries.len()` whenever `entries` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the cursor, discarding any redo state beyond it,
    /// and move the cursor to the new entry.
    pub fn commit(&mut self, entry: HistoryEntry) {
        if !self.entries.is_empty() && self.cursor < self.entries.len() - 1 {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
    }

    /// Step the cursor back one entry and return the entry now current.
    /// No-op returning `None` when already at the oldest entry (or empty).
    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step the cursor forward one entry and return the entry now current.
    /// No-op returning `None` when already at the newest entry (or empty).
    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        if self.entries.is_empty() || self.cursor >= self.entries.len() - 1 {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    /// Collapse the history to the single entry at `keep_index` (the current
    /// cursor when `None`), discarding all others. Irreversible.
    pub fn clear(&mut self, keep_index: Option<usize>) {
        if self.entries.is_empty() {
            return;
        }
        let keep = keep_index.unwrap_or(self.cursor).min(self.entries.len() - 1);
        let kept = self.entries.swap_remove(keep);
        self.entries.clear();
        self.entries.push(kept);
        self.cursor = 0;
    }

    /// The entry at the cursor, or `None` if nothing was ever committed.
    #[must_use]
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.entries.is_empty() && self.cursor < self.entries.len() - 1
    }
}

/// Runtime store of histories for all shapes in the current session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryStore {
    shapes: HashMap<ShapeId, History>,
}

impl HistoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty history for a freshly created shape.
    pub fn register(&mut self, id: ShapeId) {
        self.shapes.entry(id).or_default();
    }

    /// Commit an entry into the shape's history, creating the history if the
    /// shape has never been drawn on.
    pub fn commit(&mut self, id: ShapeId, entry: HistoryEntry) {
        tracing::debug!(shape = %id, "history commit");
        self.shapes.entry(id).or_default().commit(entry);
    }

    pub fn undo(&mut self, id: ShapeId) -> Option<&HistoryEntry> {
        tracing::debug!(shape = %id, "history undo");
        self.shapes.get_mut(&id)?.undo()
    }

    pub fn redo(&mut self, id: ShapeId) -> Option<&HistoryEntry> {
        tracing::debug!(shape = %id, "history redo");
        self.shapes.get_mut(&id)?.redo()
    }

    /// Collapse a shape's history to a single entry. See [`History::clear`].
    pub fn clear(&mut self, id: ShapeId, keep_index: Option<usize>) {
        if let Some(history) = self.shapes.get_mut(&id) {
            history.clear(keep_index);
        }
    }

    /// Drop a shape's history entirely, returning it if it was present.
    pub fn delete(&mut self, id: ShapeId) -> Option<History> {
        tracing::debug!(shape = %id, "history delete");
        self.shapes.remove(&id)
    }

    /// The entry at the shape's cursor, or `None` for an unknown or
    /// never-drawn shape.
    #[must_use]
    pub fn current_snapshot(&self, id: ShapeId) -> Option<&HistoryEntry> {
        self.shapes.get(&id)?.current()
    }

    #[must_use]
    pub fn history(&self, id: ShapeId) -> Option<&History> {
        self.shapes.get(&id)
    }

    /// Number of shapes with a registered history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
