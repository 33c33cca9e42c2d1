//! Crate error type.
//!
//! Browser canvas calls fail with an untyped `JsValue`; this module lifts
//! those into a named error alongside the engine's own failure modes. A
//! missing surface is an error rather than a silent no-op: silently drawing
//! nothing is indistinguishable from "nothing to draw" and masks wiring
//! bugs in the host. Out-of-range undo/redo is deliberately *not* here;
//! those are routine UI states and surface as `Option`/no-op instead.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::surface::SurfaceKind;

#[derive(Debug, Error)]
pub enum Error {
    /// An operation needed a surface that the host has not attached yet.
    #[error("{0} surface is not attached")]
    SurfaceNotAttached(SurfaceKind),
    /// The canvas element refused to produce a 2d context.
    #[error("2d context unavailable on {0} surface")]
    ContextUnavailable(SurfaceKind),
    /// A commit/save was requested with no shape selected.
    #[error("no active shape to commit to")]
    NoActiveShape,
    /// A browser canvas API call failed.
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
