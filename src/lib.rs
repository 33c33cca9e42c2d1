//! Freehand drawing and annotation engine for browser canvases.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns
//! the drawing side of an image viewer/editor: capturing pointer events into
//! normalized stroke paths, live preview rendering, Douglas–Peucker
//! simplification at commit time, and a per-shape undo/redo history of
//! canvas snapshots. The host UI layer is responsible only for wiring DOM
//! events to the engine and processing the resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`session`] | The pointer-down → pointer-up gesture state machine |
//! | [`history`] | Per-shape snapshot history with undo/redo |
//! | [`surface`] | Board/preview canvas surfaces and path rendering |
//! | [`coords`] | Coordinate normalization and path simplification |
//! | [`stroke`] | Stroke and brush-settings data model |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared defaults (tolerance, brush) |

pub mod consts;
pub mod coords;
pub mod engine;
pub mod error;
pub mod history;
pub mod session;
pub mod stroke;
pub mod surface;
