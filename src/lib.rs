//! Freehand drawing canvas for the notebook app.
//!
//! This crate is compiled to WebAssembly and runs inside the notebook screen.
//! It owns the drawing overlay end to end: turning raw pointer events into
//! strokes, holding the stroke history, tracking the pen configuration chosen
//! in the tool panel, and painting the scene. The host layer is responsible
//! only for wiring DOM events to the engine, showing the panel widgets, and
//! acting on the returned [`engine::Action`]s (notably closing the overlay).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Strokes, the stroke store, and canvas state |
//! | [`input`] | The pointer gesture state machine |
//! | [`tool`] | Pen configuration and tool panel |
//! | [`render`] | Draw commands and the Canvas2D backend |
//! | [`hit`] | Hit-testing for the overlay buttons |
//! | [`viewport`] | Canvas-local coordinates and the host rectangle |
//! | [`color`] | Hex color values |
//! | [`settings`] | Host-supplied configuration record |
//! | [`consts`] | Shared constants (width bounds, palette, overlay geometry) |

pub mod color;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod settings;
pub mod tool;
pub mod viewport;
