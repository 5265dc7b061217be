//! Interactive geometry and transform engine for an in-browser image
//! annotation editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! annotation state behind the canvas: translating normalized pointer and
//! keyboard events into shape mutations, maintaining pan/zoom camera state,
//! hit-testing rotated shapes and their handles, recording undo/redo history,
//! and re-parameterizing the scene for natural-resolution export. The host
//! JavaScript layer is responsible only for wiring DOM events to the engine
//! and drawing the scene from the engine's read accessors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`store`] | In-memory shape store, selection set, and global style |
//! | [`history`] | Undo/redo log over structural shape-list snapshots |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing shape bodies and handles |
//! | [`geom`] | Rotated-rectangle and polygon math, handle placement |
//! | [`export`] | Natural-resolution export layout and the JSON wire format |
//! | [`consts`] | Shared numeric constants (zoom limits, minimum sizes, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod export;
pub mod geom;
pub mod history;
pub mod hit;
pub mod input;
pub mod store;
