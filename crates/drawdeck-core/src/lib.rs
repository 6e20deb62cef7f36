//! Drawdeck Core Library
//!
//! Platform-agnostic drawing logic for the Drawdeck canvas: the per-tool
//! interaction state machine that turns pointer clicks into committed
//! elements, and the bounded snapshot history that backs undo/redo and
//! persistence. Rendering, toolbar widgets, and event routing live in
//! the embedding application.

pub mod elements;
pub mod geometry;
pub mod history;
pub mod session;
pub mod storage;
pub mod tools;

pub use elements::{Element, Rgba};
pub use history::{HistoryLog, PersistedHistory, Snapshot, MAX_HISTORY, SCHEMA_VERSION, STORAGE_KEY};
pub use session::DrawingSession;
pub use tools::{
    Preview, ToolController, ToolKind, ToolSettings, MAX_STROKE_WIDTH, MIN_STROKE_WIDTH,
    SNAP_THRESHOLD,
};
