//! Top-level drawing session.
//!
//! Owns the toolbar settings, the tool state machine, and the history
//! log, and wires them together: a completing click turns into a new
//! snapshot (current elements plus the committed one) appended to the
//! log. Everything runs synchronously on the caller's thread; pointer
//! events, undo/redo, and cancel are processed strictly in arrival
//! order.

use crate::elements::{Element, Rgba};
use crate::history::{HistoryLog, PersistedHistory};
use crate::tools::{Preview, ToolController, ToolKind, ToolSettings};
use kurbo::Point;

/// A live drawing session over one canvas.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    settings: ToolSettings,
    tools: ToolController,
    history: HistoryLog,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSession {
    /// Create a session with an empty canvas.
    pub fn new() -> Self {
        Self {
            settings: ToolSettings::default(),
            tools: ToolController::new(),
            history: HistoryLog::new(),
        }
    }

    /// Create a session resuming from an existing history log.
    pub fn with_history(history: HistoryLog) -> Self {
        Self {
            settings: ToolSettings::default(),
            tools: ToolController::new(),
            history,
        }
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Select a tool. Switching always discards any in-progress gesture
    /// so a half-built element can never leak across tools.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tools.cancel();
        self.settings.tool = tool;
    }

    /// Set the stroke color from a toolbar hex string.
    pub fn set_color(&mut self, hex: &str) {
        self.settings.color = Rgba::from_hex(hex);
    }

    pub fn set_stroke_width(&mut self, width: f64) {
        self.settings.stroke_width = width;
    }

    /// Route a pointer-down into the active tool. When the click
    /// completes a gesture, the committed element is appended to the
    /// history as a fresh snapshot.
    pub fn pointer_down(&mut self, pos: Point) {
        if let Some(element) = self.tools.press(pos, &self.settings) {
            let mut snapshot = self.history.current().clone();
            snapshot.push(element);
            self.history.append(snapshot);
        }
    }

    /// Route a pointer move into the active tool; updates only the
    /// in-progress preview.
    pub fn pointer_move(&mut self, pos: Point) {
        self.tools.motion(pos);
    }

    /// Discard the in-progress element. The history log is untouched.
    pub fn cancel(&mut self) {
        self.tools.cancel();
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Clear the canvas: drop the in-progress gesture and all history.
    pub fn clear(&mut self) {
        self.tools.cancel();
        self.history.reset();
    }

    /// The committed elements of the currently-displayed snapshot.
    pub fn elements(&self) -> &[Element] {
        self.history.current()
    }

    /// Preview geometry for the renderer, if a gesture is active.
    pub fn preview(&self) -> Option<Preview> {
        self.tools.preview()
    }

    /// Whether an element is mid-construction.
    pub fn is_drawing(&self) -> bool {
        self.tools.is_active()
    }

    /// Snapshot the history into its persistence record.
    pub fn to_persisted(&self) -> PersistedHistory {
        self.history.to_persisted()
    }

    /// Replace the history from a persisted record, cancelling any
    /// in-progress gesture.
    pub fn restore(&mut self, record: PersistedHistory) {
        self.tools.cancel();
        self.history = HistoryLog::from_persisted(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::SCHEMA_VERSION;

    #[test]
    fn test_commit_appends_snapshot() {
        let mut session = DrawingSession::new();
        assert!(session.elements().is_empty());

        session.pointer_down(Point::new(10.0, 10.0));
        assert!(session.is_drawing());
        assert!(session.elements().is_empty());

        session.pointer_move(Point::new(50.0, 60.0));
        session.pointer_down(Point::new(50.0, 60.0));

        assert!(!session.is_drawing());
        assert_eq!(session.elements().len(), 1);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_snapshots_accumulate_elements() {
        let mut session = DrawingSession::new();
        for i in 0..3 {
            let x = i as f64 * 10.0;
            session.pointer_down(Point::new(x, 0.0));
            session.pointer_move(Point::new(x, 10.0));
            session.pointer_down(Point::new(x, 10.0));
        }
        assert_eq!(session.elements().len(), 3);

        session.undo();
        assert_eq!(session.elements().len(), 2);
        session.redo();
        assert_eq!(session.elements().len(), 3);
    }

    #[test]
    fn test_cancel_leaves_history_untouched() {
        let mut session = DrawingSession::new();
        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_move(Point::new(30.0, 30.0));

        let len_before = session.history().len();
        session.cancel();

        assert!(!session.is_drawing());
        assert!(session.preview().is_none());
        assert_eq!(session.history().len(), len_before);
    }

    #[test]
    fn test_tool_switch_cancels_pending_element() {
        let mut session = DrawingSession::new();
        session.set_tool(ToolKind::Circle);
        session.pointer_down(Point::new(0.0, 0.0));
        assert!(session.is_drawing());

        session.set_tool(ToolKind::Rectangle);
        assert!(!session.is_drawing());

        // The next click starts a rectangle, not a mixed-up circle.
        session.pointer_down(Point::new(5.0, 5.0));
        session.pointer_move(Point::new(15.0, 25.0));
        session.pointer_down(Point::new(15.0, 25.0));
        let [Element::Rect(rect)] = session.elements() else {
            panic!("expected a single committed rectangle");
        };
        assert_eq!(rect.width, 10.0);
        assert_eq!(rect.height, 20.0);
    }

    #[test]
    fn test_clear_resets_history_and_gesture() {
        let mut session = DrawingSession::new();
        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_down(Point::new(1.0, 1.0));
        session.pointer_down(Point::new(2.0, 2.0));
        session.clear();

        assert!(session.elements().is_empty());
        assert_eq!(session.history().len(), 1);
        assert!(!session.is_drawing());
        assert!(!session.undo());
    }

    #[test]
    fn test_color_and_width_applied_to_commit() {
        let mut session = DrawingSession::new();
        session.set_color("#ff8800");
        session.set_stroke_width(12.0);

        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_down(Point::new(0.0, 0.0));

        let element = &session.elements()[0];
        assert_eq!(element.stroke(), Rgba::from_hex("#ff8800"));
        assert_eq!(element.stroke_width(), 12.0);
    }

    #[test]
    fn test_persist_restore_round_trip() {
        let mut session = DrawingSession::new();
        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_down(Point::new(0.0, 0.0));
        let record = session.to_persisted();
        assert_eq!(record.version, SCHEMA_VERSION);

        let resumed = DrawingSession::with_history(HistoryLog::from_persisted(record.clone()));
        assert_eq!(resumed.elements().len(), 1);
        assert_eq!(resumed.history().len(), 2);

        let mut restored = DrawingSession::new();
        restored.restore(record);
        assert_eq!(restored.elements().len(), 1);
    }

    #[test]
    fn test_undo_then_draw_discards_redo() {
        let mut session = DrawingSession::new();
        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_down(Point::new(0.0, 0.0));
        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_down(Point::new(10.0, 10.0));

        session.undo();
        session.pointer_down(Point::new(20.0, 20.0));
        session.pointer_down(Point::new(20.0, 20.0));

        assert!(!session.redo());
        assert_eq!(session.elements().len(), 2);
    }
}
