//! Bounded linear undo/redo history.
//!
//! The log is a branch-discarding sequence of snapshots with a cursor:
//! appending after an undo drops the redo branch, and the whole
//! sequence is capped at [`MAX_HISTORY`] entries with the oldest
//! evicted silently.

use crate::elements::Element;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of snapshots to keep.
pub const MAX_HISTORY: usize = 41;

/// Fixed key under which the history is persisted.
pub const STORAGE_KEY: &str = "drawing-history";

/// Persistence schema version. Mismatched records are ignored, not
/// migrated.
pub const SCHEMA_VERSION: u32 = 1;

/// The complete set of committed elements at one point in history.
pub type Snapshot = Vec<Element>;

/// Append-only snapshot log with an undo/redo cursor.
///
/// Invariants: the sequence is never empty (it starts with one empty
/// snapshot), and `cursor` always indexes the currently-displayed
/// snapshot.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    snapshots: VecDeque<Snapshot>,
    cursor: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create a log holding a single empty snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::from([Snapshot::new()]),
            cursor: 0,
        }
    }

    /// The currently-displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots in the log (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Append a new snapshot, discarding any redo branch beyond the
    /// cursor. When the log exceeds [`MAX_HISTORY`] the oldest entries
    /// are evicted from the front; that history is gone for good.
    pub fn append(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > MAX_HISTORY {
            self.snapshots.pop_front();
        }
        self.cursor = self.snapshots.len() - 1;
    }

    /// Step the cursor back. Returns false when already at the oldest
    /// snapshot.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor forward. Returns false when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 < self.snapshots.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Drop everything and return to a single empty snapshot.
    pub fn reset(&mut self) {
        self.snapshots.clear();
        self.snapshots.push_back(Snapshot::new());
        self.cursor = 0;
    }

    /// Snapshot the log into its persistence record.
    pub fn to_persisted(&self) -> PersistedHistory {
        PersistedHistory {
            version: SCHEMA_VERSION,
            history: Some(self.snapshots.iter().cloned().collect()),
            current_step: Some(self.cursor),
        }
    }

    /// Rebuild a log from a persisted record.
    ///
    /// A version mismatch discards the whole record. Within a matching
    /// record, `history` and `currentStep` fall back to the defaults
    /// independently when absent or unusable; an out-of-range cursor is
    /// clamped to the last snapshot.
    pub fn from_persisted(record: PersistedHistory) -> Self {
        if record.version != SCHEMA_VERSION {
            log::warn!(
                "ignoring persisted history with schema version {} (expected {})",
                record.version,
                SCHEMA_VERSION
            );
            return Self::new();
        }

        let mut restored = Self::new();
        if let Some(history) = record.history.filter(|h| !h.is_empty()) {
            restored.snapshots = history.into();
        }
        if let Some(step) = record.current_step {
            restored.cursor = step.min(restored.snapshots.len() - 1);
        }
        restored
    }
}

/// Versioned persistence record: `{version, history, currentStep}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedHistory {
    pub version: u32,
    #[serde(default)]
    pub history: Option<Vec<Snapshot>>,
    #[serde(default, rename = "currentStep")]
    pub current_step: Option<usize>,
}
