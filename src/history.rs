//! Undo/redo history over structural snapshots of the shape list.
//!
//! The log is never empty: an empty-state snapshot always sits at index 0,
//! so undo bottoms out at the state right after initialization. Snapshots
//! are deep clones (`Vec<Shape>` owns everything), never serialized — the
//! history stays decoupled from the wire format.
//!
//! Restoring a snapshot is *not* a user edit. [`History::begin_restore`] /
//! [`History::end_restore`] make that reentrancy invariant explicit: while
//! restoring, [`History::push`] is ignored, so a store-restoring assignment
//! can never record itself as a new undo point.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::debug;

use crate::store::Shape;

/// Whether the store is currently being rewritten from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RestoreState {
    #[default]
    Idle,
    Restoring,
}

/// Ordered snapshot log plus a redo stack.
#[derive(Debug)]
pub struct History {
    snapshots: Vec<Vec<Shape>>,
    redo: Vec<Vec<Shape>>,
    restore: RestoreState,
}

impl History {
    /// A log seeded with the given initial state (usually the empty list).
    #[must_use]
    pub fn new(initial: Vec<Shape>) -> Self {
        Self {
            snapshots: vec![initial],
            redo: Vec::new(),
            restore: RestoreState::Idle,
        }
    }

    /// Record a snapshot as a new undo point and clear the redo stack.
    ///
    /// Call exactly once per logical user action — once at the end of a
    /// drag, not per pointer-move. Ignored while a restore is in progress.
    pub fn push(&mut self, snapshot: Vec<Shape>) {
        if self.restore == RestoreState::Restoring {
            debug!("history push suppressed during restore");
            return;
        }
        self.redo.clear();
        self.snapshots.push(snapshot);
        debug!(depth = self.snapshots.len(), "history snapshot recorded");
    }

    /// Step back one snapshot, returning the state to restore. `None` when
    /// only the initial snapshot remains.
    pub fn undo(&mut self) -> Option<Vec<Shape>> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        let top = self.snapshots.pop()?;
        self.redo.push(top);
        self.snapshots.last().cloned()
    }

    /// Step forward one snapshot, returning the state to restore. `None`
    /// when the redo stack is empty.
    pub fn redo(&mut self) -> Option<Vec<Shape>> {
        let state = self.redo.pop()?;
        self.snapshots.push(state.clone());
        Some(state)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of snapshots in the undo log (at least 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Mark the start of a snapshot restore; pushes are suppressed until
    /// [`Self::end_restore`].
    pub fn begin_restore(&mut self) {
        self.restore = RestoreState::Restoring;
    }

    pub fn end_restore(&mut self) {
        self.restore = RestoreState::Idle;
    }

    #[must_use]
    pub fn restore_state(&self) -> RestoreState {
        self.restore
    }

    /// Drop everything and reseed with a new initial state (image load or
    /// unload).
    pub fn reset(&mut self, initial: Vec<Shape>) {
        self.snapshots.clear();
        self.snapshots.push(initial);
        self.redo.clear();
        self.restore = RestoreState::Idle;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
