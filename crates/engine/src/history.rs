//! Step history: the value store that makes execution rewindable.
//!
//! A snapshot is a full deep copy of world + call stack; live engine state
//! never aliases a stored snapshot, so later mutation cannot corrupt
//! history. The store itself has no behavior: the session layer decides
//! when to record, restore, and clear.

use gridbot_common::Program;

use crate::machine::{CallFrame, Engine, WorldState};

/// Most recent program-edit snapshots kept by [`EditLog`].
pub const EDIT_HISTORY_LIMIT: usize = 50;

/// A deep copy of everything one `step()` can mutate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub world: WorldState,
    pub call_stack: Vec<CallFrame>,
}

/// Execution history: snapshots in step order, consumed in reverse.
///
/// This only covers execution steps. Program edits have their own,
/// independently bounded [`EditLog`].
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the snapshot taken before a step.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Take back the most recent snapshot.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    /// True when there is a step to rewind.
    pub fn can_backstep(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Forget everything. Rewinding past a fresh start is meaningless, so
    /// this runs on every start and reset.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl Engine {
    /// Deep-copy everything a step can mutate, for the history store.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            world: self.world.clone(),
            call_stack: self.call_stack.clone(),
        }
    }

    /// Restore a snapshot, exactly undoing the step taken after it.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.world = snapshot.world;
        self.call_stack = snapshot.call_stack;
    }
}

/// Bounded undo list for program edits, snapshot-before-mutate.
///
/// Keeps only the most recent [`EDIT_HISTORY_LIMIT`] entries; older edits
/// fall off the front.
#[derive(Debug, Clone, Default)]
pub struct EditLog {
    snapshots: Vec<Program>,
}

impl EditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the program as it was before a mutation.
    pub fn record(&mut self, before: Program) {
        if self.snapshots.len() == EDIT_HISTORY_LIMIT {
            self.snapshots.remove(0);
        }
        self.snapshots.push(before);
    }

    /// Take back the most recent pre-edit program.
    pub fn undo(&mut self) -> Option<Program> {
        self.snapshots.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
