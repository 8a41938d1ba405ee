//! Host-facing session glue: engine + history + edit log, with the
//! snapshot contracts enforced in one place.
//!
//! The engine and history stores are usable on their own; a session keeps
//! a Host honest about the ordering rules: snapshot before every step,
//! clear history on start and reset, record the program before every edit.

use gridbot_common::{FuncName, Instruction, Program};

use crate::history::{EditLog, History};
use crate::machine::{CallFrame, Engine, Status, WorldState};
use crate::step::StepOutcome;

/// A full play session over one puzzle.
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    history: History,
    edits: EditLog,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            history: History::new(),
            edits: EditLog::new(),
        }
    }

    // ---- Program editing (between runs) ----

    /// Replace the whole program, recording the previous one for undo.
    /// Ignored while a run is active.
    pub fn set_program(&mut self, program: Program) {
        if self.engine.status().is_active() {
            return;
        }
        self.edits.record(self.engine.program().clone());
        self.engine.set_program(program);
    }

    /// Edit one slot, recording the previous program for undo. Ignored
    /// while a run is active.
    pub fn set_slot(&mut self, function: FuncName, index: usize, slot: Option<Instruction>) {
        if self.engine.status().is_active() {
            return;
        }
        self.edits.record(self.engine.program().clone());
        self.engine.set_slot(function, index, slot);
    }

    /// Undo the most recent program edit. Ignored while a run is active.
    pub fn undo_edit(&mut self) {
        if self.engine.status().is_active() {
            return;
        }
        if let Some(previous) = self.edits.undo() {
            self.engine.set_program(previous);
        }
    }

    pub fn can_undo_edit(&self) -> bool {
        self.edits.can_undo()
    }

    // ---- Run control ----

    /// Start a run. Execution history from any previous run is cleared;
    /// rewinding past a fresh start is meaningless.
    pub fn start(&mut self) {
        self.history.clear();
        self.engine.start();
    }

    pub fn pause(&mut self) {
        self.engine.pause();
    }

    pub fn resume(&mut self) {
        self.engine.resume();
    }

    /// Snapshot, then step. The snapshot is only kept when the step
    /// actually ran (stepping a finished run must not grow history).
    pub fn step(&mut self) -> StepOutcome {
        if !self.engine.status().is_active() {
            return self.engine.step();
        }
        let before = self.engine.snapshot();
        let outcome = self.engine.step();
        self.history.record(before);
        outcome
    }

    /// Rewind the most recent step, restoring world and call stack to
    /// exactly their values before it. No-op when there is no history.
    pub fn backstep(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            self.engine.restore(snapshot);
        }
    }

    pub fn can_backstep(&self) -> bool {
        self.history.can_backstep()
    }

    /// Reset to the puzzle's initial state and drop all history.
    pub fn reset(&mut self) {
        self.history.clear();
        self.engine.reset();
    }

    // ---- Read-only queries, forwarded from the engine ----

    pub fn status(&self) -> Status {
        self.engine.status()
    }

    pub fn world(&self) -> WorldState {
        self.engine.world()
    }

    pub fn call_stack(&self) -> Vec<CallFrame> {
        self.engine.call_stack()
    }

    pub fn stack_depth(&self) -> usize {
        self.engine.stack_depth()
    }

    pub fn next_slot(&self) -> Option<(FuncName, usize)> {
        self.engine.next_slot()
    }

    pub fn instruction_count(&self) -> usize {
        self.engine.instruction_count()
    }

    pub fn program(&self) -> &Program {
        self.engine.program()
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}
