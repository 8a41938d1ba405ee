//! Engine state management: world, call stack, program, run status.

use gridbot_common::{FuncName, Grid, Instruction, Program, Puzzle, Robot};

/// Hard ceiling on executed instructions per run. The only defense against
/// non-terminating programs; exceeding it is a loss, not a warning.
pub const MAX_EXECUTED_STEPS: usize = 10_000;

/// A call frame: the instruction about to be checked in one function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallFrame {
    /// The function this frame executes.
    pub function: FuncName,
    /// Index of the next instruction slot to check. Always advanced before
    /// the slot is executed or skipped, so it means "next", never "current".
    pub next_index: usize,
}

impl CallFrame {
    pub fn new(function: FuncName, next_index: usize) -> Self {
        Self {
            function,
            next_index,
        }
    }

    /// The entry frame seeded on start and whenever the stack empties.
    pub fn entry() -> Self {
        Self::new(FuncName::F1, 0)
    }
}

/// Run status. `Won` and `Lost` are terminal until reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Before the first start, or after a reset.
    Idle,
    Running,
    Paused,
    Won,
    Lost,
}

impl Status {
    /// True while `step()` may still execute instructions.
    pub fn is_active(self) -> bool {
        matches!(self, Status::Running | Status::Paused)
    }

    /// True once the run has ended in a win or loss.
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Won | Status::Lost)
    }
}

/// The mutable world: everything a single run changes.
///
/// Owned exclusively by the engine; hosts only ever receive clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldState {
    pub robot: Robot,
    pub grid: Grid,
    pub goals_collected: usize,
    pub total_goals: usize,
    /// Executed instructions this run. Skips never count.
    pub steps_taken: usize,
    pub status: Status,
}

impl WorldState {
    /// Fresh world rebuilt from a puzzle's initial snapshot.
    pub(crate) fn initial(puzzle: &Puzzle) -> Self {
        Self {
            robot: puzzle.start(),
            grid: puzzle.grid().clone(),
            goals_collected: 0,
            total_goals: puzzle.grid().remaining_goals(),
            steps_taken: 0,
            status: Status::Idle,
        }
    }
}

/// The execution engine: interprets a program against a world, one
/// executed instruction per `step()`.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) puzzle: Puzzle,
    pub(crate) program: Program,
    pub(crate) world: WorldState,
    pub(crate) call_stack: Vec<CallFrame>,
}

impl Engine {
    /// Create an engine for a puzzle, with an all-empty program.
    pub fn new(puzzle: Puzzle) -> Self {
        let world = WorldState::initial(&puzzle);
        let program = puzzle.empty_program();
        Self {
            puzzle,
            program,
            world,
            call_stack: Vec::new(),
        }
    }

    /// Replace the whole program. Ignored while a run is active; the Host
    /// may only edit between runs.
    pub fn set_program(&mut self, program: Program) {
        if self.world.status.is_active() {
            return;
        }
        if self.puzzle.validate_program(&program).is_ok() {
            self.program = program;
        }
    }

    /// Write one program slot. Ignored while a run is active, for
    /// out-of-range indices, and for kinds the puzzle does not allow.
    pub fn set_slot(&mut self, function: FuncName, index: usize, slot: Option<Instruction>) {
        if self.world.status.is_active() {
            return;
        }
        if let Some(instr) = slot {
            if !self.puzzle.allows(instr.kind.tag()) {
                return;
            }
        }
        self.program.set(function, index, slot);
    }

    /// Begin a run: implicit reset when non-idle, then seed the call stack
    /// with `{F1, 0}` and go to `Running`.
    pub fn start(&mut self) {
        if self.world.status != Status::Idle {
            self.reset();
        }
        self.call_stack.push(CallFrame::entry());
        self.world.status = Status::Running;
    }

    /// Stop the Host's timer-driven stepping. A pure status flag: the call
    /// stack and world are untouched, and manual `step()` still works.
    pub fn pause(&mut self) {
        if self.world.status == Status::Running {
            self.world.status = Status::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.world.status == Status::Paused {
            self.world.status = Status::Running;
        }
    }

    /// Rebuild the world from the puzzle's initial snapshot and clear the
    /// call stack. Idempotent.
    pub fn reset(&mut self) {
        self.world = WorldState::initial(&self.puzzle);
        self.call_stack.clear();
    }

    // ---- Read-only queries ----

    pub fn status(&self) -> Status {
        self.world.status
    }

    /// A defensive copy of the world. The engine never hands out a live
    /// reference to its mutable state.
    pub fn world(&self) -> WorldState {
        self.world.clone()
    }

    /// A defensive copy of the call stack, bottom first.
    pub fn call_stack(&self) -> Vec<CallFrame> {
        self.call_stack.clone()
    }

    pub fn stack_depth(&self) -> usize {
        self.call_stack.len()
    }

    /// The program as currently loaded.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The puzzle this engine was built for.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Count of non-empty instruction slots across all functions.
    pub fn instruction_count(&self) -> usize {
        self.program.non_empty_count()
    }

    /// The slot that will be checked by the next `step()`, accounting for
    /// the pop-exhausted and F1 auto-reseed rules so the Host can always
    /// highlight "next" while a run is active.
    ///
    /// `None` outside `Running`/`Paused`.
    pub fn next_slot(&self) -> Option<(FuncName, usize)> {
        if !self.world.status.is_active() {
            return None;
        }
        for frame in self.call_stack.iter().rev() {
            if frame.next_index < self.program.capacity(frame.function) {
                return Some((frame.function, frame.next_index));
            }
        }
        // Every frame exhausted (or stack empty): F1 restarts.
        Some((FuncName::F1, 0))
    }
}
