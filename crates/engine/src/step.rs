//! The single-step interpreter.
//!
//! One `step()` call executes exactly one real instruction. Empty slots and
//! failed guards are resolved internally without consuming the step budget;
//! the skip search is bounded so a program that can never make progress
//! terminates in `Lost` instead of hanging.

use gridbot_common::{Instruction, Kind};

use crate::machine::{CallFrame, Engine, Status, MAX_EXECUTED_STEPS};

/// What a `step()` call reports back to the Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// True when the run is over (won, lost, or was already finished).
    pub finished: bool,
    /// True only when the run is over because all goals were collected.
    pub won: bool,
}

impl StepOutcome {
    fn ongoing() -> Self {
        Self {
            finished: false,
            won: false,
        }
    }

    fn finished(won: bool) -> Self {
        Self { finished: true, won }
    }
}

enum Fetched {
    /// A real instruction to execute.
    Execute(Instruction),
    /// Empty slot or failed guard; keep searching.
    Skip,
}

impl Engine {
    /// Advance execution by exactly one executed instruction.
    ///
    /// Calling this in a terminal or idle status is a no-op that reports
    /// the run as finished. Stepping while `Paused` executes normally and
    /// stays paused; pause only gates the Host's timer.
    pub fn step(&mut self) -> StepOutcome {
        if !self.world.status.is_active() {
            return StepOutcome::finished(self.world.status == Status::Won);
        }

        if self.world.steps_taken >= MAX_EXECUTED_STEPS {
            self.world.status = Status::Lost;
            return StepOutcome::finished(false);
        }

        // Provably sufficient skip bound: every iteration either pops a
        // frame or advances a frame index, and a full F1 cycle visits each
        // slot at most once, so 2x the total capacity covers any chain of
        // empty slots and failed guards. The +2 keeps degenerate
        // zero-capacity programs inside the loop long enough to be caught.
        let skip_bound = 2 * self.program.total_capacity() + 2;

        for _ in 0..skip_bound {
            match self.fetch_next() {
                Fetched::Skip => continue,
                Fetched::Execute(instr) => return self.execute(instr),
            }
        }

        // The program is all skips; it can never execute anything.
        self.world.status = Status::Lost;
        StepOutcome::finished(false)
    }

    /// Locate the next slot to check, popping exhausted frames and
    /// re-seeding F1 on an empty stack, then advance past it.
    fn fetch_next(&mut self) -> Fetched {
        loop {
            let Some(frame) = self.call_stack.last_mut() else {
                // Auto-loop: F1 never returns to anything; when the stack
                // empties, execution restarts at its beginning.
                self.call_stack.push(CallFrame::entry());
                continue;
            };

            if frame.next_index >= self.program.capacity(frame.function) {
                // The function is exhausted; it returns to its caller.
                self.call_stack.pop();
                continue;
            }

            let function = frame.function;
            let index = frame.next_index;
            frame.next_index += 1;

            let Some(instr) = self.program.get(function, index) else {
                return Fetched::Skip;
            };

            if let Some(guard) = instr.guard {
                let tile_color = self
                    .world
                    .grid
                    .tile(self.world.robot.position)
                    .and_then(|tile| tile.color);
                // A guard checked against void or an uncolored tile never
                // matches; that is a skip, never a loss.
                if tile_color != Some(guard) {
                    return Fetched::Skip;
                }
            }

            return Fetched::Execute(instr);
        }
    }

    /// Apply one instruction's effect and run the post-execution checks.
    fn execute(&mut self, instr: Instruction) -> StepOutcome {
        match instr.kind {
            Kind::Advance => {
                self.world.robot.position = self.world.robot.position.stepped(self.world.robot.facing);
            }
            Kind::TurnLeft => {
                self.world.robot.facing = self.world.robot.facing.turned_left();
            }
            Kind::TurnRight => {
                self.world.robot.facing = self.world.robot.facing.turned_right();
            }
            Kind::Paint(color) => {
                self.world.grid.paint(self.world.robot.position, color);
            }
            Kind::NoOp => {}
            Kind::Call(function) => {
                self.call_stack.push(CallFrame::new(function, 0));
            }
        }
        self.world.steps_taken += 1;

        // Loss is checked before goal collection: landing on void ends the
        // run immediately, even mid-instruction after a move.
        if self.world.grid.is_void(self.world.robot.position) {
            self.world.status = Status::Lost;
            return StepOutcome::finished(false);
        }

        if self.world.grid.collect_goal(self.world.robot.position) {
            self.world.goals_collected += 1;
            if self.world.goals_collected == self.world.total_goals {
                self.world.status = Status::Won;
                return StepOutcome::finished(true);
            }
        }

        self.settle_stack();
        StepOutcome::ongoing()
    }

    /// Pop exhausted frames and re-seed F1 if the stack empties, so the
    /// next `step()` and any "next slot" query point at a valid
    /// instruction, never one-past-the-end.
    fn settle_stack(&mut self) {
        while let Some(frame) = self.call_stack.last() {
            if frame.next_index < self.program.capacity(frame.function) {
                return;
            }
            self.call_stack.pop();
        }
        self.call_stack.push(CallFrame::entry());
    }
}
