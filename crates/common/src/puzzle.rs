//! Puzzle definitions and load-time validation.
//!
//! A puzzle fixes everything the engine consumes at construction/reset
//! time: the board, the robot's start pose, per-function slot capacities,
//! and the set of instruction kinds the player may use. Validation happens
//! here, once, so the engine itself never has to report errors.

use std::collections::BTreeSet;

use crate::error::PuzzleError;
use crate::grid::{Grid, Robot};
use crate::instruction::{FuncName, KindTag, ALL_FUNCTIONS, ALL_KIND_TAGS};
use crate::program::{Program, FUNCTION_COUNT};

/// Hard cap on a single function's slot capacity.
pub const MAX_FUNCTION_CAPACITY: usize = 16;

/// An immutable puzzle definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    start: Robot,
    capacities: [usize; FUNCTION_COUNT],
    allowed: BTreeSet<KindTag>,
}

impl Puzzle {
    /// Build and validate a puzzle definition.
    ///
    /// # Errors
    ///
    /// Rejects a start pose on void, a board without goals, a zero-capacity
    /// F1, and capacities above [`MAX_FUNCTION_CAPACITY`].
    pub fn new(
        grid: Grid,
        start: Robot,
        capacities: [usize; FUNCTION_COUNT],
        allowed: BTreeSet<KindTag>,
    ) -> Result<Self, PuzzleError> {
        if grid.is_void(start.position) {
            return Err(PuzzleError::StartOnVoid {
                x: start.position.x,
                y: start.position.y,
            });
        }
        if grid.remaining_goals() == 0 {
            return Err(PuzzleError::NoGoals);
        }
        if capacities[FuncName::F1.index()] == 0 {
            return Err(PuzzleError::EmptyEntryFunction);
        }
        for func in ALL_FUNCTIONS {
            let capacity = capacities[func.index()];
            if capacity > MAX_FUNCTION_CAPACITY {
                return Err(PuzzleError::CapacityTooLarge {
                    function: func.name(),
                    capacity,
                    max: MAX_FUNCTION_CAPACITY,
                });
            }
        }

        Ok(Self {
            grid,
            start,
            capacities,
            allowed,
        })
    }

    /// A puzzle that allows every instruction kind.
    pub fn with_all_kinds(
        grid: Grid,
        start: Robot,
        capacities: [usize; FUNCTION_COUNT],
    ) -> Result<Self, PuzzleError> {
        Self::new(grid, start, capacities, ALL_KIND_TAGS.into_iter().collect())
    }

    /// The initial board. The engine clones this on every reset.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The robot's start pose.
    pub fn start(&self) -> Robot {
        self.start
    }

    /// Per-function slot capacities.
    pub fn capacities(&self) -> [usize; FUNCTION_COUNT] {
        self.capacities
    }

    /// True when the player may use this instruction kind.
    pub fn allows(&self, tag: KindTag) -> bool {
        self.allowed.contains(&tag)
    }

    /// An empty program shaped to this puzzle's capacities.
    pub fn empty_program(&self) -> Program {
        Program::new(self.capacities)
    }

    /// Check a whole program against this puzzle's capacities and allowed
    /// kinds.
    ///
    /// # Errors
    ///
    /// Returns the first capacity mismatch or disallowed instruction found,
    /// scanning functions in F1..F5 order.
    pub fn validate_program(&self, program: &Program) -> Result<(), PuzzleError> {
        for func in ALL_FUNCTIONS {
            let expected = self.capacities[func.index()];
            let actual = program.capacity(func);
            if actual != expected {
                return Err(PuzzleError::CapacityMismatch {
                    function: func.name(),
                    expected,
                    actual,
                });
            }
            for (index, slot) in program.function_slots(func).iter().enumerate() {
                if let Some(instr) = slot {
                    if !self.allows(instr.kind.tag()) {
                        return Err(PuzzleError::DisallowedKind {
                            function: func.name(),
                            index,
                        });
                    }
                }
            }
        }
        Ok(())
    }
}
