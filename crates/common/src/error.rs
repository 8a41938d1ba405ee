//! Puzzle-definition and program-validation errors.
//!
//! These cover problems a Host can hit while loading a puzzle or checking a
//! program against it. Runtime failure during execution is never an error;
//! it is the `Lost` status reported by the engine.

use thiserror::Error;

/// Errors detected at puzzle load or program validation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The robot's start position is off the playable board.
    #[error("robot start position ({x}, {y}) is void")]
    StartOnVoid { x: i32, y: i32 },

    /// The board carries no goal markers.
    #[error("puzzle has no goal markers")]
    NoGoals,

    /// F1 must have at least one slot; with the auto-loop rule an empty F1
    /// could never make progress.
    #[error("entry function f1 has zero instruction slots")]
    EmptyEntryFunction,

    /// A function's slot capacity exceeds the fixed maximum.
    #[error("function {function} capacity {capacity} exceeds maximum {max}")]
    CapacityTooLarge {
        function: &'static str,
        capacity: usize,
        max: usize,
    },

    /// A function index outside F1..F5.
    #[error("unknown function index {index}")]
    UnknownFunction { index: usize },

    /// A program instruction uses a kind the puzzle does not allow.
    #[error("instruction kind not allowed by puzzle in {function} slot {index}")]
    DisallowedKind {
        function: &'static str,
        index: usize,
    },

    /// A program's function capacity differs from the puzzle's.
    #[error("function {function} has capacity {actual}, puzzle expects {expected}")]
    CapacityMismatch {
        function: &'static str,
        expected: usize,
        actual: usize,
    },
}
