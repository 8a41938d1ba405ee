//! gridbot shared types: the data model for puzzles, programs, and worlds.
//!
//! This crate provides the pure-data half of gridbot:
//!
//! - [`PaintColor`], [`Direction`], [`Position`] — grid primitives
//! - [`Tile`], [`Grid`], [`Robot`] — the world model
//! - [`Instruction`], [`Kind`], [`FuncName`] — the instruction set
//! - [`Program`] — the five fixed-capacity instruction sequences
//! - [`Puzzle`] — a validated puzzle definition
//! - [`PuzzleError`] — load-time and validation errors
//!
//! Nothing here executes anything; execution lives in `gridbot-engine`.
//!
//! # Dependencies
//!
//! This crate uses `thiserror` (compile-time proc-macro, zero runtime cost)
//! and has no other dependencies.

pub mod color;
pub mod direction;
pub mod error;
pub mod grid;
pub mod instruction;
pub mod position;
pub mod program;
pub mod puzzle;

// Re-export commonly used types at the crate root.
pub use color::PaintColor;
pub use direction::Direction;
pub use error::PuzzleError;
pub use grid::{Grid, Robot, Tile};
pub use instruction::{FuncName, Instruction, Kind, KindTag};
pub use position::Position;
pub use program::{Program, FUNCTION_COUNT};
pub use puzzle::{Puzzle, MAX_FUNCTION_CAPACITY};
