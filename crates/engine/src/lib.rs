//! gridbot execution engine — deterministic, resumable, rewindable.
//!
//! The engine interprets a player program (up to five fixed-capacity
//! functions of guarded instructions) against a tile grid, exactly one
//! executed instruction per [`Engine::step`]. It is:
//!
//! - **Deterministic**: the same program and puzzle always produce the
//!   same world-state sequence.
//! - **Resumable**: execution only advances when the Host calls `step()`;
//!   pause is a status flag, not a suspended thread.
//! - **Rewindable**: [`Session`] snapshots world + call stack before every
//!   step and [`Session::backstep`] restores the most recent snapshot.
//!
//! Function calls use an explicit call-stack vector, never host-language
//! recursion, so stack depth stays inspectable and bounded. When the stack
//! empties, F1 restarts from its beginning (the auto-loop rule).
//!
//! # Usage
//!
//! ```
//! use gridbot_common::{
//!     Direction, FuncName, Grid, Instruction, Kind, Position, Puzzle, Robot, Tile,
//! };
//! use gridbot_engine::{Engine, Session};
//!
//! let grid = Grid::from_tiles([
//!     (Position::new(0, 0), Tile::new(None, false)),
//!     (Position::new(1, 0), Tile::new(None, true)),
//! ]);
//! let start = Robot::new(Position::new(0, 0), Direction::Right);
//! let puzzle = Puzzle::with_all_kinds(grid, start, [1, 0, 0, 0, 0]).unwrap();
//!
//! let mut session = Session::new(Engine::new(puzzle));
//! session.set_slot(FuncName::F1, 0, Some(Instruction::new(Kind::Advance)));
//! session.start();
//!
//! let outcome = session.step();
//! assert!(outcome.finished && outcome.won);
//! ```

pub mod history;
pub mod machine;
pub mod session;
pub mod step;

pub use history::{EditLog, History, Snapshot, EDIT_HISTORY_LIMIT};
pub use machine::{CallFrame, Engine, Status, WorldState, MAX_EXECUTED_STEPS};
pub use session::Session;
pub use step::StepOutcome;
