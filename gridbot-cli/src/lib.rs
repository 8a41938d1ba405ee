//! gridbot CLI library: text formats and command implementations.
//!
//! The binary in `main.rs` is a thin dispatcher over [`commands`]; the
//! puzzle and program text formats live in [`parse`].

pub mod commands;
pub mod parse;

pub use parse::{parse_program, parse_puzzle, ParseError};
