//! Instructions: the commands a program slot can hold.
//!
//! A program slot holds `Option<Instruction>`; `None` means the slot is
//! empty and is skipped during execution. An instruction may carry a guard
//! color: it only executes when the tile under the robot has that color.

use crate::color::PaintColor;
use crate::error::PuzzleError;

/// One of the five player-editable functions.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FuncName {
    F1 = 0,
    F2 = 1,
    F3 = 2,
    F4 = 3,
    F5 = 4,
}

/// All function names, in call order.
pub const ALL_FUNCTIONS: [FuncName; 5] = [
    FuncName::F1,
    FuncName::F2,
    FuncName::F3,
    FuncName::F4,
    FuncName::F5,
];

impl FuncName {
    /// Zero-based index into per-function tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Result<Self, PuzzleError> {
        ALL_FUNCTIONS
            .get(index)
            .copied()
            .ok_or(PuzzleError::UnknownFunction { index })
    }

    /// Lowercase name (`f1`..`f5`), as used by the CLI text formats.
    pub fn name(self) -> &'static str {
        match self {
            FuncName::F1 => "f1",
            FuncName::F2 => "f2",
            FuncName::F3 => "f3",
            FuncName::F4 => "f4",
            FuncName::F5 => "f5",
        }
    }
}

/// What an instruction does when it executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Move one cell in the facing direction.
    Advance,
    /// Rotate facing 90 degrees left.
    TurnLeft,
    /// Rotate facing 90 degrees right.
    TurnRight,
    /// Paint the tile under the robot.
    Paint(PaintColor),
    /// Do nothing.
    NoOp,
    /// Push a frame for the named function.
    Call(FuncName),
}

/// Payload-free discriminant of [`Kind`], used for a puzzle's set of
/// allowed instruction kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KindTag {
    Advance,
    TurnLeft,
    TurnRight,
    Paint,
    NoOp,
    Call,
}

/// All kind tags, in definition order.
pub const ALL_KIND_TAGS: [KindTag; 6] = [
    KindTag::Advance,
    KindTag::TurnLeft,
    KindTag::TurnRight,
    KindTag::Paint,
    KindTag::NoOp,
    KindTag::Call,
];

impl Kind {
    /// The payload-free discriminant for allowed-kind checks.
    pub fn tag(self) -> KindTag {
        match self {
            Kind::Advance => KindTag::Advance,
            Kind::TurnLeft => KindTag::TurnLeft,
            Kind::TurnRight => KindTag::TurnRight,
            Kind::Paint(_) => KindTag::Paint,
            Kind::NoOp => KindTag::NoOp,
            Kind::Call(_) => KindTag::Call,
        }
    }
}

/// A single program instruction: a kind plus an optional guard color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub kind: Kind,
    /// When present, the instruction only executes if the tile under the
    /// robot has this color; otherwise it is skipped.
    pub guard: Option<PaintColor>,
}

impl Instruction {
    /// An unguarded instruction.
    pub fn new(kind: Kind) -> Self {
        Self { kind, guard: None }
    }

    /// An instruction guarded on a tile color.
    pub fn guarded(kind: Kind, guard: PaintColor) -> Self {
        Self {
            kind,
            guard: Some(guard),
        }
    }
}
