//! Unbounded integer grid coordinates.

use crate::direction::Direction;

/// An integer grid coordinate.
///
/// Positions are unbounded: they can go negative or past the declared
/// board. Any position without a tile is void.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one cell away in the given direction.
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
