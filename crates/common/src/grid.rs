//! The tile grid and the robot pose.
//!
//! The grid is a map from position to tile; any position without an entry
//! is void (off the playable board). The engine is the only mutator; it
//! paints tiles and collects goals, nothing else.

use std::collections::BTreeMap;

use crate::color::PaintColor;
use crate::direction::Direction;
use crate::position::Position;

/// A single playable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Paint color, `None` for an uncolored tile.
    pub color: Option<PaintColor>,
    /// Whether an uncollected goal marker sits on this tile.
    pub has_goal: bool,
}

impl Tile {
    pub fn new(color: Option<PaintColor>, has_goal: bool) -> Self {
        Self { color, has_goal }
    }
}

/// The robot's pose. Exactly one robot exists per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub position: Position,
    pub facing: Direction,
}

impl Robot {
    pub fn new(position: Position, facing: Direction) -> Self {
        Self { position, facing }
    }
}

/// The playable board: a sparse map of tiles.
///
/// `BTreeMap` keeps iteration order deterministic, which the rewind and
/// determinism guarantees rely on for state comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    tiles: BTreeMap<Position, Tile>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from `(position, tile)` pairs.
    pub fn from_tiles(tiles: impl IntoIterator<Item = (Position, Tile)>) -> Self {
        Self {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Place a tile. Used only at puzzle-definition time.
    pub fn insert(&mut self, position: Position, tile: Tile) {
        self.tiles.insert(position, tile);
    }

    /// The tile at `position`, or `None` for void.
    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.tiles.get(&position)
    }

    /// True when `position` is off the playable board.
    pub fn is_void(&self, position: Position) -> bool {
        !self.tiles.contains_key(&position)
    }

    /// Paint the tile at `position`. No effect on void.
    pub fn paint(&mut self, position: Position, color: PaintColor) {
        if let Some(tile) = self.tiles.get_mut(&position) {
            tile.color = Some(color);
        }
    }

    /// Collect the goal at `position`, if an uncollected one is there.
    ///
    /// Returns true exactly once per goal tile; the flag never flips back.
    pub fn collect_goal(&mut self, position: Position) -> bool {
        match self.tiles.get_mut(&position) {
            Some(tile) if tile.has_goal => {
                tile.has_goal = false;
                true
            }
            _ => false,
        }
    }

    /// Number of uncollected goals remaining on the board.
    pub fn remaining_goals(&self) -> usize {
        self.tiles.values().filter(|t| t.has_goal).count()
    }

    /// Number of tiles on the board.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Iterate over all tiles in deterministic position order.
    pub fn iter(&self) -> impl Iterator<Item = (&Position, &Tile)> {
        self.tiles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_tile() -> Tile {
        Tile::new(Some(PaintColor::Red), false)
    }

    #[test]
    fn missing_position_is_void() {
        let grid = Grid::new();
        assert!(grid.is_void(Position::new(0, 0)));
        assert!(grid.tile(Position::new(0, 0)).is_none());
    }

    #[test]
    fn paint_recolors_existing_tile() {
        let pos = Position::new(1, 2);
        let mut grid = Grid::from_tiles([(pos, red_tile())]);
        grid.paint(pos, PaintColor::Blue);
        assert_eq!(grid.tile(pos).unwrap().color, Some(PaintColor::Blue));
    }

    #[test]
    fn paint_on_void_is_a_no_op() {
        let mut grid = Grid::new();
        grid.paint(Position::new(3, 3), PaintColor::Green);
        assert!(grid.is_void(Position::new(3, 3)));
    }

    #[test]
    fn goal_collects_exactly_once() {
        let pos = Position::new(0, 0);
        let mut grid = Grid::from_tiles([(pos, Tile::new(None, true))]);
        assert_eq!(grid.remaining_goals(), 1);
        assert!(grid.collect_goal(pos));
        assert!(!grid.collect_goal(pos));
        assert_eq!(grid.remaining_goals(), 0);
    }

    #[test]
    fn collect_goal_on_void_returns_false() {
        let mut grid = Grid::new();
        assert!(!grid.collect_goal(Position::new(5, 5)));
    }
}
