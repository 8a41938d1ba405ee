//! Paint colors for tiles and instruction guards.

/// A color a tile can be painted and a guard can test.
///
/// Tile color is `Option<PaintColor>`: `None` means the tile is on the
/// board but uncolored. A color guard never matches an uncolored tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaintColor {
    Red,
    Green,
    Blue,
}

/// All paint colors, in definition order.
pub const ALL_COLORS: [PaintColor; 3] = [PaintColor::Red, PaintColor::Green, PaintColor::Blue];

impl PaintColor {
    /// Lowercase name, as used by the CLI text formats.
    pub fn name(self) -> &'static str {
        match self {
            PaintColor::Red => "red",
            PaintColor::Green => "green",
            PaintColor::Blue => "blue",
        }
    }
}
