//! Edge-colored square tiles and ordered tile sets
//!
//! A Wang tile carries one color per side. Two tiles may sit next to each
//! other exactly when the colors on their shared edge agree. Tile sets are
//! ordered; a tile's type is its position in the set, and that index order
//! fixes the deterministic search order everywhere else in the crate.

use std::fmt;

/// One of the four edge directions of a square tile
///
/// The discriminant order (up, right, down, left) is the iteration order
/// used by neighbor scans, and `opposite` pairs up/down and right/left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the previous row
    Up = 0,
    /// Towards the next column
    Right = 1,
    /// Towards the next row
    Down = 2,
    /// Towards the previous column
    Left = 3,
}

impl Direction {
    /// All directions in fixed scan order
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// The direction pointing back at this one
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Row/column delta of the neighboring cell in this direction
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

/// A square tile described by its four edge colors
///
/// Colors are small non-negative integers with no intrinsic meaning beyond
/// equality. Immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    sides: [u8; 4],
}

impl Tile {
    /// Create a tile from its edge colors in up, right, down, left order
    pub const fn new(up: u8, right: u8, down: u8, left: u8) -> Self {
        Self {
            sides: [up, right, down, left],
        }
    }

    /// The edge color on the given side
    pub const fn side(&self, direction: Direction) -> u8 {
        self.sides[direction as usize]
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.sides[0], self.sides[1], self.sides[2], self.sides[3]
        )
    }
}

/// An ordered sequence of tiles; a tile's type is its index
///
/// Shared read-only across one solver invocation. The edge-matching
/// predicate lives here because it is a property of the tile set alone.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TileSet {
    tiles: Vec<Tile>,
}

impl TileSet {
    /// Create a tile set from tiles in type order
    pub const fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tile types
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the set contains no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// The tile for a given type index
    pub fn get(&self, tile_type: usize) -> Option<&Tile> {
        self.tiles.get(tile_type)
    }

    /// Iterate tiles in type order
    pub fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles.iter()
    }

    /// Edge-matching predicate between two tile types across a shared edge
    ///
    /// True iff type `a`'s color on `direction` equals type `b`'s color on
    /// the opposite direction, i.e. `b` may sit adjacent to `a` in that
    /// direction. Symmetric under swapping `(a, direction)` with
    /// `(b, direction.opposite())`.
    ///
    /// # Panics
    ///
    /// Panics if either type index is out of range for this set.
    pub fn sides_match(&self, a: usize, b: usize, direction: Direction) -> bool {
        self.tiles[a].side(direction) == self.tiles[b].side(direction.opposite())
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Tile;
    type IntoIter = std::slice::Iter<'a, Tile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Tile> for TileSet {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}
