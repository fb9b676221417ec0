//! Generation of all tiles and all tile sets over a color alphabet
//!
//! Tiles are enumerated lexicographically by their (up, right, down, left)
//! colors; tile sets are k-combinations of those tiles in ascending index
//! order. An optional pruning keeps only sets whose lexicographically
//! smallest tile is in a canonical orientation, cutting away sets that are
//! color-relabelings of already-visited ones.

use crate::tiling::{Direction, Tile, TileSet};

/// All tiles over the given color alphabet, in lexicographic side order
pub fn enumerate_tiles(colors: u8) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity((colors as usize).pow(4));
    for up in 0..colors {
        for right in 0..colors {
            for down in 0..colors {
                for left in 0..colors {
                    tiles.push(Tile::new(up, right, down, left));
                }
            }
        }
    }
    tiles
}

/// Whether a tile is acceptable as the smallest tile of a pruned set
///
/// The canonical orientation fixes up and right to color 0 and bounds down
/// and left by color 1; any tile set has a color relabeling whose smallest
/// tile looks like this.
pub const fn is_canonical_first_tile(tile: &Tile) -> bool {
    tile.side(Direction::Up) == 0
        && tile.side(Direction::Right) == 0
        && tile.side(Direction::Down) <= 1
        && tile.side(Direction::Left) <= 1
}

/// Enumerator of every tile set of a fixed size over a color alphabet
#[derive(Clone, Debug)]
pub struct TileSetEnumerator {
    all_tiles: Vec<Tile>,
    set_size: usize,
    canonical_first_tile: bool,
}

impl TileSetEnumerator {
    /// Create an enumerator for sets of `set_size` tiles over `colors`
    /// colors, optionally pruning by the canonical-first-tile rule
    pub fn new(colors: u8, set_size: usize, canonical_first_tile: bool) -> Self {
        Self {
            all_tiles: enumerate_tiles(colors),
            set_size,
            canonical_first_tile,
        }
    }

    /// Number of distinct tiles in the alphabet
    pub fn tile_count(&self) -> usize {
        self.all_tiles.len()
    }

    /// Exact number of sets the iterator will yield, if it fits in a u64
    ///
    /// Used to size the survey progress bar; `None` on overflow.
    pub fn set_count(&self) -> Option<u64> {
        let n = self.all_tiles.len();
        let k = self.set_size;
        if !self.canonical_first_tile {
            return binomial(n, k);
        }
        if k == 0 {
            return Some(1);
        }

        let mut total: u64 = 0;
        for (first, tile) in self.all_tiles.iter().enumerate() {
            if first + k > n {
                break;
            }
            if is_canonical_first_tile(tile) {
                total = total.checked_add(binomial(n - first - 1, k - 1)?)?;
            }
        }
        Some(total)
    }

    /// Iterate every tile set in ascending index order
    pub fn iter(&self) -> TileSetIter<'_> {
        TileSetIter {
            enumerator: self,
            next_indices: self.first_indices(),
        }
    }

    fn first_indices(&self) -> Option<Vec<usize>> {
        let n = self.all_tiles.len();
        let k = self.set_size;
        if k > n {
            return None;
        }

        let start = if self.canonical_first_tile && k > 0 {
            (0..=n - k).find(|&i| is_canonical_first_tile(&self.all_tiles[i]))?
        } else {
            0
        };
        Some((start..start + k).collect())
    }

    fn build_set(&self, indices: &[usize]) -> TileSet {
        indices.iter().map(|&i| self.all_tiles[i]).collect()
    }
}

/// Iterator over tile sets as lexicographic index combinations
#[derive(Clone, Debug)]
pub struct TileSetIter<'a> {
    enumerator: &'a TileSetEnumerator,
    next_indices: Option<Vec<usize>>,
}

impl Iterator for TileSetIter<'_> {
    type Item = TileSet;

    fn next(&mut self) -> Option<Self::Item> {
        let indices = self.next_indices.take()?;
        let set = self.enumerator.build_set(&indices);
        self.next_indices = self.advance(indices);
        Some(set)
    }
}

impl TileSetIter<'_> {
    /// Lexicographic successor combination, honoring the pruning rule
    fn advance(&self, mut indices: Vec<usize>) -> Option<Vec<usize>> {
        let n = self.enumerator.all_tiles.len();
        let k = indices.len();

        loop {
            // Rightmost position that can still be incremented
            let pivot = (0..k).rfind(|&i| indices[i] < n - k + i)?;
            indices[pivot] += 1;
            for i in pivot + 1..k {
                indices[i] = indices[i - 1] + 1;
            }

            if !self.enumerator.canonical_first_tile
                || is_canonical_first_tile(&self.enumerator.all_tiles[indices[0]])
            {
                return Some(indices);
            }

            // Non-canonical smallest tile: saturate the tail so the next
            // successor advances position 0 past this block.
            for i in 1..k {
                indices[i] = n - k + i;
            }
        }
    }
}

const fn binomial(n: usize, k: usize) -> Option<u64> {
    if k > n {
        return Some(0);
    }
    let k = if k > n - k { n - k } else { k };
    let mut result: u64 = 1;
    let mut i = 0;
    while i < k {
        result = match result.checked_mul((n - i) as u64) {
            Some(value) => value / (i as u64 + 1),
            None => return None,
        };
        i += 1;
    }
    Some(result)
}
