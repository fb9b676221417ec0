//! Edge compatibility index and placement validation
//!
//! Built once per solve, the index answers "which tile types may sit at a
//! cell whose neighbor in direction `d` holds type `t`" as a precomputed
//! bitset. Validating a placement then reduces to intersecting the masks of
//! the filled neighbors; out-of-bounds and empty neighbors impose no
//! constraint (open boundary, resolved later by the periodicity check or
//! never at the rectangle's outer edge).

use crate::solver::bitset::TypeMask;
use crate::tiling::{Direction, Rectangle, TileSet};

/// Precomputed per-direction tile compatibility masks
///
/// `allowed[d][t]` is the set of candidate types `c` whose color on side
/// `d` equals type `t`'s color on the opposite side, i.e. the types that
/// tolerate a `t` neighbor in direction `d`.
#[derive(Clone, Debug)]
pub struct CompatibilityIndex {
    allowed: [Vec<TypeMask>; 4],
    type_count: usize,
}

impl CompatibilityIndex {
    /// Build the compatibility masks for a tile set
    pub fn build(tiles: &TileSet) -> Self {
        let type_count = tiles.len();

        let allowed = Direction::ALL.map(|direction| {
            (0..type_count)
                .map(|neighbor| {
                    let mut mask = TypeMask::none(type_count);
                    for candidate in 0..type_count {
                        if tiles.sides_match(candidate, neighbor, direction) {
                            mask.insert(candidate);
                        }
                    }
                    mask
                })
                .collect()
        });

        Self {
            allowed,
            type_count,
        }
    }

    /// Number of tile types the index was built for
    pub const fn type_count(&self) -> usize {
        self.type_count
    }

    /// All tile types legal at an empty cell given its filled neighbors
    ///
    /// Starts from the full mask and intersects away the constraint of each
    /// filled neighbor. An empty tile set yields an empty mask.
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or already filled.
    pub fn viable_types(&self, rectangle: &Rectangle, x: usize, y: usize) -> TypeMask {
        assert!(
            rectangle.in_bounds(x as i64, y as i64),
            "cell ({x}, {y}) is outside the rectangle"
        );
        assert!(
            rectangle.get(x, y).is_none(),
            "cell ({x}, {y}) is already filled"
        );

        let mut viable = TypeMask::all(self.type_count);
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let nx = x as i64 + dx;
            let ny = y as i64 + dy;
            if !rectangle.in_bounds(nx, ny) {
                continue;
            }
            let Some(neighbor) = rectangle.get(nx as usize, ny as usize) else {
                continue;
            };
            viable.intersect_with(&self.allowed[direction as usize][neighbor]);
            if viable.is_empty() {
                break;
            }
        }
        viable
    }

    /// Whether a tile type may legally occupy an empty cell
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or already filled.
    pub fn can_place(&self, rectangle: &Rectangle, x: usize, y: usize, tile_type: usize) -> bool {
        self.viable_types(rectangle, x, y).contains(tile_type)
    }
}
