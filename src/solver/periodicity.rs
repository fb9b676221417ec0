//! Toroidal wrap-around consistency check
//!
//! A fully-filled rectangle is a valid period of a plane tiling exactly
//! when its rows also match wrapping horizontally and its columns wrapping
//! vertically, making it a fundamental domain of the infinite tiling.

use crate::tiling::{Direction, Rectangle, TileSet};

/// Test whether a complete rectangle is a valid tiling period
///
/// Checks every row's left edge against the same row's right edge and every
/// column's top edge against the same column's bottom edge, both via the
/// opposite-direction rule. Any single failing row or column disqualifies
/// the rectangle. The two wrap axes are independent: failing only one of
/// them still rejects.
///
/// # Panics
///
/// Panics if the rectangle is degenerate or not fully filled; callers only
/// ever hand complete fillings to this check.
pub fn is_period(tiles: &TileSet, rectangle: &Rectangle) -> bool {
    assert!(
        !rectangle.is_degenerate(),
        "periodicity is undefined for degenerate rectangles"
    );
    assert!(
        rectangle.is_filled(),
        "periodicity requires a complete filling"
    );

    let height = rectangle.height();
    let width = rectangle.width();

    for x in 0..height {
        let first = rectangle.tile_at(x, 0);
        let last = rectangle.tile_at(x, width - 1);
        if !tiles.sides_match(first, last, Direction::Left) {
            return false;
        }
    }

    for y in 0..width {
        let top = rectangle.tile_at(0, y);
        let bottom = rectangle.tile_at(height - 1, y);
        if !tiles.sides_match(top, bottom, Direction::Up) {
            return false;
        }
    }

    true
}
