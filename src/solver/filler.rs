//! Incremental backtracking filler for new boundary cells
//!
//! A complete h x w filling restricted to its top-left (h-1) x (w-1) block
//! is itself a complete filling of that smaller size, so the search never
//! re-solves the interior. Given a cached smaller filling, only the new
//! bottom row and right column are searched: h + w - 1 cells, visited
//! across the bottom row left to right and then up the right column.

use crate::solver::search::SearchContext;
use crate::tiling::Rectangle;

/// Extend a cached (h-1) x (w-1) filling to every complete h x w filling
///
/// Pads the seed with an empty bottom row and right column, then runs the
/// backtracking fill over the boundary cells. Every complete filling found
/// is reported to the search context (cache plus periodicity test).
///
/// # Panics
///
/// Panics if the seed's shape is not exactly one less than the target in
/// both dimensions.
pub fn extend_filling(
    context: &mut SearchContext<'_>,
    seed: &Rectangle,
    height: usize,
    width: usize,
) {
    assert!(height >= 1 && width >= 1, "target shape must be positive");
    assert_eq!(seed.height(), height - 1, "seed height must be height - 1");
    assert_eq!(seed.width(), width - 1, "seed width must be width - 1");

    let mut table = seed.expanded(height, width);
    fill_cell(context, &mut table, Some((height - 1, 0)));
}

/// Depth-first fill of the boundary cells from the cursor onwards
///
/// At the terminal cursor the table is complete and gets recorded. At every
/// other cell each viable tile type is tried in ascending type order:
/// place, recurse, then restore the cell to empty so no state leaks between
/// branches. Pruning comes entirely from the viability mask shrinking to
/// empty.
fn fill_cell(
    context: &mut SearchContext<'_>,
    table: &mut Rectangle,
    cursor: Option<(usize, usize)>,
) {
    let Some((x, y)) = cursor else {
        context.record_filled(table);
        return;
    };

    let next = next_boundary_cell(table.width(), x, y);
    let viable = context.compatibility.viable_types(table, x, y);
    for tile_type in viable.iter_types() {
        table.place(x, y, tile_type);
        fill_cell(context, table, next);
        table.clear(x, y);
    }
}

/// Successor of a boundary cell in the fixed fill order
///
/// Walks the bottom row left to right, then climbs the right column from
/// the second-to-last row to the top. `None` marks completion.
const fn next_boundary_cell(width: usize, x: usize, y: usize) -> Option<(usize, usize)> {
    if y + 1 < width {
        Some((x, y + 1))
    } else if x > 0 {
        Some((x - 1, y))
    } else {
        None
    }
}
