//! Rectangular grids of placed tile types
//!
//! A rectangle is the unit of work for the solver: cells hold either a tile
//! type index or nothing. Degenerate shapes with zero rows or columns are
//! valid and act as the seeds of the incremental search. Mutation happens
//! only inside the backtracking filler; every rectangle observed elsewhere
//! is fully filled.

use ndarray::Array2;

/// A height x width grid of optionally-placed tile types
///
/// Backed by a dense 2-D array; empty cells are `None`. Equality compares
/// shapes and cell contents, which makes rectangles usable as deterministic
/// search results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rectangle {
    cells: Array2<Option<usize>>,
}

impl Rectangle {
    /// Create an all-empty rectangle of the given shape
    ///
    /// Either dimension may be zero, producing a degenerate rectangle that
    /// is considered fully filled.
    pub fn empty(height: usize, width: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), None),
        }
    }

    /// Build a fully-filled rectangle from rows of tile types
    ///
    /// # Panics
    ///
    /// Panics if the rows have inconsistent lengths.
    pub fn from_rows(rows: &[Vec<usize>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        for row in rows {
            assert_eq!(row.len(), width, "inconsistent row lengths");
        }

        let mut cells = Array2::from_elem((height, width), None);
        for (x, row) in rows.iter().enumerate() {
            for (y, &tile_type) in row.iter().enumerate() {
                cells[[x, y]] = Some(tile_type);
            }
        }
        Self { cells }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether either dimension is zero
    pub fn is_degenerate(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// The tile type at a cell, or `None` if the cell is empty
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<usize> {
        self.cells[[x, y]]
    }

    /// The tile type at a cell known to be filled
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or empty; callers use this only
    /// on rectangles already verified complete.
    pub fn tile_at(&self, x: usize, y: usize) -> usize {
        match self.cells[[x, y]] {
            Some(tile_type) => tile_type,
            None => panic!("cell ({x}, {y}) is empty"),
        }
    }

    /// Whether signed coordinates land inside the rectangle
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.height() && (y as usize) < self.width()
    }

    /// Place a tile type into an empty cell
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds or already filled.
    pub fn place(&mut self, x: usize, y: usize, tile_type: usize) {
        let cell = &mut self.cells[[x, y]];
        assert!(cell.is_none(), "cell ({x}, {y}) is already filled");
        *cell = Some(tile_type);
    }

    /// Restore a cell to empty when the filler backtracks
    ///
    /// # Panics
    ///
    /// Panics if the cell is out of bounds.
    pub fn clear(&mut self, x: usize, y: usize) {
        self.cells[[x, y]] = None;
    }

    /// Whether every cell holds a tile type
    ///
    /// Degenerate rectangles are vacuously filled.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Copy this rectangle into the top-left corner of a larger empty one
    ///
    /// The added bottom rows and right columns start empty; this is the
    /// padding step before the filler solves the new boundary cells.
    ///
    /// # Panics
    ///
    /// Panics if the target shape is smaller than the current one.
    pub fn expanded(&self, height: usize, width: usize) -> Self {
        assert!(
            height >= self.height() && width >= self.width(),
            "cannot shrink a rectangle from {}x{} to {height}x{width}",
            self.height(),
            self.width()
        );

        let mut cells = Array2::from_elem((height, width), None);
        for ((x, y), &cell) in self.cells.indexed_iter() {
            cells[[x, y]] = cell;
        }
        Self { cells }
    }

    /// Extract the top-left sub-rectangle of the given shape
    ///
    /// # Panics
    ///
    /// Panics if the requested shape exceeds the current one.
    pub fn sub_rectangle(&self, height: usize, width: usize) -> Self {
        assert!(
            height <= self.height() && width <= self.width(),
            "sub-rectangle {height}x{width} exceeds {}x{}",
            self.height(),
            self.width()
        );

        let mut cells = Array2::from_elem((height, width), None);
        for x in 0..height {
            for y in 0..width {
                cells[[x, y]] = self.cells[[x, y]];
            }
        }
        Self { cells }
    }
}
