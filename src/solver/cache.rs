//! Storage of complete fillings keyed by rectangle size
//!
//! Every fully-filled rectangle the search discovers is kept here, grouped
//! by (height, width), so the next size up can extend it instead of
//! re-solving the interior. Degenerate sizes are seeded with a single empty
//! rectangle to bootstrap the recursion.

use crate::tiling::Rectangle;
use std::collections::HashMap;

/// All known complete fillings, grouped by exact rectangle size
///
/// Grows dynamically with the sizes the search visits; there is no
/// preallocated size table. Invariant: every stored rectangle is completely
/// filled and locally consistent (each adjacent pair of cells satisfies the
/// edge-matching predicate). Periodicity is a separate, stronger property
/// not implied by membership.
#[derive(Clone, Debug, Default)]
pub struct RectangleCache {
    fillings: HashMap<(usize, usize), Vec<Rectangle>>,
}

impl RectangleCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed all degenerate sizes up to a maximum with one empty rectangle
    ///
    /// Sizes (h, 0) and (0, w) have exactly one vacuous filling each; they
    /// are the base cases the first real search sizes extend from.
    pub fn seed_degenerate(&mut self, maximum_size: usize) {
        for size in 0..=maximum_size {
            self.fillings
                .insert((size, 0), vec![Rectangle::empty(size, 0)]);
            self.fillings
                .insert((0, size), vec![Rectangle::empty(0, size)]);
        }
    }

    /// Store a complete filling under its own size
    ///
    /// # Panics
    ///
    /// Panics if the rectangle is not fully filled.
    pub fn insert(&mut self, rectangle: Rectangle) {
        assert!(rectangle.is_filled(), "cache only holds complete fillings");
        self.fillings
            .entry((rectangle.height(), rectangle.width()))
            .or_default()
            .push(rectangle);
    }

    /// All known fillings of an exact size, in discovery order
    pub fn fillings(&self, height: usize, width: usize) -> &[Rectangle] {
        self.fillings
            .get(&(height, width))
            .map_or(&[], Vec::as_slice)
    }

    /// Iterate every (size, fillings) entry in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &Vec<Rectangle>)> {
        self.fillings.iter()
    }
}
