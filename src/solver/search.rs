//! Search orchestration over increasing rectangle sizes
//!
//! Drives the incremental filler over sizes in ascending (height, width)
//! order, stops as soon as any periodic filling appears, and otherwise
//! reports the largest rectangle the tile set managed to fill. All search
//! state lives in a per-invocation context; nothing persists between
//! solve calls.

use crate::io::configuration::MAX_RECTANGLE_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::solver::cache::RectangleCache;
use crate::solver::filler::extend_filling;
use crate::solver::periodicity::is_period;
use crate::solver::placement::CompatibilityIndex;
use crate::tiling::{Rectangle, TileSet};

/// Parameters controlling one solver invocation
#[derive(Clone, Copy, Debug)]
pub struct SolverConfig {
    /// Largest rectangle dimension to search, inclusive
    pub maximum_size: usize,
    /// Start each height's width scan at 2 (except height 1), skipping
    /// degenerate 1-wide strips
    pub skip_width_one: bool,
    /// Stop each height's width scan at the height itself, skipping
    /// transposed duplicates when the caller's symmetry allows it
    pub limit_width_to_height: bool,
}

impl SolverConfig {
    /// Config with the given maximum size and both pruning flags off
    pub const fn new(maximum_size: usize) -> Self {
        Self {
            maximum_size,
            skip_width_one: false,
            limit_width_to_height: false,
        }
    }
}

/// Result of one solver invocation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A periodic filling was found; its size is the minimal period under
    /// the configured search order
    Periodic {
        /// The periodic rectangle, a valid fundamental domain
        period: Rectangle,
    },
    /// No periodic filling exists up to the maximum size
    Bounded {
        /// The last non-periodic complete filling in ascending size order,
        /// or `None` when not even a 1x1 cell could be filled
        largest: Option<Rectangle>,
    },
}

impl SearchOutcome {
    /// Whether a period was found
    pub const fn found_period(&self) -> bool {
        matches!(self, Self::Periodic { .. })
    }

    /// The witness rectangle, whichever kind applies
    pub const fn rectangle(&self) -> Option<&Rectangle> {
        match self {
            Self::Periodic { period } => Some(period),
            Self::Bounded { largest } => largest.as_ref(),
        }
    }
}

/// Mutable state of one solve call
///
/// Owns the filling cache and the found-period slot; created at the start
/// of `solve` and discarded at the end. The filler reports every complete
/// rectangle here.
pub struct SearchContext<'a> {
    /// The tile set under test, read-only for the search's lifetime
    pub tiles: &'a TileSet,
    /// Precomputed edge compatibility masks for this tile set
    pub compatibility: CompatibilityIndex,
    /// All complete fillings found so far, by size
    pub cache: RectangleCache,
    /// The most recent periodic filling, doubling as the stop flag
    pub period: Option<Rectangle>,
}

impl<'a> SearchContext<'a> {
    /// Create a context with degenerate cache seeds up to the maximum size
    pub fn new(tiles: &'a TileSet, maximum_size: usize) -> Self {
        let mut cache = RectangleCache::new();
        cache.seed_degenerate(maximum_size);

        Self {
            tiles,
            compatibility: CompatibilityIndex::build(tiles),
            cache,
            period: None,
        }
    }

    /// Whether a periodic filling has been found
    pub const fn found_period(&self) -> bool {
        self.period.is_some()
    }

    /// Accept a complete filling from the filler
    ///
    /// Tests periodicity first, then caches the filling either way. A later
    /// periodic filling from the same local search replaces an earlier one;
    /// the orchestrator stops re-entering the filler once the period slot
    /// is occupied.
    pub fn record_filled(&mut self, table: &Rectangle) {
        if is_period(self.tiles, table) {
            self.period = Some(table.clone());
        }
        self.cache.insert(table.clone());
    }
}

/// Search for a periodic tiling of the plane by the given tile set
///
/// Heights run from 1 to the maximum in order; for each height the width
/// range follows the pruning flags. Every cached filling one size smaller
/// is extended through the incremental filler, and the search stops at the
/// first size that produces a periodic filling. When the bound is exhausted
/// without one, a final pass over all cached sizes in ascending (height,
/// width) order retains the last non-periodic filling as the largest tiled
/// rectangle.
///
/// # Errors
///
/// Returns an error when the maximum size is zero or at least
/// [`MAX_RECTANGLE_SIZE`]; validation happens before any search.
pub fn solve(tiles: &TileSet, config: &SolverConfig) -> Result<SearchOutcome> {
    if config.maximum_size == 0 {
        return Err(invalid_parameter(
            "maximum_size",
            &config.maximum_size,
            &"must be at least 1",
        ));
    }
    if config.maximum_size >= MAX_RECTANGLE_SIZE {
        return Err(invalid_parameter(
            "maximum_size",
            &config.maximum_size,
            &format!("must be below {MAX_RECTANGLE_SIZE}"),
        ));
    }

    let mut context = SearchContext::new(tiles, config.maximum_size);

    'sizes: for height in 1..=config.maximum_size {
        let first_width = if config.skip_width_one {
            height.min(2)
        } else {
            1
        };
        let last_width = if config.limit_width_to_height {
            height
        } else {
            config.maximum_size
        };

        for width in first_width..=last_width {
            // The filler inserts at (height, width) while we read seeds at
            // (height - 1, width - 1); cloning the seed list keeps the
            // borrows disjoint.
            let seeds = context.cache.fillings(height - 1, width - 1).to_vec();
            for seed in &seeds {
                if context.found_period() {
                    break 'sizes;
                }
                extend_filling(&mut context, seed, height, width);
            }
            if context.found_period() {
                break 'sizes;
            }
        }
    }

    if let Some(period) = context.period {
        return Ok(SearchOutcome::Periodic { period });
    }

    let mut largest = None;
    for height in 1..=config.maximum_size {
        for width in 1..=config.maximum_size {
            for table in context.cache.fillings(height, width) {
                if !is_period(tiles, table) {
                    largest = Some(table.clone());
                }
            }
        }
    }

    Ok(SearchOutcome::Bounded { largest })
}
