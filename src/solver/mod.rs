//! Rectangle-filling and periodicity-testing engine
//!
//! The solver answers one question per invocation: can this tile set tile
//! the plane periodically within a bounded rectangle size, and if not, how
//! large a rectangle can it still fill completely. The search grows
//! rectangles one size at a time, reusing every complete filling of the
//! previous size as a seed.

/// Tile-type bitsets for candidate tracking
pub mod bitset;
/// Storage of complete fillings keyed by rectangle size
pub mod cache;
/// Incremental backtracking filler for new boundary cells
pub mod filler;
/// Toroidal wrap-around consistency check
pub mod periodicity;
/// Precomputed edge compatibility and placement validation
pub mod placement;
/// Search orchestration over increasing rectangle sizes
pub mod search;

pub use cache::RectangleCache;
pub use periodicity::is_period;
pub use placement::CompatibilityIndex;
pub use search::{SearchContext, SearchOutcome, SolverConfig, solve};
