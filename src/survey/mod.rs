//! Exhaustive tile-set enumeration and result statistics
//!
//! The survey drives the solver over every possible tile set of a given
//! size drawn from a fixed color alphabet, and aggregates how many sets
//! tile periodically (keyed by minimal period size) versus how many only
//! fill a bounded rectangle (keyed by that rectangle's size).

/// Generation of all tiles and all tile sets over a color alphabet
pub mod enumeration;
/// Aggregated counts and per-dimension samples
pub mod statistics;

pub use enumeration::{TileSetEnumerator, enumerate_tiles, is_canonical_first_tile};
pub use statistics::{DimensionBucket, SurveyStatistics};
