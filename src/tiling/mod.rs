//! Tile data model and rectangle grids
//!
//! This module contains the immutable tiling vocabulary:
//! - Edge directions and their opposites
//! - Tiles and ordered tile sets
//! - Rectangular grids of placed tile types

/// Rectangular grids of optionally-placed tile types
pub mod rectangle;
/// Edge directions, tiles, and tile sets
pub mod tile;

pub use rectangle::Rectangle;
pub use tile::{Direction, Tile, TileSet};
