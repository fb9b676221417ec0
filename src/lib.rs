//! Periodic tiling search for Wang tile sets
//!
//! The solver decides whether a finite set of edge-colored square tiles can
//! tile the infinite plane periodically within a bounded rectangle size,
//! reporting either the minimal rectangular period or the largest rectangle
//! the set can still fill. The survey layer drives the solver over every
//! possible tile set of a given size to map which period sizes occur.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Rectangle-filling and periodicity-testing engine
pub mod solver;
/// Exhaustive tile-set enumeration and statistics
pub mod survey;
/// Tile data model and rectangle grids
pub mod tiling;

pub use io::error::{Result, SolverError};
