//! Solver constants and runtime configuration defaults

// Safety limit to prevent excessive memory allocation in the filling cache
/// Exclusive upper bound on the searchable rectangle dimension
pub const MAX_RECTANGLE_SIZE: usize = 128;

// Default values for configurable parameters
/// Default maximum rectangle dimension to search
pub const DEFAULT_MAXIMUM_SIZE: usize = 6;

/// Default number of edge colors in a survey
pub const DEFAULT_COLORS: u8 = 2;
