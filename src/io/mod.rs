//! Input/output operations and error handling

/// Command-line interface and subcommand runners
pub mod cli;
/// Solver constants and configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Survey progress display
pub mod progress;
/// Text rendering and parsing for tiles and rectangles
pub mod render;
