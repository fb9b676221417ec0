//! Text rendering and parsing for tiles and rectangles
//!
//! The human-facing encoding: a rectangle prints one character per cell,
//! tile type `t` as the character `'A' + t`, rows on separate lines with no
//! separators. Tile sets print and parse as one tile per line, four
//! whitespace-separated edge colors in up, right, down, left order.

use crate::io::error::{Result, tile_parse_error};
use crate::tiling::{Rectangle, Tile, TileSet};
use std::fmt::Write;

/// Render a complete rectangle as letter rows
///
/// Degenerate rectangles render as the empty string.
///
/// # Panics
///
/// Panics if a cell is empty; only complete fillings are rendered.
pub fn render_rectangle(rectangle: &Rectangle) -> String {
    let mut text = String::with_capacity(rectangle.height() * (rectangle.width() + 1));
    for x in 0..rectangle.height() {
        for y in 0..rectangle.width() {
            text.push((b'A' + rectangle.tile_at(x, y) as u8) as char);
        }
        text.push('\n');
    }
    text
}

/// Render a tile set as one color quadruple per line
pub fn render_tile_set(tiles: &TileSet) -> String {
    let mut text = String::new();
    for tile in tiles {
        let _ = writeln!(text, "{tile}");
    }
    text
}

/// Parse a tile set from whitespace-separated color quadruples
///
/// One tile per line, blank lines skipped; the tile count is whatever the
/// input provides.
///
/// # Errors
///
/// Returns a line-addressed parse error when a line does not hold exactly
/// four colors in 0..=255.
pub fn parse_tile_set(input: &str) -> Result<TileSet> {
    let mut tiles = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let colors = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|err| {
                    tile_parse_error(index + 1, &format!("bad color '{token}': {err}"))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        match colors.as_slice() {
            &[up, right, down, left] => tiles.push(Tile::new(up, right, down, left)),
            _ => {
                return Err(tile_parse_error(
                    index + 1,
                    &format!("expected 4 colors, found {}", colors.len()),
                ));
            }
        }
    }
    Ok(TileSet::new(tiles))
}
