//! Validates the tile model, rectangle grids, placement masks, wrap checks,
//! and the text encoding

use periodtile::io::render::{parse_tile_set, render_rectangle, render_tile_set};
use periodtile::solver::bitset::TypeMask;
use periodtile::solver::{CompatibilityIndex, is_period};
use periodtile::tiling::{Direction, Rectangle, Tile, TileSet};

#[test]
fn test_direction_opposite_is_involution() {
    for direction in Direction::ALL {
        assert_eq!(direction.opposite().opposite(), direction);
    }
    assert_eq!(Direction::Up.opposite(), Direction::Down);
    assert_eq!(Direction::Right.opposite(), Direction::Left);
}

#[test]
fn test_tile_sides_are_ordered() {
    let tile = Tile::new(1, 2, 3, 4);
    assert_eq!(tile.side(Direction::Up), 1);
    assert_eq!(tile.side(Direction::Right), 2);
    assert_eq!(tile.side(Direction::Down), 3);
    assert_eq!(tile.side(Direction::Left), 4);
}

#[test]
fn test_sides_match_uses_opposite_side() {
    // Tile 0's right edge is color 7; tile 1's left edge is color 7. No
    // other pair of facing edges shares a color.
    let tiles = TileSet::new(vec![Tile::new(0, 7, 0, 1), Tile::new(5, 0, 2, 7)]);

    assert!(tiles.sides_match(0, 1, Direction::Right));
    assert!(tiles.sides_match(1, 0, Direction::Left));
    assert!(!tiles.sides_match(1, 0, Direction::Right));
    assert!(!tiles.sides_match(0, 1, Direction::Up));
}

#[test]
fn test_rectangle_place_clear_roundtrip() {
    let mut rectangle = Rectangle::empty(2, 2);
    assert!(!rectangle.is_filled());

    rectangle.place(0, 0, 3);
    assert_eq!(rectangle.get(0, 0), Some(3));
    rectangle.clear(0, 0);
    assert_eq!(rectangle.get(0, 0), None);
}

#[test]
fn test_rectangle_expansion_preserves_top_left() {
    let seed = Rectangle::from_rows(&[vec![1, 2]]);
    let expanded = seed.expanded(2, 3);

    assert_eq!((expanded.height(), expanded.width()), (2, 3));
    assert_eq!(expanded.get(0, 0), Some(1));
    assert_eq!(expanded.get(0, 1), Some(2));
    assert_eq!(expanded.get(0, 2), None);
    assert_eq!(expanded.get(1, 0), None);

    assert_eq!(expanded.sub_rectangle(1, 2), seed);
}

#[test]
fn test_degenerate_rectangles_are_filled() {
    assert!(Rectangle::empty(0, 5).is_filled());
    assert!(Rectangle::empty(3, 0).is_filled());
    assert!(Rectangle::empty(0, 5).is_degenerate());
    assert!(!Rectangle::empty(1, 1).is_filled());
}

#[test]
fn test_type_mask_operations() {
    let mut some = TypeMask::none(6);
    some.insert(1);
    some.insert(4);

    let mut other = TypeMask::none(6);
    other.insert(4);
    other.insert(5);

    some.intersect_with(&other);
    assert_eq!(some.iter_types().collect::<Vec<_>>(), vec![4]);
    assert_eq!(some.count(), 1);
    assert!(some.contains(4));
    assert!(!some.contains(1));
    assert!(!some.is_empty());
    assert!(TypeMask::none(6).is_empty());
    assert_eq!(TypeMask::all(3).count(), 3);
}

#[test]
fn test_viable_types_respect_filled_neighbors() {
    // Tile 0 chains with itself horizontally (right 0 = left 0) but not
    // vertically; tile 1 accepts tile 0 above itself
    let tiles = TileSet::new(vec![Tile::new(0, 0, 1, 0), Tile::new(1, 2, 0, 2)]);
    let index = CompatibilityIndex::build(&tiles);

    let mut rectangle = Rectangle::empty(2, 2);
    rectangle.place(0, 0, 0);

    // Right of tile 0: only tile 0 matches the shared edge
    let beside = index.viable_types(&rectangle, 0, 1);
    assert_eq!(beside.iter_types().collect::<Vec<_>>(), vec![0]);

    // Below tile 0: only tile 1 has up = tile 0's down
    let below = index.viable_types(&rectangle, 1, 0);
    assert_eq!(below.iter_types().collect::<Vec<_>>(), vec![1]);

    assert!(index.can_place(&rectangle, 0, 1, 0));
    assert!(!index.can_place(&rectangle, 0, 1, 1));
}

#[test]
fn test_unconstrained_cell_allows_every_type() {
    let tiles = TileSet::new(vec![Tile::new(0, 1, 2, 3), Tile::new(4, 5, 6, 7)]);
    let index = CompatibilityIndex::build(&tiles);

    let rectangle = Rectangle::empty(3, 3);
    let viable = index.viable_types(&rectangle, 1, 1);
    assert_eq!(viable.count(), 2);
}

#[test]
fn test_period_check_rejects_each_wrap_independently() {
    // Vertical wrap fine (up = down), horizontal broken (left != right)
    let horizontal_only = TileSet::new(vec![Tile::new(0, 1, 0, 0)]);
    let cell = Rectangle::from_rows(&[vec![0]]);
    assert!(!is_period(&horizontal_only, &cell));

    // Horizontal wrap fine, vertical broken
    let vertical_only = TileSet::new(vec![Tile::new(1, 0, 0, 0)]);
    assert!(!is_period(&vertical_only, &cell));

    // Both wraps fine
    let uniform = TileSet::new(vec![Tile::new(0, 0, 0, 0)]);
    assert!(is_period(&uniform, &cell));
}

#[test]
fn test_period_check_wraps_full_rows_and_columns() {
    let tiles = TileSet::new(vec![
        Tile::new(0, 1, 1, 0),
        Tile::new(0, 0, 1, 1),
        Tile::new(1, 1, 0, 0),
        Tile::new(1, 0, 0, 1),
    ]);

    let period = Rectangle::from_rows(&[vec![0, 1], vec![2, 3]]);
    assert!(is_period(&tiles, &period));

    // Swapping one row breaks the vertical wrap
    let broken = Rectangle::from_rows(&[vec![0, 1], vec![0, 1]]);
    assert!(!is_period(&tiles, &broken));
}

#[test]
fn test_render_rectangle_uses_letter_offsets() {
    let rectangle = Rectangle::from_rows(&[vec![0, 1], vec![2, 25]]);
    assert_eq!(render_rectangle(&rectangle), "AB\nCZ\n");
    assert_eq!(render_rectangle(&Rectangle::empty(0, 4)), "");
}

#[test]
fn test_tile_set_text_roundtrip() {
    let tiles = TileSet::new(vec![Tile::new(0, 1, 2, 3), Tile::new(4, 4, 4, 4)]);
    let text = render_tile_set(&tiles);
    assert_eq!(text, "0 1 2 3\n4 4 4 4\n");
    assert_eq!(parse_tile_set(&text).unwrap(), tiles);
}

#[test]
fn test_parse_skips_blank_lines() {
    let parsed = parse_tile_set("0 0 0 0\n\n1 1 1 1\n").unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn test_parse_reports_line_numbers() {
    let err = parse_tile_set("0 0 0 0\n1 2 3\n").unwrap_err();
    assert!(err.to_string().contains("line 2"));

    let err = parse_tile_set("0 0 0 x\n").unwrap_err();
    assert!(err.to_string().contains("line 1"));
}
