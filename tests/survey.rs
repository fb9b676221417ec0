//! Validates tile-set enumeration, survey statistics, and sample queries

use periodtile::io::cli::{QueryResponse, answer_query};
use periodtile::solver::{SolverConfig, solve};
use periodtile::survey::{
    SurveyStatistics, TileSetEnumerator, enumerate_tiles, is_canonical_first_tile,
};
use periodtile::tiling::{Direction, Tile};

/// Run a full survey and return its statistics
fn run_survey(colors: u8, set_size: usize, canonical: bool, max_size: usize) -> SurveyStatistics {
    let enumerator = TileSetEnumerator::new(colors, set_size, canonical);
    let config = SolverConfig::new(max_size);

    let mut statistics = SurveyStatistics::new();
    for tile_set in enumerator.iter() {
        let outcome = solve(&tile_set, &config).unwrap();
        statistics.record(&tile_set, &outcome);
    }
    statistics
}

#[test]
fn test_enumerate_tiles_is_lexicographic() {
    let tiles = enumerate_tiles(2);
    assert_eq!(tiles.len(), 16);
    assert_eq!(tiles[0], Tile::new(0, 0, 0, 0));
    assert_eq!(tiles[1], Tile::new(0, 0, 0, 1));
    assert_eq!(tiles[2], Tile::new(0, 0, 1, 0));
    assert_eq!(tiles[15], Tile::new(1, 1, 1, 1));

    assert_eq!(enumerate_tiles(3).len(), 81);
}

#[test]
fn test_canonical_first_tile_rule() {
    assert!(is_canonical_first_tile(&Tile::new(0, 0, 0, 0)));
    assert!(is_canonical_first_tile(&Tile::new(0, 0, 1, 1)));
    assert!(!is_canonical_first_tile(&Tile::new(1, 0, 0, 0)));
    assert!(!is_canonical_first_tile(&Tile::new(0, 1, 0, 0)));
    assert!(!is_canonical_first_tile(&Tile::new(0, 0, 2, 0)));
}

#[test]
fn test_set_count_matches_iteration() {
    for &(colors, set_size, canonical) in &[
        (2, 1, false),
        (2, 1, true),
        (2, 2, false),
        (2, 2, true),
        (2, 3, true),
    ] {
        let enumerator = TileSetEnumerator::new(colors, set_size, canonical);
        let counted = enumerator.iter().count() as u64;
        assert_eq!(
            enumerator.set_count(),
            Some(counted),
            "colors={colors} set_size={set_size} canonical={canonical}"
        );
    }
}

#[test]
fn test_enumeration_counts() {
    // 16 single-tile sets over 2 colors; 4 survive the canonical pruning
    // (up = 0, right = 0)
    assert_eq!(TileSetEnumerator::new(2, 1, false).set_count(), Some(16));
    assert_eq!(TileSetEnumerator::new(2, 1, true).set_count(), Some(4));

    // Pairs: C(16, 2) = 120; pruned keeps first tiles 0..=3, so
    // 15 + 14 + 13 + 12 partners
    assert_eq!(TileSetEnumerator::new(2, 2, false).set_count(), Some(120));
    assert_eq!(TileSetEnumerator::new(2, 2, true).set_count(), Some(54));
}

#[test]
fn test_pruned_sets_start_with_canonical_tile() {
    let enumerator = TileSetEnumerator::new(2, 2, true);
    let mut seen = 0;
    for tile_set in enumerator.iter() {
        let first = tile_set.get(0).copied().unwrap();
        assert!(is_canonical_first_tile(&first));
        seen += 1;
    }
    assert_eq!(seen, 54);
}

#[test]
fn test_single_tile_survey_statistics() {
    let statistics = run_survey(2, 1, true, 3);

    // Canonical single tiles: (0,0,0,0) tiles with a 1x1 period; the three
    // others fill at most a strip or a single cell
    assert_eq!(statistics.checked_sets, 4);
    assert_eq!(statistics.tiling_sets, 1);
    assert_eq!(statistics.non_tiling_sets, 3);
    assert_eq!(statistics.unfillable_sets, 0);

    let period_bucket = statistics.tiling_sample(1, 1).unwrap();
    assert_eq!(period_bucket.count, 1);
    let sample = period_bucket.sample_set.get(0).copied().unwrap();
    assert_eq!(sample, Tile::new(0, 0, 0, 0));
    assert_eq!(sample.side(Direction::Down), 0);

    // (0,0,0,1) stacks vertically only, (0,0,1,0) chains horizontally
    // only, (0,0,1,1) sits alone
    assert_eq!(statistics.non_tiling_sample(3, 1).unwrap().count, 1);
    assert_eq!(statistics.non_tiling_sample(1, 3).unwrap().count, 1);
    assert_eq!(statistics.non_tiling_sample(1, 1).unwrap().count, 1);
    assert!(statistics.non_tiling_sample(2, 2).is_none());
}

#[test]
fn test_survey_dimension_listing_is_sorted() {
    let statistics = run_survey(2, 1, true, 3);
    let dimensions: Vec<(usize, usize)> = statistics
        .non_tiling_dimensions()
        .into_iter()
        .map(|(size, _)| size)
        .collect();
    assert_eq!(dimensions, vec![(1, 1), (1, 3), (3, 1)]);
}

#[test]
fn test_survey_report_mentions_totals() {
    let statistics = run_survey(2, 1, true, 2);
    let report = statistics.render_report();
    assert!(report.contains("number of checked sets = 4"));
    assert!(report.contains("number of tiling sets = 1"));
    assert!(report.contains("number of non tiling sets = 3"));
}

#[test]
fn test_query_answers() {
    let statistics = run_survey(2, 1, true, 3);

    match answer_query(&statistics, "tiling 1 1") {
        QueryResponse::Answer(text) => {
            assert!(text.contains("sample set"));
            assert!(text.contains("0 0 0 0"));
            assert!(text.contains('A'));
        }
        QueryResponse::Quit => panic!("expected an answer"),
    }

    match answer_query(&statistics, "tiling 9 9") {
        QueryResponse::Answer(text) => assert!(text.contains("no matching sets")),
        QueryResponse::Quit => panic!("expected an answer"),
    }

    assert_eq!(answer_query(&statistics, "quit"), QueryResponse::Quit);

    match answer_query(&statistics, "bogus") {
        QueryResponse::Answer(text) => assert!(text.contains("queries:")),
        QueryResponse::Quit => panic!("expected usage text"),
    }
}
