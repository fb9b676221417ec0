//! Aggregated survey counts and per-dimension samples
//!
//! Results are bucketed by the dimensions the solver reported: minimal
//! period size for tiling sets, largest filled rectangle size for the
//! rest. Each bucket keeps the first sample it saw so a query can show a
//! concrete tile set and rectangle for any observed dimension.

use crate::io::render::{render_rectangle, render_tile_set};
use crate::solver::SearchOutcome;
use crate::tiling::{Rectangle, TileSet};
use std::collections::HashMap;
use std::fmt::Write;

/// Count and first-seen sample for one (height, width) bucket
#[derive(Clone, Debug)]
pub struct DimensionBucket {
    /// Number of tile sets that landed in this bucket
    pub count: usize,
    /// The first tile set observed for this dimension
    pub sample_set: TileSet,
    /// That set's witness rectangle (period or largest filled)
    pub sample_rectangle: Rectangle,
}

/// Running aggregation of solver outcomes across a survey
#[derive(Clone, Debug, Default)]
pub struct SurveyStatistics {
    /// Total sets checked
    pub checked_sets: usize,
    /// Sets that tile the plane periodically
    pub tiling_sets: usize,
    /// Sets with no period within the bound
    pub non_tiling_sets: usize,
    /// Non-tiling sets that could not fill any rectangle at all
    pub unfillable_sets: usize,
    tiling: HashMap<(usize, usize), DimensionBucket>,
    non_tiling: HashMap<(usize, usize), DimensionBucket>,
}

impl SurveyStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one solver outcome for one tile set
    pub fn record(&mut self, tile_set: &TileSet, outcome: &SearchOutcome) {
        self.checked_sets += 1;
        match outcome {
            SearchOutcome::Periodic { period } => {
                self.tiling_sets += 1;
                Self::bucket(&mut self.tiling, tile_set, period);
            }
            SearchOutcome::Bounded {
                largest: Some(largest),
            } => {
                self.non_tiling_sets += 1;
                Self::bucket(&mut self.non_tiling, tile_set, largest);
            }
            SearchOutcome::Bounded { largest: None } => {
                self.non_tiling_sets += 1;
                self.unfillable_sets += 1;
            }
        }
    }

    fn bucket(
        buckets: &mut HashMap<(usize, usize), DimensionBucket>,
        tile_set: &TileSet,
        rectangle: &Rectangle,
    ) {
        buckets
            .entry((rectangle.height(), rectangle.width()))
            .and_modify(|bucket| bucket.count += 1)
            .or_insert_with(|| DimensionBucket {
                count: 1,
                sample_set: tile_set.clone(),
                sample_rectangle: rectangle.clone(),
            });
    }

    /// The bucket of tiling sets with this minimal period size, if observed
    pub fn tiling_sample(&self, height: usize, width: usize) -> Option<&DimensionBucket> {
        self.tiling.get(&(height, width))
    }

    /// The bucket of non-tiling sets with this largest filled rectangle
    /// size, if observed
    pub fn non_tiling_sample(&self, height: usize, width: usize) -> Option<&DimensionBucket> {
        self.non_tiling.get(&(height, width))
    }

    /// Per-dimension tiling counts in ascending (height, width) order
    pub fn tiling_dimensions(&self) -> Vec<((usize, usize), usize)> {
        Self::sorted_counts(&self.tiling)
    }

    /// Per-dimension non-tiling counts in ascending (height, width) order
    pub fn non_tiling_dimensions(&self) -> Vec<((usize, usize), usize)> {
        Self::sorted_counts(&self.non_tiling)
    }

    fn sorted_counts(
        buckets: &HashMap<(usize, usize), DimensionBucket>,
    ) -> Vec<((usize, usize), usize)> {
        let mut counts: Vec<_> = buckets
            .iter()
            .map(|(&size, bucket)| (size, bucket.count))
            .collect();
        counts.sort_unstable();
        counts
    }

    /// Human-readable summary of the whole survey
    pub fn render_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "number of checked sets = {}", self.checked_sets);
        let _ = writeln!(report, "number of tiling sets = {}", self.tiling_sets);
        let _ = writeln!(
            report,
            "number of non tiling sets = {}",
            self.non_tiling_sets
        );
        if self.unfillable_sets > 0 {
            let _ = writeln!(
                report,
                "number of sets with no fillable rectangle = {}",
                self.unfillable_sets
            );
        }

        let _ = writeln!(report, "\ntiling sets by minimum period");
        for ((height, width), count) in self.tiling_dimensions() {
            let _ = writeln!(
                report,
                "h = {height} w = {width} number of tiling sets = {count}"
            );
        }

        let _ = writeln!(report, "\nnon tiling sets by maximum tiled rectangle");
        for ((height, width), count) in self.non_tiling_dimensions() {
            let _ = writeln!(
                report,
                "h = {height} w = {width} number of non tiling sets = {count}"
            );
        }
        report
    }
}

impl DimensionBucket {
    /// Render the stored sample as tile list plus rectangle text
    pub fn render_sample(&self) -> String {
        format!(
            "sample set\n{}sample rectangle\n{}",
            render_tile_set(&self.sample_set),
            render_rectangle(&self.sample_rectangle)
        )
    }
}
