//! Survey progress display
//!
//! One bar across the whole tile-set enumeration, with a rolling message of
//! tiling vs non-tiling counts. Falls back to a spinner when the exact set
//! count overflows and cannot be computed up front.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Sets: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("[{elapsed_precise}] Sets: {pos} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Progress display for one survey run
pub struct SurveyProgress {
    bar: ProgressBar,
}

impl SurveyProgress {
    /// Create a bar sized to the expected set count, or a spinner when the
    /// count is unknown
    pub fn new(total_sets: Option<u64>) -> Self {
        let bar = match total_sets {
            Some(total) => {
                let bar = ProgressBar::new(total);
                bar.set_style(BAR_STYLE.clone());
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(SPINNER_STYLE.clone());
                bar.enable_steady_tick(Duration::from_millis(100));
                bar
            }
        };

        Self { bar }
    }

    /// Record one checked set and refresh the running counts message
    pub fn record_set(&self, tiling: usize, non_tiling: usize) {
        self.bar.inc(1);
        self.bar.set_message(counts_message(tiling, non_tiling));
    }

    /// Clear the display at the end of the survey
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

fn counts_message(tiling: usize, non_tiling: usize) -> String {
    format!("tiling: {tiling}, non-tiling: {non_tiling}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_set_refreshes_counts_every_set() {
        let progress = SurveyProgress::new(Some(4));

        progress.record_set(1, 0);
        assert_eq!(progress.bar.position(), 1);
        assert_eq!(progress.bar.message(), "tiling: 1, non-tiling: 0");

        progress.record_set(1, 1);
        assert_eq!(progress.bar.position(), 2);
        assert_eq!(progress.bar.message(), "tiling: 1, non-tiling: 1");

        progress.finish();
    }

    #[test]
    fn test_counts_message_format() {
        assert_eq!(counts_message(3, 5), "tiling: 3, non-tiling: 5");
    }
}
