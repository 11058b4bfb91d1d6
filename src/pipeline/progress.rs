// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for a fetch run
// reference: uses indicatif for progress bars and tracks per-term outcomes

use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStats {
    pub terms_attempted: usize,
    pub terms_succeeded: usize,
    pub terms_failed: usize,
    pub records_collected: usize,
    pub records_dropped: usize,
    pub duplicates_removed: usize,
    pub duration: Duration,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records_kept(&self) -> usize {
        self.records_collected.saturating_sub(self.duplicates_removed)
    }

    pub fn success_rate(&self) -> f64 {
        if self.terms_attempted == 0 {
            return 0.0;
        }
        (self.terms_succeeded as f64 / self.terms_attempted as f64) * 100.0
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: RunStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_terms: usize, visible: bool) -> Self {
        let bar = if visible {
            create_progress_bar(total_terms as u64)
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            stats: RunStats {
                terms_attempted: total_terms,
                ..RunStats::new()
            },
            start_time: Instant::now(),
        }
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    pub fn record_success(&mut self, kept: usize, dropped: usize) {
        self.stats.terms_succeeded += 1;
        self.stats.records_collected += kept;
        self.stats.records_dropped += dropped;
        self.bar.inc(1);
    }

    pub fn record_failure(&mut self) {
        self.stats.terms_failed += 1;
        self.bar.inc(1);
    }

    pub fn record_duplicates(&mut self, removed: usize) {
        self.stats.duplicates_removed += removed;
    }

    pub fn finish(mut self) -> RunStats {
        self.bar.finish_and_clear();
        self.stats.duration = self.start_time.elapsed();
        self.stats
    }
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░");
    bar.set_style(style);
    bar
}
