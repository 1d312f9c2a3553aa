//! Benchmark command
//!
//! Measures path search throughput by tracing a word list on random boards.

use crate::core::DiceSet;
use crate::solver::find_path;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub boards: usize,
    pub searches: usize,
    pub found: usize,
    pub most_found: usize,
    pub found_by_length: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub searches_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of searches that found a path
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        if self.searches == 0 {
            0.0
        } else {
            self.found as f64 / self.searches as f64
        }
    }
}

/// Trace every word on `boards` freshly rolled boards
///
/// Words are searched in parallel within each board.
pub fn run_benchmark<R: Rng + ?Sized>(
    dice: &DiceSet,
    words: &[&str],
    boards: usize,
    rng: &mut R,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        let pb = ProgressBar::new(boards as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut found = 0;
    let mut most_found = 0;
    let mut found_by_length: BTreeMap<usize, usize> = BTreeMap::new();

    for _ in 0..boards {
        let grid = dice.roll(rng);

        let hits: Vec<usize> = words
            .par_iter()
            .filter(|word| matches!(find_path(&grid, word), Ok(Some(_))))
            .map(|word| word.chars().count())
            .collect();

        found += hits.len();
        most_found = most_found.max(hits.len());
        for len in hits {
            *found_by_length.entry(len).or_insert(0) += 1;
        }

        pb.set_message(format!("{found} paths found"));
        pb.inc(1);
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let searches = boards * words.len();

    BenchmarkResult {
        boards,
        searches,
        found,
        most_found,
        found_by_length,
        duration,
        searches_per_second: searches as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
