//! Benchmark command
//!
//! Generates random patterns from dictionary words and measures lookup speed.
//! Every generated pattern is masked from a real word, so each query must match
//! at least that word.

use crate::core::Word;
use crate::search::Matcher;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub count: usize,
    /// Probability that a given position is replaced by the wildcard
    pub wildcard_ratio: f64,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            wildcard_ratio: 0.4,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_queries: usize,
    pub total_matches: usize,
    pub total_wildcards: usize,
    pub average_matches: f64,
    pub min_matches: usize,
    pub max_matches: usize,
    /// Queries that failed to match their own source word; always zero when
    /// matching is correct
    pub unmatched: usize,
    /// Number of queries per pattern length
    pub by_length: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Mask positions of `word` with the wildcard, each with probability `ratio`
fn mask_word<R: Rng>(word: &Word, marker: char, ratio: f64, rng: &mut R) -> String {
    word.letters()
        .iter()
        .map(|&c| if rng.random_bool(ratio) { marker } else { c })
        .collect()
}

/// Running counters; every generated query is counted under its source length
#[derive(Debug, Default)]
struct Tally {
    queries: usize,
    total_matches: usize,
    total_wildcards: usize,
    min_matches: Option<usize>,
    max_matches: usize,
    unmatched: usize,
    by_length: BTreeMap<usize, usize>,
}

impl Tally {
    fn record(&mut self, length: usize, matches: usize, wildcards: usize, hit: bool) {
        self.queries += 1;
        self.total_matches += matches;
        self.total_wildcards += wildcards;
        self.min_matches = Some(self.min_matches.map_or(matches, |m| m.min(matches)));
        self.max_matches = self.max_matches.max(matches);
        if !hit {
            self.unmatched += 1;
        }
        *self.by_length.entry(length).or_insert(0) += 1;
    }

    /// A generated query the parser refused: zero matches, source word missed
    fn record_rejected(&mut self, length: usize) {
        self.record(length, 0, 0, false);
    }
}

/// Run a benchmark of random queries
///
/// # Errors
///
/// Returns an error if the wildcard ratio is outside `0.0..=1.0`.
pub fn run_benchmark(
    matcher: &Matcher<'_>,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, String> {
    if !(0.0..=1.0).contains(&config.wildcard_ratio) {
        return Err(format!(
            "Wildcard ratio must be between 0 and 1, got {}",
            config.wildcard_ratio
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Sorted so a seed always selects the same words
    let mut words: Vec<&Word> = matcher.index().iter().collect();
    words.sort_unstable_by(|a, b| a.text().cmp(b.text()));

    let count = if words.is_empty() { 0 } else { config.count };
    let marker = matcher.wildcard().marker();

    let pb = if config.show_progress {
        ProgressBar::new(count as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut tally = Tally::default();
    let mut elapsed = Duration::ZERO;

    for _ in 0..count {
        let Some(&source) = words.choose(&mut rng) else {
            break;
        };
        let query = mask_word(source, marker, config.wildcard_ratio, &mut rng);

        let start = Instant::now();
        let result = matcher.parse(&query).map(|p| (matcher.find_pattern(&p), p));
        elapsed += start.elapsed();

        match result {
            Ok((matches, pattern)) => {
                let hit = matches.contains(source.text());
                if !hit {
                    warn!("Pattern {pattern} did not match its source word {source}");
                }
                tally.record(source.len(), matches.len(), pattern.wildcard_count(), hit);
                pb.set_message(format!("{pattern} → {}", matches.len()));
            }
            Err(err) => {
                warn!("Generated pattern {query} was rejected: {err}");
                tally.record_rejected(source.len());
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    let total_queries = tally.queries;
    let seconds = elapsed.as_secs_f64();

    Ok(BenchmarkResult {
        total_queries,
        total_matches: tally.total_matches,
        total_wildcards: tally.total_wildcards,
        average_matches: if total_queries == 0 {
            0.0
        } else {
            tally.total_matches as f64 / total_queries as f64
        },
        min_matches: tally.min_matches.unwrap_or(0),
        max_matches: tally.max_matches,
        unmatched: tally.unmatched,
        by_length: tally.by_length,
        duration: elapsed,
        queries_per_second: if seconds > 0.0 {
            total_queries as f64 / seconds
        } else {
            0.0
        },
    })
}
