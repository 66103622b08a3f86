//! Dictionary statistics command
//!
//! Summarizes how the loaded words are distributed across lengths.

use crate::dictionary::{DictionaryIndex, LoadReport};

/// Summary of a loaded dictionary
#[derive(Debug, Clone)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub distinct_lengths: usize,
    pub shortest: Option<usize>,
    pub longest: Option<usize>,
    pub average_length: f64,
    pub distribution: Vec<(usize, usize)>,
    pub report: LoadReport,
}

impl DictionaryStats {
    /// Size of the largest length bucket
    #[must_use]
    pub fn largest_bucket(&self) -> usize {
        self.distribution
            .iter()
            .map(|&(_, count)| count)
            .max()
            .unwrap_or(0)
    }
}

/// Compute statistics for an index
#[must_use]
pub fn dictionary_stats(index: &DictionaryIndex, report: LoadReport) -> DictionaryStats {
    let distribution = index.length_distribution();
    let total_words = index.len();

    let total_letters: usize = distribution.iter().map(|&(len, count)| len * count).sum();
    let average_length = if total_words == 0 {
        0.0
    } else {
        total_letters as f64 / total_words as f64
    };

    DictionaryStats {
        total_words,
        distinct_lengths: distribution.len(),
        shortest: distribution.first().map(|&(len, _)| len),
        longest: distribution.last().map(|&(len, _)| len),
        average_length,
        distribution,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_for_small_dictionary() {
        let (index, report) = DictionaryIndex::build(["or", "cat", "dog", "chat", "", "cat"]);
        let stats = dictionary_stats(&index, report);

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.distinct_lengths, 3);
        assert_eq!(stats.shortest, Some(2));
        assert_eq!(stats.longest, Some(4));
        assert!((stats.average_length - 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.largest_bucket(), 2);
        assert_eq!(stats.report.duplicates, 1);
        assert_eq!(stats.report.skipped_empty, 1);
    }

    #[test]
    fn stats_distribution_sums_to_total() {
        let (index, report) = crate::dictionary::loader::load_embedded();
        let stats = dictionary_stats(&index, report);

        let sum: usize = stats.distribution.iter().map(|&(_, n)| n).sum();
        assert_eq!(sum, stats.total_words);
        assert!(stats.average_length >= 1.0);
    }

    #[test]
    fn stats_for_empty_dictionary() {
        let index = DictionaryIndex::default();
        let stats = dictionary_stats(&index, LoadReport::default());

        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.shortest, None);
        assert_eq!(stats.longest, None);
        assert!(stats.average_length.abs() < f64::EPSILON);
        assert_eq!(stats.largest_bucket(), 0);
    }
}
