//! Length-partitioned dictionary index
//!
//! Words are grouped by length so a query only ever scans the bucket of its own
//! length. Built once, read-only afterwards.

use crate::core::{Word, WordError};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

/// Counters collected while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub lines_read: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub skipped_empty: usize,
    pub skipped_invalid: usize,
}

impl LoadReport {
    /// Lines that did not produce a new word
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.duplicates + self.skipped_empty + self.skipped_invalid
    }
}

/// Mapping from word length to the set of words of exactly that length
///
/// Invariant: every word stored under key `L` has `len() == L`, and there is never
/// a key `0`.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    buckets: FxHashMap<usize, FxHashSet<Word>>,
    total: usize,
}

impl DictionaryIndex {
    /// Build an index from raw lines, discarding the load report
    ///
    /// # Examples
    /// ```
    /// use word_wildcard::dictionary::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::from_lines(["cat", "COT", " dog ", "cat"]);
    /// assert_eq!(index.len(), 3);
    /// assert!(index.contains("Dog"));
    /// ```
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines).0
    }

    /// Build an index from raw lines
    ///
    /// Each line is trimmed and uppercased, then inserted under its length.
    /// Empty lines and lines with characters that cannot appear in a word are
    /// skipped and counted in the returned report.
    pub fn build<I, S>(lines: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        let mut report = LoadReport::default();

        for (line_no, line) in lines.into_iter().enumerate() {
            report.lines_read += 1;

            match Word::new(line.as_ref()) {
                Ok(word) => {
                    if index.insert(word) {
                        report.inserted += 1;
                    } else {
                        report.duplicates += 1;
                    }
                }
                Err(WordError::Empty) => report.skipped_empty += 1,
                Err(err) => {
                    debug!("Skipping line {}: {err}", line_no + 1);
                    report.skipped_invalid += 1;
                }
            }
        }

        (index, report)
    }

    /// Returns true if the word was not already present
    fn insert(&mut self, word: Word) -> bool {
        let inserted = self.buckets.entry(word.len()).or_default().insert(word);
        if inserted {
            self.total += 1;
        }
        inserted
    }

    /// Total number of distinct words
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// All words of exactly `length` characters, if any
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Option<&FxHashSet<Word>> {
        self.buckets.get(&length)
    }

    /// Word lengths present in the index, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.buckets.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// (length, word count) pairs, ascending by length
    #[must_use]
    pub fn length_distribution(&self) -> Vec<(usize, usize)> {
        self.lengths()
            .into_iter()
            .map(|len| (len, self.buckets[&len].len()))
            .collect()
    }

    /// Check membership of a raw (unnormalized) word
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        Word::new(raw).is_ok_and(|word| {
            self.buckets
                .get(&word.len())
                .is_some_and(|bucket| bucket.contains(&word))
        })
    }

    /// Iterate over every word, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.buckets.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_groups_by_length() {
        let index = DictionaryIndex::from_lines(["cat", "cot", "dog", "chat", "loup"]);

        assert_eq!(index.len(), 5);
        assert_eq!(index.lengths(), vec![3, 4]);
        assert_eq!(index.words_of_length(3).map(|b| b.len()), Some(3));
        assert_eq!(index.words_of_length(4).map(|b| b.len()), Some(2));
        assert!(index.words_of_length(5).is_none());
    }

    #[test]
    fn stored_length_equals_key() {
        let index = DictionaryIndex::from_lines(["a", "été", "château", "porte-monnaie", "or"]);

        for length in index.lengths() {
            for word in index.words_of_length(length).unwrap() {
                assert_eq!(word.len(), length, "{word} stored under {length}");
            }
        }
    }

    #[test]
    fn build_normalizes_and_dedupes() {
        let (index, report) = DictionaryIndex::build(["cat", " CAT ", "Cat\r", "dog"]);

        assert_eq!(index.len(), 2);
        assert_eq!(report.lines_read, 4);
        assert_eq!(report.inserted, 2);
        assert_eq!(report.duplicates, 2);
        assert!(index.contains("cat"));
    }

    #[test]
    fn build_skips_empty_lines() {
        let (index, report) = DictionaryIndex::build(["", "   ", "cat", "\t"]);

        assert_eq!(index.len(), 1);
        assert_eq!(report.skipped_empty, 3);
        assert!(index.words_of_length(0).is_none());
        assert!(!index.lengths().contains(&0));
    }

    #[test]
    fn build_skips_invalid_lines() {
        let (index, report) = DictionaryIndex::build(["cat", "c4t", "two words", "dog"]);

        assert_eq!(index.len(), 2);
        assert_eq!(report.skipped_invalid, 2);
        assert_eq!(report.skipped(), 2);
    }

    #[test]
    fn build_accepts_decomposed_accents() {
        let (index, report) = DictionaryIndex::build(["e\u{301}te\u{301}", "été"]);

        assert_eq!(report.skipped_invalid, 0);
        assert_eq!(report.inserted, 1);
        assert_eq!(report.duplicates, 1);
        assert_eq!(index.lengths(), vec![3]);
        assert!(index.contains("ÉTÉ"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let index = DictionaryIndex::from_lines(["Chien"]);
        assert!(index.contains("chien"));
        assert!(index.contains("  CHIEN "));
        assert!(!index.contains("chat"));
        assert!(!index.contains(""));
    }

    #[test]
    fn length_distribution_sums_to_total() {
        let index = DictionaryIndex::from_lines(["a", "or", "os", "cat", "dog", "cot", "chat"]);
        let distribution = index.length_distribution();

        assert_eq!(distribution, vec![(1, 1), (2, 2), (3, 3), (4, 1)]);
        let sum: usize = distribution.iter().map(|&(_, n)| n).sum();
        assert_eq!(sum, index.len());
    }

    #[test]
    fn iter_yields_every_word_once() {
        let index = DictionaryIndex::from_lines(["cat", "dog", "chat", "cat"]);
        let mut words: Vec<&str> = index.iter().map(Word::text).collect();
        words.sort_unstable();
        assert_eq!(words, vec!["CAT", "CHAT", "DOG"]);
    }

    #[test]
    fn empty_index() {
        let index = DictionaryIndex::from_lines(Vec::<String>::new());
        assert!(index.is_empty());
        assert!(index.lengths().is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
