//! Pattern matching against a dictionary index

use super::matches::Matches;
use crate::core::{Pattern, PatternError, Wildcard, Word};
use crate::dictionary::DictionaryIndex;
use log::debug;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Buckets at least this large are filtered in parallel
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Runs wildcard queries against a borrowed, read-only index
///
/// The index is never mutated, so a `Matcher` can be shared between threads.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    index: &'a DictionaryIndex,
    wildcard: Wildcard,
}

impl<'a> Matcher<'a> {
    /// Create a matcher using the default `?` wildcard
    #[must_use]
    pub fn new(index: &'a DictionaryIndex) -> Self {
        Self {
            index,
            wildcard: Wildcard::DEFAULT,
        }
    }

    /// Use a different wildcard marker
    #[must_use]
    pub const fn with_wildcard(mut self, wildcard: Wildcard) -> Self {
        self.wildcard = wildcard;
        self
    }

    #[inline]
    #[must_use]
    pub const fn index(&self) -> &'a DictionaryIndex {
        self.index
    }

    #[inline]
    #[must_use]
    pub const fn wildcard(&self) -> Wildcard {
        self.wildcard
    }

    /// Parse a raw query with this matcher's wildcard
    ///
    /// # Errors
    /// Returns `PatternError` if the query is empty or malformed.
    pub fn parse(&self, raw: &str) -> Result<Pattern, PatternError> {
        Pattern::parse(raw, self.wildcard)
    }

    /// Find every word matching a raw query
    ///
    /// # Errors
    /// Returns `PatternError` if the query is empty or malformed. A well-formed
    /// query without results returns an empty `Matches`.
    ///
    /// # Examples
    /// ```
    /// use word_wildcard::dictionary::DictionaryIndex;
    /// use word_wildcard::search::Matcher;
    ///
    /// let index = DictionaryIndex::from_lines(["CAT", "COT", "DOG", "CUT"]);
    /// let matcher = Matcher::new(&index);
    ///
    /// let matches = matcher.find("c?t").unwrap();
    /// assert_eq!(matches.texts(), vec!["CAT", "COT", "CUT"]);
    ///
    /// assert!(matcher.find("????").unwrap().is_empty());
    /// ```
    pub fn find(&self, raw: &str) -> Result<Matches<'a>, PatternError> {
        let pattern = self.parse(raw)?;
        Ok(self.find_pattern(&pattern))
    }

    /// Find every word matching an already parsed pattern
    #[must_use]
    pub fn find_pattern(&self, pattern: &Pattern) -> Matches<'a> {
        let Some(bucket) = self.index.words_of_length(pattern.len()) else {
            debug!("Query {pattern}: no words of length {}", pattern.len());
            return Matches::default();
        };

        let words: FxHashSet<&'a Word> = if bucket.len() >= PARALLEL_THRESHOLD {
            bucket.par_iter().filter(|w| pattern.matches(w)).collect()
        } else {
            bucket.iter().filter(|w| pattern.matches(w)).collect()
        };

        debug!(
            "Query {pattern}: {} of {} candidates matched",
            words.len(),
            bucket.len()
        );
        Matches::new(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> DictionaryIndex {
        DictionaryIndex::from_lines(["CAT", "COT", "DOG", "CUT"])
    }

    #[test]
    fn wildcard_in_middle() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        assert_eq!(matcher.find("C?T").unwrap().texts(), vec!["CAT", "COT", "CUT"]);
    }

    #[test]
    fn longer_pattern_without_bucket() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        assert!(matcher.find("????").unwrap().is_empty());
    }

    #[test]
    fn exact_query() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        assert_eq!(matcher.find("DOG").unwrap().texts(), vec!["DOG"]);
        assert!(matcher.find("XYZ").unwrap().is_empty());
    }

    #[test]
    fn trailing_wildcards() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        assert_eq!(matcher.find("C??").unwrap().texts(), vec!["CAT", "COT", "CUT"]);
    }

    #[test]
    fn all_wildcards_returns_whole_bucket() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        let matches = matcher.find("???").unwrap();
        assert_eq!(matches.len(), index.words_of_length(3).unwrap().len());
    }

    #[test]
    fn case_insensitive_queries_agree() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        let lower = matcher.find("cat").unwrap();
        let upper = matcher.find("CAT").unwrap();
        let mixed = matcher.find("CaT").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(upper, mixed);
        assert_eq!(lower.texts(), vec!["CAT"]);
    }

    #[test]
    fn decomposed_query_matches_precomposed_word() {
        let index = DictionaryIndex::from_lines(["été", "ÉTA"]);
        let matcher = Matcher::new(&index);

        assert_eq!(matcher.find("e\u{301}te\u{301}").unwrap().texts(), vec!["ÉTÉ"]);
        assert_eq!(
            matcher.find("e\u{301}t?").unwrap().texts(),
            vec!["ÉTA", "ÉTÉ"]
        );
    }

    #[test]
    fn repeated_query_is_idempotent() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        assert_eq!(matcher.find("?O?").unwrap(), matcher.find("?O?").unwrap());
    }

    #[test]
    fn malformed_query_is_an_error_not_a_miss() {
        let index = sample_index();
        let matcher = Matcher::new(&index);
        assert_eq!(matcher.find("   ").unwrap_err(), PatternError::Empty);
        assert!(matches!(
            matcher.find("C.T"),
            Err(PatternError::InvalidCharacter { character: '.', .. })
        ));
    }

    #[test]
    fn custom_wildcard_matcher() {
        let index = sample_index();
        let matcher = Matcher::new(&index).with_wildcard(Wildcard::new('_').unwrap());
        assert_eq!(matcher.wildcard().marker(), '_');
        assert_eq!(matcher.find("_O_").unwrap().texts(), vec!["COT", "DOG"]);
    }

    #[test]
    fn parallel_path_agrees_with_sequential() {
        // Enough distinct five-letter words to cross the threshold
        let letters = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
        let mut lines = Vec::new();
        for &a in &letters {
            for &b in &letters {
                for &c in &letters {
                    for &d in &letters[..5] {
                        lines.push(format!("{a}{b}{c}{d}Z"));
                    }
                }
            }
        }
        let index = DictionaryIndex::from_lines(&lines);
        let bucket = index.words_of_length(5).unwrap();
        assert!(bucket.len() >= PARALLEL_THRESHOLD);

        let matcher = Matcher::new(&index);
        let pattern = matcher.parse("A?C?Z").unwrap();
        let matches = matcher.find_pattern(&pattern);

        let expected = bucket.iter().filter(|w| pattern.matches(w)).count();
        assert_eq!(matches.len(), expected);
        assert_eq!(matches.len(), 10 * 5);
        assert!(matches.iter().all(|w| pattern.matches(w)));
    }

    #[test]
    fn matcher_is_shareable_across_threads() {
        let index = sample_index();
        let matcher = Matcher::new(&index);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| matcher.find("C?T").unwrap().len()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), 3);
            }
        });
    }
}
