//! Query results

use crate::core::Word;
use rustc_hash::FxHashSet;

/// The words matching one pattern
///
/// Set-backed and unordered. An empty `Matches` is the normal "no matching words"
/// outcome, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matches<'a> {
    words: FxHashSet<&'a Word>,
}

impl<'a> Matches<'a> {
    pub(crate) const fn new(words: FxHashSet<&'a Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether a normalized word text is among the matches
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text() == text)
    }

    /// Iterate over the matches in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }

    /// Matches sorted alphabetically, for display
    #[must_use]
    pub fn sorted(&self) -> Vec<&'a Word> {
        let mut words: Vec<&Word> = self.words.iter().copied().collect();
        words.sort_unstable_by(|a, b| a.text().cmp(b.text()));
        words
    }

    /// Sorted match texts
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.sorted()
            .into_iter()
            .map(|w| w.text().to_string())
            .collect()
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = &'a Word;
    type IntoIter = std::collections::hash_set::IntoIter<&'a Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}
