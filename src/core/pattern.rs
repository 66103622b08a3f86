//! Wildcard query patterns
//!
//! A pattern is a fixed-length query where each position is either a literal letter
//! or the wildcard marker, which stands for exactly one unknown letter:
//! - `C?T` matches `CAT`, `COT`, `CUT`
//! - `???` matches every three-letter word
//! - `CAT` is an exact (case-insensitive) lookup
//!
//! Matching is a position-wise comparison anchored at both ends; no regex engine
//! is involved, so no input needs escaping.

use super::word::{Word, is_word_char, normalize};
use std::fmt;

/// The character standing for "any single letter"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wildcard(char);

/// Error type for an unusable wildcard marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WildcardError {
    /// The marker could appear inside a word or would be stripped as whitespace
    NotAllowed(char),
}

impl fmt::Display for WildcardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllowed(c) => write!(
                f,
                "{c:?} cannot be used as wildcard: it is a word character, whitespace or a control character"
            ),
        }
    }
}

impl std::error::Error for WildcardError {}

impl Wildcard {
    /// The default marker, `?`
    pub const DEFAULT: Self = Self('?');

    /// Create a wildcard marker
    ///
    /// # Errors
    /// Returns `WildcardError::NotAllowed` if the marker would collide with a
    /// legitimate word character, or would not survive normalization.
    ///
    /// # Examples
    /// ```
    /// use word_wildcard::core::Wildcard;
    ///
    /// assert!(Wildcard::new('*').is_ok());
    /// assert!(Wildcard::new('A').is_err());
    /// assert!(Wildcard::new(' ').is_err());
    /// ```
    pub fn new(marker: char) -> Result<Self, WildcardError> {
        if is_word_char(marker) || marker.is_whitespace() || marker.is_control() {
            return Err(WildcardError::NotAllowed(marker));
        }
        Ok(Self(marker))
    }

    /// Get the marker character
    #[inline]
    #[must_use]
    pub const fn marker(self) -> char {
        self.0
    }
}

impl Default for Wildcard {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Wildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One position of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Matches any single character
    Any,
    /// Matches exactly this (uppercased) character
    Letter(char),
}

impl Cell {
    #[inline]
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Letter(letter) => letter == c,
        }
    }
}

/// Error type for malformed patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Nothing left after trimming
    Empty,
    /// A character that is neither a word character nor the wildcard
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern is empty"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Pattern contains invalid character {character:?} at position {}",
                position + 1
            ),
        }
    }
}

impl std::error::Error for PatternError {}

/// A normalized wildcard pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    text: String,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Parse a raw query into a pattern
    ///
    /// The query is trimmed and uppercased first, exactly like dictionary words.
    ///
    /// # Errors
    /// Returns `PatternError` if the normalized query is empty or contains a
    /// character that is neither a word character nor the wildcard marker.
    ///
    /// # Examples
    /// ```
    /// use word_wildcard::core::{Pattern, Wildcard, Word};
    ///
    /// let pattern = Pattern::parse(" c?t ", Wildcard::DEFAULT).unwrap();
    /// assert_eq!(pattern.text(), "C?T");
    /// assert_eq!(pattern.len(), 3);
    ///
    /// assert!(pattern.matches(&Word::new("cat").unwrap()));
    /// assert!(!pattern.matches(&Word::new("cats").unwrap()));
    /// ```
    pub fn parse(raw: &str, wildcard: Wildcard) -> Result<Self, PatternError> {
        let text = normalize(raw);

        if text.is_empty() {
            return Err(PatternError::Empty);
        }

        let cells = text
            .chars()
            .enumerate()
            .map(|(position, c)| {
                if c == wildcard.marker() {
                    Ok(Cell::Any)
                } else if is_word_char(c) {
                    Ok(Cell::Letter(c))
                } else {
                    Err(PatternError::InvalidCharacter {
                        character: c,
                        position,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { text, cells })
    }

    /// Get the normalized pattern text
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the pattern cells, one per position
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Length in characters; only words of exactly this length can match
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a parsed pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of wildcard positions
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Any).count()
    }

    /// True if the pattern has no wildcard and is a plain lookup
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.wildcard_count() == 0
    }

    /// True if every position is a wildcard
    #[must_use]
    pub fn is_all_wildcards(&self) -> bool {
        self.wildcard_count() == self.len()
    }

    /// Check whether `word` matches this pattern
    ///
    /// The lengths must be equal and every literal cell must equal the word's
    /// character at that position. Anchored at both ends: a pattern never matches
    /// a prefix or suffix of a longer word.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .cells
                .iter()
                .zip(word.letters())
                .all(|(cell, &c)| cell.accepts(c))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
