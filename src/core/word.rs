//! Dictionary word representation
//!
//! A Word stores a normalized (trimmed, uppercased) entry along with its letters,
//! so position-wise comparison never has to re-decode UTF-8.

use std::fmt;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize raw text the way both words and patterns are normalized:
/// surrounding whitespace stripped, composed to NFC, then uppercased.
///
/// Composition makes `e` followed by U+0301 the same single letter as `é`, so
/// decomposed input has the same length and letters as its precomposed form.
///
/// # Examples
/// ```
/// use word_wildcard::core::normalize;
///
/// assert_eq!(normalize("  chat\n"), "CHAT");
/// assert_eq!(normalize("été"), "ÉTÉ");
/// assert_eq!(normalize("e\u{301}te\u{301}"), "ÉTÉ");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().nfc().collect::<String>().to_uppercase()
}

/// Characters allowed inside a dictionary word
///
/// Letters of any script, plus the apostrophe and hyphen found in compound entries
/// such as `AUJOURD'HUI` or `PORTE-MONNAIE`. Combining marks with no precomposed
/// form are kept as they come.
#[inline]
#[must_use]
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || c == '\'' || c == '-' || is_combining_mark(c)
}

/// A normalized dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word is empty after trimming"),
            Self::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Word contains invalid character {character:?} at position {position}"
            ),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from raw text
    ///
    /// The text is trimmed and uppercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Nothing is left after trimming
    /// - A character is neither a letter, an apostrophe nor a hyphen
    ///
    /// # Examples
    /// ```
    /// use word_wildcard::core::Word;
    ///
    /// let word = Word::new(" Chat ").unwrap();
    /// assert_eq!(word.text(), "CHAT");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("   ").is_err());
    /// assert!(Word::new("ch4t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = normalize(text.as_ref());

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let invalid = text.chars().enumerate().find(|&(_, c)| !is_word_char(c));
        if let Some((position, character)) = invalid {
            return Err(WordError::InvalidCharacter {
                character,
                position,
            });
        }

        let letters = text.chars().collect();
        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Length in characters (not bytes)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// Returns `None` past the end of the word.
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.letters.get(position).copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
