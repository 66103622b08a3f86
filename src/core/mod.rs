//! Core domain types for wildcard lookup
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Words and patterns go through the same normalization, which is what makes
//! matching case-insensitive.

mod pattern;
mod word;

pub use pattern::{Cell, Pattern, PatternError, Wildcard, WildcardError};
pub use word::{Word, WordError, is_word_char, normalize};
