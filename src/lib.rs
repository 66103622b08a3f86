//! Word Wildcard
//!
//! Dictionary lookup with single-letter wildcards: `C?T` finds `CAT`, `COT` and `CUT`.
//!
//! # Quick Start
//!
//! ```rust
//! use word_wildcard::dictionary::DictionaryIndex;
//! use word_wildcard::search::Matcher;
//!
//! // Build the index once
//! let index = DictionaryIndex::from_lines(["cat", "cot", "dog", "cut"]);
//!
//! // Query it as often as needed
//! let matcher = Matcher::new(&index);
//! let matches = matcher.find("c?t").unwrap();
//! assert_eq!(matches.texts(), vec!["CAT", "COT", "CUT"]);
//! ```

// Core domain types
pub mod core;

// Length-partitioned dictionary and word sources
pub mod dictionary;

// Pattern matching
pub mod search;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
