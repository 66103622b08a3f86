//! Dictionary index and word sources
//!
//! Provides the length-partitioned index plus loaders for word files and for the
//! default list embedded in the binary.

mod embedded;
mod index;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use index::{DictionaryIndex, LoadReport};
pub use loader::DictionaryError;
