//! Command implementations

pub mod benchmark;
pub mod find;
pub mod simple;
pub mod stats;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use find::{QueryResult, find_words, run_find};
pub use simple::{QUIT_SENTINEL, SessionSummary, run_session, run_simple};
pub use stats::{DictionaryStats, dictionary_stats};
