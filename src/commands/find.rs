//! One-shot lookup command
//!
//! Runs each query given on the command line and collects the outcomes.

use crate::core::PatternError;
use crate::search::Matcher;
use std::time::{Duration, Instant};

/// Outcome of a single query
#[derive(Debug, Clone)]
pub struct QueryResult {
    pub query: String,
    pub outcome: Result<Vec<String>, PatternError>,
    pub duration: Duration,
}

impl QueryResult {
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.outcome.is_err()
    }

    /// Number of matching words, zero for malformed queries
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.outcome.as_ref().map_or(0, Vec::len)
    }
}

/// Run one query
#[must_use]
pub fn find_words(matcher: &Matcher<'_>, query: &str) -> QueryResult {
    let start = Instant::now();
    let outcome = matcher.find(query).map(|matches| matches.texts());

    QueryResult {
        query: query.trim().to_string(),
        outcome,
        duration: start.elapsed(),
    }
}

/// Run every query in order
#[must_use]
pub fn run_find<S: AsRef<str>>(matcher: &Matcher<'_>, queries: &[S]) -> Vec<QueryResult> {
    queries
        .iter()
        .map(|q| find_words(matcher, q.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;

    #[test]
    fn find_runs_all_queries_in_order() {
        let index = DictionaryIndex::from_lines(["CAT", "COT", "DOG", "CUT"]);
        let matcher = Matcher::new(&index);

        let results = run_find(&matcher, &["c?t", "dog", "xyz", "c#t"]);

        assert_eq!(results.len(), 4);
        assert_eq!(results[0].outcome, Ok(vec!["CAT".into(), "COT".into(), "CUT".into()]));
        assert_eq!(results[1].match_count(), 1);
        assert_eq!(results[2].outcome, Ok(vec![]));
        assert!(!results[2].is_error());
        assert!(results[3].is_error());
        assert_eq!(results[3].match_count(), 0);
    }

    #[test]
    fn query_is_reported_trimmed() {
        let index = DictionaryIndex::from_lines(["CAT"]);
        let matcher = Matcher::new(&index);

        let result = find_words(&matcher, "  cat \n");
        assert_eq!(result.query, "cat");
        assert_eq!(result.match_count(), 1);
    }
}
