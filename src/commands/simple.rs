//! Simple interactive CLI mode
//!
//! Line-based prompt loop: read a pattern, print the matching words, repeat until
//! the user enters `q`.

use crate::search::Matcher;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Input that ends the session
pub const QUIT_SENTINEL: &str = "q";

/// Counters for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub with_matches: usize,
    pub without_matches: usize,
    pub errors: usize,
}

/// Run the prompt loop on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(matcher: &Matcher<'_>) -> io::Result<SessionSummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(matcher, stdin.lock(), stdout.lock())
}

/// Run the prompt loop over arbitrary input and output
///
/// The session ends on the exact input `q` or at end of input. Anything else,
/// including `Q`, is treated as a pattern.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run_session<R: BufRead, W: Write>(
    matcher: &Matcher<'_>,
    mut input: R,
    mut output: W,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let wildcard = matcher.wildcard();

    writeln!(
        output,
        "{} words loaded. Use {wildcard} for each missing letter.",
        matcher.index().len()
    )?;

    loop {
        write!(
            output,
            "Enter a word with {wildcard} for missing letters, or '{QUIT_SENTINEL}' to quit\n word: "
        )?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let proposal = line.trim_end_matches(['\r', '\n']);
        if proposal == QUIT_SENTINEL {
            break;
        }

        summary.queries += 1;
        match matcher.find(proposal) {
            Ok(matches) if matches.is_empty() => {
                summary.without_matches += 1;
                writeln!(output, "{}", "No matching words in the dictionary".yellow())?;
            }
            Ok(matches) => {
                summary.with_matches += 1;
                for word in matches.sorted() {
                    writeln!(output, "{word}")?;
                }
            }
            Err(err) => {
                summary.errors += 1;
                writeln!(output, "{}", format!("Invalid pattern: {err}").red())?;
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryIndex;
    use std::io::Cursor;

    fn session(script: &str) -> (SessionSummary, String) {
        let index = DictionaryIndex::from_lines(["CAT", "COT", "DOG", "CUT"]);
        let matcher = Matcher::new(&index);
        let mut output = Vec::new();

        let summary = run_session(&matcher, Cursor::new(script), &mut output).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    #[test]
    fn prints_matches_then_quits() {
        let (summary, output) = session("c?t\nq\n");

        assert_eq!(summary.queries, 1);
        assert_eq!(summary.with_matches, 1);
        for word in ["CAT", "COT", "CUT"] {
            assert!(output.contains(word), "missing {word} in {output}");
        }
        assert!(!output.contains("DOG"));
    }

    #[test]
    fn reports_no_match() {
        let (summary, output) = session("xyz\nq\n");

        assert_eq!(summary.without_matches, 1);
        assert!(output.contains("No matching words"));
    }

    #[test]
    fn reports_invalid_pattern_separately() {
        let (summary, output) = session("c.t\nq\n");

        assert_eq!(summary.errors, 1);
        assert_eq!(summary.without_matches, 0);
        assert!(output.contains("Invalid pattern"));
    }

    #[test]
    fn stops_at_end_of_input() {
        let (summary, _) = session("dog\n????\n");

        assert_eq!(summary.queries, 2);
        assert_eq!(summary.with_matches, 1);
        assert_eq!(summary.without_matches, 1);
    }

    #[test]
    fn only_exact_sentinel_quits() {
        let (summary, _) = session("Q\n q\nq\ndog\n");

        // "Q" and " q" are one-letter patterns; "dog" is never read
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.without_matches, 2);
    }

    #[test]
    fn handles_crlf_input() {
        let (summary, output) = session("dog\r\nq\r\n");

        assert_eq!(summary.queries, 1);
        assert!(output.contains("DOG"));
    }
}
