//! Dictionary loading utilities
//!
//! Builds a `DictionaryIndex` from a word file or from the embedded default list.

use super::index::{DictionaryIndex, LoadReport};
use log::{info, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for dictionary sources
#[derive(Debug)]
pub enum DictionaryError {
    /// The source could not be opened or read
    Unavailable { path: PathBuf, source: io::Error },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "Cannot read dictionary {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } => Some(source),
        }
    }
}

/// Load a dictionary from a file, one word per line
///
/// Either the whole file is indexed or an error is returned; no partial index
/// is ever handed back.
///
/// # Errors
///
/// Returns `DictionaryError::Unavailable` if the file cannot be opened or is not
/// valid UTF-8. A readable file without any word gives an empty index, against
/// which every query simply has no match.
///
/// # Examples
/// ```no_run
/// use word_wildcard::dictionary::loader::load_from_file;
///
/// let (index, report) = load_from_file("data/dico.txt").unwrap();
/// println!("Loaded {} words ({} lines)", index.len(), report.lines_read);
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<(DictionaryIndex, LoadReport), DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let (index, report) = DictionaryIndex::build(content.lines());
    if index.is_empty() {
        warn!("Dictionary {} contains no words", path.display());
    }

    log_report(&path.display().to_string(), &report);
    Ok((index, report))
}

/// Build the index from the dictionary compiled into the binary
#[must_use]
pub fn load_embedded() -> (DictionaryIndex, LoadReport) {
    let (index, report) = DictionaryIndex::build(super::DEFAULT_WORDS);
    log_report("<embedded>", &report);
    (index, report)
}

fn log_report(source: &str, report: &LoadReport) {
    info!(
        "Loaded {} words from {source} ({} lines, {} duplicates, {} empty, {} invalid)",
        report.inserted,
        report.lines_read,
        report.duplicates,
        report.skipped_empty,
        report.skipped_invalid
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_dictionary(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_from_file_indexes_words() {
        let file = temp_dictionary("cat\nCOT\n  dog  \n\ncut\r\ncat\n");
        let (index, report) = load_from_file(file.path()).unwrap();

        assert_eq!(index.len(), 4);
        assert_eq!(report.lines_read, 6);
        assert_eq!(report.skipped_empty, 1);
        assert_eq!(report.duplicates, 1);
        assert!(index.contains("dog"));
        assert!(index.contains("CUT"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_from_file(&missing).unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable { ref path, .. } if path == &missing));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn load_from_empty_file_gives_empty_index() {
        let file = temp_dictionary("\n   \n\n");
        let (index, report) = load_from_file(file.path()).unwrap();

        assert!(index.is_empty());
        assert_eq!(report.lines_read, 3);
        assert_eq!(report.skipped_empty, 3);

        // Queries against it are ordinary misses
        let matcher = crate::search::Matcher::new(&index);
        assert!(matcher.find("???").unwrap().is_empty());
    }

    #[test]
    fn load_from_non_utf8_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x63, 0x61, 0xff, 0x74, b'\n']).unwrap();

        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, DictionaryError::Unavailable { .. }));
    }

    #[test]
    fn load_embedded_is_usable() {
        let (index, report) = load_embedded();

        assert!(!index.is_empty());
        assert_eq!(report.skipped_invalid, 0);
        assert!(index.contains("chat"));
        assert!(index.contains("château"));
        assert!(index.contains("aujourd'hui"));
    }
}
