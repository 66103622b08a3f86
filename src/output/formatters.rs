//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Lay out words in left-aligned columns that fit in `width` characters
///
/// Column width is the longest word (in characters) plus two spaces of gutter.
/// Always at least one word per row.
#[must_use]
pub fn format_columns<S: AsRef<str>>(words: &[S], width: usize) -> Vec<String> {
    let Some(longest) = words.iter().map(|w| w.as_ref().chars().count()).max() else {
        return Vec::new();
    };

    let column_width = longest + 2;
    let per_row = (width / column_width).max(1);

    words
        .chunks(per_row)
        .map(|row| {
            let line: String = row
                .iter()
                .map(|w| format!("{:<column_width$}", w.as_ref()))
                .collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// Pluralize a count: `1 word`, `3 words`
#[must_use]
pub fn count_noun(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
