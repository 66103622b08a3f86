//! Display functions for command results

use super::formatters::{count_noun, create_progress_bar, format_columns};
use crate::commands::{BenchmarkResult, DictionaryStats, QueryResult};
use colored::Colorize;

/// Terminal width used for column layout
const OUTPUT_WIDTH: usize = 72;

/// Print the results of one-shot lookups
pub fn print_find_results(results: &[QueryResult], verbose: bool) {
    for result in results {
        println!("\n{}", "─".repeat(60).cyan());

        match &result.outcome {
            Ok(words) if words.is_empty() => {
                println!(
                    "{}  {}",
                    result.query.to_uppercase().bright_yellow().bold(),
                    "no matching words".yellow()
                );
            }
            Ok(words) => {
                println!(
                    "{}  {}",
                    result.query.to_uppercase().bright_yellow().bold(),
                    count_noun(words.len(), "word").green()
                );
                for line in format_columns(words, OUTPUT_WIDTH) {
                    println!("  {line}");
                }
            }
            Err(err) => {
                println!(
                    "{}  {}",
                    result.query.bright_yellow().bold(),
                    err.to_string().red()
                );
            }
        }

        if verbose {
            println!(
                "  {}",
                format!("{:.3} ms", result.duration.as_secs_f64() * 1000.0).bright_black()
            );
        }
    }
}

/// Print a dictionary summary
pub fn print_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Contents:".bright_cyan().bold());
    println!(
        "   Words:            {}",
        stats.total_words.to_string().bright_yellow().bold()
    );
    println!("   Distinct lengths: {}", stats.distinct_lengths);
    if let (Some(shortest), Some(longest)) = (stats.shortest, stats.longest) {
        println!("   Shortest:         {shortest}");
        println!("   Longest:          {longest}");
    }
    println!("   Average length:   {:.2}", stats.average_length);

    println!("\n📥 {}", "Loading:".bright_cyan().bold());
    println!("   Lines read:       {}", stats.report.lines_read);
    println!("   Duplicates:       {}", stats.report.duplicates);
    println!("   Empty lines:      {}", stats.report.skipped_empty);
    println!("   Invalid lines:    {}", stats.report.skipped_invalid);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let largest = stats.largest_bucket() as f64;
    for &(length, count) in &stats.distribution {
        let pct = if stats.total_words == 0 {
            0.0
        } else {
            count as f64 / stats.total_words as f64 * 100.0
        };
        let bar = create_progress_bar(count as f64, largest, 40);
        println!("   {length:2}: {} {count:6} ({pct:5.1}%)", bar.green());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Queries run:      {}", result.total_queries);
    println!(
        "   Average matches:  {}",
        format!("{:.2}", result.average_matches)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest matches:   {}",
        format!("{}", result.min_matches).green()
    );
    println!(
        "   Most matches:     {}",
        format!("{}", result.max_matches).yellow()
    );
    println!("   Wildcards used:   {}", result.total_wildcards);
    println!("   Time matching:    {:.4}s", result.duration.as_secs_f64());
    println!("   Queries/second:   {:.1}", result.queries_per_second);

    if result.unmatched > 0 {
        println!(
            "\n{}",
            format!(
                "❌ {} queries missed their source word",
                result.unmatched
            )
            .red()
            .bold()
        );
    }

    println!("\n📈 {}", "Pattern lengths:".bright_cyan().bold());
    let largest = result.by_length.values().copied().max().unwrap_or(0) as f64;
    for (&length, &count) in &result.by_length {
        let pct = (count as f64 / result.total_queries as f64) * 100.0;
        let bar = create_progress_bar(count as f64, largest, 40);
        println!("   {length:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
