//! Word Wildcard - CLI
//!
//! Dictionary search with single-letter wildcards, in TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use word_wildcard::{
    commands::{BenchmarkConfig, dictionary_stats, run_benchmark, run_find, run_simple},
    core::Wildcard,
    dictionary::{DictionaryIndex, LoadReport, loader},
    output::{print_benchmark_result, print_find_results, print_stats},
    search::Matcher,
};

#[derive(Parser)]
#[command(
    name = "word_wildcard",
    about = "Find dictionary words matching a pattern with single-letter wildcards",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: embedded dictionary)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Character standing for one unknown letter
    #[arg(long, global = true, default_value_t = '?')]
    wildcard: char,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple prompt mode: enter patterns, 'q' to quit
    Simple,

    /// Look up one or more patterns and exit
    Find {
        /// Patterns to look up, e.g. C?T
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Show per-query timing
        #[arg(short, long)]
        timing: bool,
    },

    /// Show dictionary statistics
    Stats,

    /// Benchmark lookups with random patterns
    Benchmark {
        /// Number of random patterns to run
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Probability of masking each letter with the wildcard
        #[arg(short, long, default_value = "0.4")]
        ratio: f64,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG still wins when set
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Load the dictionary given by -d, or the embedded one
fn load_dictionary(path: Option<&str>) -> Result<(DictionaryIndex, LoadReport)> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {path}")),
        None => Ok(loader::load_embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let wildcard = Wildcard::new(cli.wildcard).context("Invalid --wildcard")?;
    let (index, report) = load_dictionary(cli.dictionary.as_deref())?;
    let matcher = Matcher::new(&index).with_wildcard(wildcard);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(matcher),
        Commands::Simple => {
            run_simple(&matcher).context("Prompt session failed")?;
            Ok(())
        }
        Commands::Find { patterns, timing } => run_find_command(&matcher, &patterns, timing),
        Commands::Stats => {
            print_stats(&dictionary_stats(&index, report));
            Ok(())
        }
        Commands::Benchmark {
            count,
            ratio,
            seed,
        } => run_benchmark_command(&matcher, count, ratio, seed),
    }
}

fn run_find_command(matcher: &Matcher<'_>, patterns: &[String], timing: bool) -> Result<()> {
    let results = run_find(matcher, patterns);
    print_find_results(&results, timing);

    let invalid = results.iter().filter(|r| r.is_error()).count();
    if invalid > 0 {
        bail!("{invalid} of {} patterns were invalid", results.len());
    }
    Ok(())
}

fn run_benchmark_command(
    matcher: &Matcher<'_>,
    count: usize,
    ratio: f64,
    seed: Option<u64>,
) -> Result<()> {
    println!("Running benchmark on {count} random patterns...");

    let config = BenchmarkConfig {
        count,
        wildcard_ratio: ratio,
        seed,
        show_progress: true,
    };
    let result = run_benchmark(matcher, &config).map_err(|e| anyhow::anyhow!(e))?;
    print_benchmark_result(&result);

    if result.unmatched > 0 {
        bail!("{} generated patterns missed their source word", result.unmatched);
    }
    Ok(())
}

fn run_play_command(matcher: Matcher<'_>) -> Result<()> {
    use word_wildcard::interactive::{App, run_tui};

    let app = App::new(matcher);
    run_tui(app)
}
