//! # Main: CLI Entry Point
//!
//! Parses the search parameters, raises them to their minimums and runs the
//! scan. Found numbers go to stdout one per line, framed by a header and a
//! summary. The progress bar is redrawn in place on stderr.
//!
//! ## Logging
//!
//! `RUST_LOG` controls the filter, `LOG_FORMAT=json` switches to JSON lines.
//! With `--log` the progress bar is replaced by `tracing` events.

use anyhow::Result;
use clap::Parser;
use spsp_search::search::{DEFAULT_BASE, DEFAULT_BOUND, DEFAULT_RESOLUTION};
use spsp_search::{scan_with, LogReporter, ScanConfig, ScanReporter};
use std::convert::TryFrom;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

const RULE_WIDTH: usize = 60;
const BAR_WIDTH: u64 = 20;

#[derive(Parser)]
#[command(
    name = "spsp-search",
    about = "Search for strong pseudoprimes to a given base"
)]
struct Cli {
    /// The base to search for strong pseudoprimes
    #[arg(short, long, default_value_t = DEFAULT_BASE as i64, allow_negative_numbers = true)]
    base: i64,

    /// The upper bound to search for strong pseudoprimes, essentially the amount of numbers to check
    #[arg(short = 'c', long, default_value_t = DEFAULT_BOUND as i64, allow_negative_numbers = true)]
    count: i64,

    /// The resolution of the progress bar
    #[arg(short, long, default_value_t = DEFAULT_RESOLUTION as i64, allow_negative_numbers = true)]
    resolution: i64,

    /// Report through log events instead of the progress bar
    #[arg(long)]
    log: bool,
}

/// Renders scan events on the terminal
struct TerminalReporter {
    base: u64,
    bound: u64,
    bar: String,
}

impl TerminalReporter {
    fn new(config: &ScanConfig<u64>) -> Self {
        TerminalReporter {
            base: config.base,
            bound: config.bound,
            bar: String::new(),
        }
    }
}

fn render_bar(segment: u64, total: u64, elapsed_secs: f64) -> String {
    let filled = (segment / (total / BAR_WIDTH).max(1)).min(BAR_WIDTH) as usize;
    format!(
        "[{}{}]  {:.2}% {:.2}s",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH as usize - filled),
        segment as f64 / total as f64 * 100.,
        elapsed_secs
    )
}

impl ScanReporter<u64> for TerminalReporter {
    fn on_found(&mut self, n: &u64) {
        eprint!("\r\x1b[K");
        println!("{}", n);
        eprint!("\r{}", self.bar);
    }

    fn on_progress(&mut self, segment: u64, total: u64, elapsed_secs: f64) {
        self.bar = render_bar(segment, total, elapsed_secs);
        eprint!("\r{}", self.bar);
    }

    fn on_summary(&mut self, count: usize, elapsed_secs: f64) {
        eprint!("\r\x1b[K");
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "Found {} strong pseudoprimes to base {} below {} in {:.2}s",
            count, self.base, self.bound, elapsed_secs
        );
    }
}

fn init_tracing(log: bool) {
    let default_level = if log { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

/// Negative values map to zero, which the config raises to the minimum
fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log);

    let config = ScanConfig::clamped(
        non_negative(cli.base),
        non_negative(cli.count),
        non_negative(cli.resolution),
    );
    info!(
        base = config.base,
        bound = config.bound,
        resolution = config.resolution,
        "searching for strong pseudoprimes"
    );

    if cli.log {
        scan_with(&config, &mut LogReporter);
        return Ok(());
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "Searching for strong pseudoprimes to base {} below {}",
        config.base, config.bound
    );
    println!("{}", "-".repeat(RULE_WIDTH));

    let mut reporter = TerminalReporter::new(&config);
    scan_with(&config, &mut reporter);
    std::io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_bar_test() {
        assert_eq!(render_bar(0, 20, 0.), "[                    ]  0.00% 0.00s");
        assert_eq!(render_bar(5000, 10000, 1.5), "[==========          ]  50.00% 1.50s");
        assert_eq!(render_bar(20, 20, 2.), "[====================]  100.00% 2.00s");
        // resolutions that are not multiples of the bar width never overflow it
        assert_eq!(render_bar(39, 39, 0.), "[====================]  100.00% 0.00s");
    }

    #[test]
    fn non_negative_test() {
        assert_eq!(non_negative(-3), 0);
        assert_eq!(non_negative(0), 0);
        assert_eq!(non_negative(42), 42);
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["spsp-search"]);
        assert_eq!(cli.base, 2);
        assert_eq!(cli.count, 100_000);
        assert_eq!(cli.resolution, 10_000);
        assert!(!cli.log);

        let cli = Cli::parse_from(["spsp-search", "-b", "-7", "-c", "3", "-r", "5"]);
        let config = ScanConfig::clamped(
            non_negative(cli.base),
            non_negative(cli.count),
            non_negative(cli.resolution),
        );
        assert_eq!(config, ScanConfig::new(2, 5, 20).unwrap());
    }
}
