//! CLI entry point for the puzzle solvers.
//!
//! Usage:
//!   puzzle-solvers wires [FILE] [--json]
//!   puzzle-solvers passwords [FILE] [--json]
//!
//! FILE defaults to `input.txt`. Logging goes to stderr and is controlled
//! by `-v` or `RUST_LOG`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use puzzle_solvers::{
    count_matching, find_crossings, parse_range, parse_wires, read_lines, PuzzleError, Result,
    Rule,
};

#[derive(Parser)]
#[command(name = "puzzle-solvers")]
#[command(about = "Crossed-wires and secure-container puzzle solvers")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the closest and cheapest crossing of two wires
    Wires {
        /// Path to the input file with two wire descriptions
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        /// Print the answers as JSON
        #[arg(long)]
        json: bool,
    },
    /// Count passwords in a range that satisfy the digit rules
    Passwords {
        /// Path to the input file with a `dddddd-dddddd` range
        #[arg(value_name = "FILE", default_value = "input.txt")]
        file: PathBuf,

        /// Print the answers as JSON
        #[arg(long)]
        json: bool,
    },
}

/// JSON output for the password checker
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordsOutput {
    low: u32,
    high: u32,
    any_pair: usize,
    exact_pair: usize,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Wires { file, json } => run_wires(&file, json),
        Commands::Passwords { file, json } => run_passwords(&file, json),
    };

    if let Err(e) = result {
        debug!(error = ?e, "puzzle failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log level used when `RUST_LOG` is unset. Failures are logged at
/// debug, so by default they only reach stderr through `Error: ...`.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_wires(path: &Path, json: bool) -> Result<()> {
    let lines = read_lines(path)?;
    let (first, second) = parse_wires(&lines)?;
    let report = find_crossings(&first, &second).ok_or(PuzzleError::NoCrossing)?;

    info!(
        distance = report.closest_distance,
        steps = report.fewest_steps,
        crossings = report.crossings,
        "wires traced"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_answers(report.closest_distance, report.fewest_steps);
    }
    Ok(())
}

fn run_passwords(path: &Path, json: bool) -> Result<()> {
    let lines = read_lines(path)?;
    let range = parse_range(&lines)?;
    info!(low = range.low(), high = range.high(), size = range.size(), "checking range");

    let any_pair = count_matching(&range, Rule::AnyPair);
    let exact_pair = count_matching(&range, Rule::ExactPair);

    if json {
        let output = PasswordsOutput {
            low: range.low(),
            high: range.high(),
            any_pair,
            exact_pair,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_answers(any_pair, exact_pair);
    }
    Ok(())
}

fn print_answers(part_one: impl std::fmt::Display, part_two: impl std::fmt::Display) {
    println!("--- Part One ---");
    println!("{}", part_one);
    println!("--- Part Two ---");
    println!("{}", part_two);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_log_hidden_by_default() {
        let filter = EnvFilter::new(default_level(0));
        assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::WARN));
        assert_eq!(default_level(1), "info");
        assert_eq!(default_level(3), "debug");
    }

    #[test]
    fn test_cli_defaults_to_input_txt() {
        let cli = Cli::try_parse_from(["puzzle-solvers", "wires"]).unwrap();
        match cli.command {
            Commands::Wires { file, json } => {
                assert_eq!(file, PathBuf::from("input.txt"));
                assert!(!json);
            }
            Commands::Passwords { .. } => panic!("expected wires subcommand"),
        }
        assert_eq!(cli.verbose, 0);
    }
}
