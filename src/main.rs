//! CLI entry point for the crossing solver.
//!
//! Usage:
//!   crossing-solver                 enumerate solutions as numbered text lines
//!   crossing-solver solve           same as the bare invocation
//!   crossing-solver solve --json    report the run as a single JSON document
//!
//! The puzzle itself is fixed (three agents of each class, a two-seat
//! vehicle), so the only choice is the output format. Text mode prints
//! each solution the moment it is found, then a summary line with the
//! solution count and the search duration.

mod action;
mod report;
mod search;
mod state;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use report::{render_summary, LinePrinter};
use search::{enumerate_solutions, SearchStats, SolutionLog};
use state::Configuration;

#[derive(Parser)]
#[command(name = "crossing-solver")]
#[command(about = "Exhaustive depth-first solver for a river crossing constraint puzzle")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every solution of the puzzle (the default)
    Solve {
        /// Report the run as a JSON document instead of text lines
        #[arg(long)]
        json: bool,
    },
}

/// Output format for a JSON-mode run
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    solutions_found: usize,
    states_expanded: usize,
    time_elapsed_us: u64,
    solutions: Vec<Vec<Configuration>>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Solve { json: false }) {
        Commands::Solve { json } => {
            if json {
                let mut log = SolutionLog::new();
                let stats = enumerate_solutions(&mut log);

                let output = format_output(&stats, log.into_solutions());
                println!("{}", serde_json::to_string_pretty(&output).unwrap());
            } else {
                let mut printer = LinePrinter::new();
                let stats = enumerate_solutions(&mut printer);

                println!("{}", render_summary(&stats));
            }
        }
    }
}

fn format_output(stats: &SearchStats, solutions: Vec<Vec<Configuration>>) -> SearchOutput {
    SearchOutput {
        solutions_found: stats.solutions_found,
        states_expanded: stats.states_expanded,
        time_elapsed_us: stats.time_elapsed.as_micros() as u64,
        solutions,
    }
}
