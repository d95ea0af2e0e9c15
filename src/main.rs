//! CLI entry point for the puzzle solver.
//!
//! Usage:
//!   puzzle-solver crossing <PUPS> <WOLVES>
//!   puzzle-solver strings <START> <END>
//!   puzzle-solver hoppers <FILE>
//!
//! Each command runs a breadth-first search and prints the search
//! statistics followed by the solution steps, or `No solution`. With
//! `--json` the result is printed as a single JSON object instead.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use puzzle_solver::{
    build_path, Configuration, CrossingConfig, HoppersConfig, Solver, StringsConfig,
};

#[derive(Parser)]
#[command(name = "puzzle-solver")]
#[command(about = "Breadth-first search solver for transition-graph puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print the result as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a river-crossing puzzle with the given pack
    Crossing {
        /// Number of pups starting on the left bank
        pups: u32,
        /// Number of wolves starting on the left bank
        wolves: u32,
    },
    /// Solve a string ladder between two words of equal length
    Strings {
        /// Starting word (uppercase A-Z)
        start: String,
        /// Target word (uppercase A-Z)
        end: String,
    },
    /// Solve a hoppers board loaded from a puzzle file
    Hoppers {
        /// Path to the board file
        file: PathBuf,
    },
}

/// Result of one solve, in the JSON output format.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    total_configs: usize,
    unique_configs: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<String>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Crossing { pups, wolves } => {
            let start = CrossingConfig::start(pups, wolves);
            let goal = CrossingConfig::goal(pups, wolves);
            let mut solver = Solver::new();
            let steps = solver
                .find_path(&start, &goal)
                .map(|predecessors| display_path(&predecessors, &start, &goal))
                .ok();
            report(
                cli.json,
                &format!("Pups: {}, Wolves: {}", pups, wolves),
                &solver,
                steps,
                false,
            )
        }
        Commands::Strings { start, end } => {
            if start.len() != end.len() {
                eprintln!("Strings must be the same length to solve");
                return ExitCode::FAILURE;
            }
            let start = StringsConfig::new(&start);
            let target = StringsConfig::new(&end);
            let mut solver = Solver::new();
            let steps = solver
                .find_path(&start, &target)
                .map(|predecessors| display_path(&predecessors, &start, &target))
                .ok();
            report(
                cli.json,
                &format!("Start: {}, End: {}", start, target),
                &solver,
                steps,
                false,
            )
        }
        Commands::Hoppers { file } => {
            let start = match HoppersConfig::from_file(&file) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error loading puzzle: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let mut solver = Solver::new();
            let steps = solver
                .find_any(&start)
                .map(|(predecessors, goal)| display_path(&predecessors, &start, &goal))
                .ok();
            report(
                cli.json,
                &format!("File: {}\n{}", file.display(), start),
                &solver,
                steps,
                true,
            )
        }
    }
}

/// Render a solution path as one display string per step.
fn display_path<C: Configuration>(
    predecessors: &puzzle_solver::Predecessors<C>,
    start: &C,
    end: &C,
) -> Vec<String> {
    build_path(predecessors, start, end)
        .iter()
        .map(C::to_string)
        .collect()
}

/// Print the result and map it to the process exit code.
fn report(
    json: bool,
    header: &str,
    solver: &Solver,
    steps: Option<Vec<String>>,
    multiline: bool,
) -> ExitCode {
    let solved = steps.is_some();
    if json {
        let output = SolveOutput {
            solved,
            total_configs: solver.total_configs(),
            unique_configs: solver.unique_configs(),
            steps,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error formatting output: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", header);
        println!("Total configurations: {}", solver.total_configs());
        println!("Unique configurations: {}", solver.unique_configs());
        match &steps {
            None => println!("No solution"),
            Some(steps) => {
                for (step, config) in steps.iter().enumerate() {
                    if multiline {
                        println!("\nStep {}: \n{}", step, config);
                    } else {
                        println!("Step {}: {}", step, config);
                    }
                }
            }
        }
    }
    if solved {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
