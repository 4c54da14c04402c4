use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rush_hour::core::configuration::Configuration;
use rush_hour::scenario::{Puzzle, SolverConfig};
use rush_hour::scenarios;
use rush_hour::scenarios::file::load_puzzle;
use rush_hour::search::astar::SearchOutcome;
use rush_hour::solution::{save_report, SolutionReport};

const EXIT_BAD_INPUT: u8 = 2;
const EXIT_EXHAUSTED: u8 = 3;
const EXIT_BUDGET: u8 = 4;

#[derive(Debug, Parser)]
#[command(name = "solve", about = "Rush Hour shortest-solution solver")]
#[command(group(ArgGroup::new("input").required(true).args(["puzzle", "file", "list"])))]
struct Args {
    /// Built-in puzzle name (see --list)
    #[arg(long)]
    puzzle: Option<String>,

    /// Puzzle file: JSON (.json) or the board builder's tuple text
    #[arg(long)]
    file: Option<PathBuf>,

    /// List built-in puzzles and exit
    #[arg(long)]
    list: bool,

    /// Solver configuration TOML ([limits] section)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Node-expansion budget; overrides the puzzle and config values
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Print the solution grouped into slides instead of single-cell moves
    #[arg(long)]
    slides: bool,

    /// Write a JSON solution report here when solved
    #[arg(long)]
    export: Option<PathBuf>,
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rush_hour=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_input(args: &Args) -> Result<Puzzle, String> {
    let mut puzzle = if let Some(path) = &args.file {
        load_puzzle(path).map_err(|e| format!("Failed to load {}: {e}", path.display()))?
    } else {
        let name = args.puzzle.as_deref().unwrap_or_default();
        match scenarios::by_name(name) {
            Ok(Some(p)) => p,
            Ok(None) => {
                return Err(format!(
                    "Unknown puzzle: {name}\n\nAvailable puzzles:\n  - {}",
                    scenarios::names().join("\n  - ")
                ))
            }
            Err(e) => return Err(format!("Failed to load puzzle {name}: {e}")),
        }
    };

    if let Some(path) = &args.config {
        let config = SolverConfig::load(path).map_err(|e| e.to_string())?;
        puzzle.limits = config.limits;
    }
    if let Some(n) = args.max_expansions {
        if n == 0 {
            return Err("--max-expansions must be at least 1".to_string());
        }
        puzzle.limits.max_expansions = n;
    }

    puzzle
        .validate()
        .map_err(|e| format!("Invalid puzzle {}: {e}", puzzle.name))?;
    Ok(puzzle)
}

fn describe(cfg: &Configuration, vehicle: usize, delta: i8, distance: u32) -> String {
    format!("{} (vehicle {vehicle}) {:+}", cfg.label(vehicle), i32::from(delta) * distance as i32)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    if args.list {
        for name in scenarios::names() {
            println!("{name}");
        }
        return ExitCode::SUCCESS;
    }

    let puzzle = match load_input(&args) {
        Ok(p) => p,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    info!(puzzle = %puzzle.name, vehicles = puzzle.configuration.len(), "solving");
    println!("puzzle: {}", puzzle.name);
    println!("{}", puzzle.configuration);

    let outcome = match puzzle.solve() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Solve failed: {e}");
            return ExitCode::from(EXIT_BAD_INPUT);
        }
    };

    let stats = outcome.stats();
    match &outcome {
        SearchOutcome::Solved(sol) => {
            println!(
                "solved: {} moves (expansions={}, states={})",
                sol.len(),
                stats.expansions,
                stats.states
            );
            let cfg = &puzzle.configuration;
            if args.slides {
                for (i, s) in sol.slides().iter().enumerate() {
                    println!("{:>3}. {}", i + 1, describe(cfg, s.vehicle, s.delta, s.distance));
                }
            } else {
                for (i, mv) in sol.moves.iter().enumerate() {
                    println!("{:>3}. {}", i + 1, describe(cfg, mv.vehicle, mv.delta, 1));
                }
            }

            if let Some(path) = &args.export {
                let report = SolutionReport::new(&puzzle, sol);
                if let Err(e) = save_report(path, &report) {
                    eprintln!("Export failed: {e}");
                    return ExitCode::FAILURE;
                }
                println!("exported solution report to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        SearchOutcome::Exhausted { .. } => {
            println!(
                "exhausted: no solution (expansions={}, states={})",
                stats.expansions, stats.states
            );
            ExitCode::from(EXIT_EXHAUSTED)
        }
        SearchOutcome::BudgetExceeded { metric, limit, .. } => {
            println!(
                "budget exceeded: {metric} limit {limit} (expansions={}, states={})",
                stats.expansions, stats.states
            );
            ExitCode::from(EXIT_BUDGET)
        }
    }
}
