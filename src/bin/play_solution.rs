use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rush_hour::rules::goal::is_goal;
use rush_hour::solution::load_report;

#[derive(Debug, Parser)]
#[command(name = "play_solution", about = "Replay an exported Rush Hour solution in the terminal")]
struct Args {
    /// Solution report produced by `solve --export`
    report: PathBuf,

    /// Pause between frames, in milliseconds
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rush_hour=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let report = match load_report(&args.report) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to load report: {e}");
            return ExitCode::from(2);
        }
    };

    let delay = Duration::from_millis(args.delay_ms);
    let mut playback = report.playback();
    let total = report.moves.len();

    println!("{} ({total} moves)", report.puzzle_name);
    println!("step 0/{total}");
    println!("{}\n", playback.current());

    loop {
        match playback.step() {
            Ok(Some(mv)) => {
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let label = playback.current().label(mv.vehicle);
                println!("step {}/{total}: {label} {:+}", playback.position(), mv.delta);
                println!("{}\n", playback.current());
            }
            Ok(None) => break,
            Err(e) => {
                eprintln!("Replay failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    if is_goal(playback.current()) {
        println!("target freed");
        ExitCode::SUCCESS
    } else {
        eprintln!("replay ended without freeing the target");
        ExitCode::FAILURE
    }
}
