//! Exportable solution reports, replay and verification.
//!
//! A report is intended to be:
//! - **self-contained**: it stores the start vehicles, so it replays even if the built-in
//!   puzzle code changes,
//! - **human-readable**: plain JSON, moves plus their slide grouping,
//! - **checkable**: [`SolutionReport::verify`] replays every move through the checked applier.
//!
//! See `src/bin/solve.rs` (`--export`) and `src/bin/play_solution.rs` for the user-facing
//! tools.

pub mod slides;

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::configuration::Configuration;
use crate::rules::apply::try_apply_move;
use crate::rules::goal::is_goal;
use crate::rules::movegen::Move;
use crate::scenario::{validate_configuration, Puzzle, Result, SearchError};
use crate::search::astar::{SearchStats, Solution};

pub use slides::{compress_slides, Slide};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionReport {
    pub format_version: u32,
    pub puzzle_name: String,
    pub vehicles: Configuration,
    pub moves: Vec<Move>,
    pub slides: Vec<Slide>,
    pub stats: SearchStats,
}

impl SolutionReport {
    pub fn new(puzzle: &Puzzle, solution: &Solution) -> Self {
        Self {
            format_version: FORMAT_VERSION,
            puzzle_name: puzzle.name.clone(),
            vehicles: puzzle.configuration.clone(),
            moves: solution.moves.clone(),
            slides: solution.slides(),
            stats: solution.stats,
        }
    }

    /// Replay the moves from the stored start and check that they end in a goal.
    pub fn verify(&self) -> Result<Configuration> {
        verify_solution(&self.vehicles, &self.moves)
    }

    pub fn playback(&self) -> Playback {
        Playback::new(self.vehicles.clone(), self.moves.clone())
    }
}

pub fn save_report(path: &Path, report: &SolutionReport) -> Result<()> {
    let f = fs::File::create(path).map_err(|source| SearchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, report).map_err(|e| SearchError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    w.write_all(b"\n")
        .and_then(|_| w.flush())
        .map_err(|source| SearchError::Io {
            path: path.display().to_string(),
            source,
        })?;
    debug!(path = %path.display(), moves = report.moves.len(), "solution report written");
    Ok(())
}

/// Load a report and check its start vehicles, so replay only ever sees a well-formed board.
pub fn load_report(path: &Path) -> Result<SolutionReport> {
    let f = fs::File::open(path).map_err(|source| SearchError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let report: SolutionReport =
        serde_json::from_reader(BufReader::new(f)).map_err(|e| SearchError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    if report.format_version != FORMAT_VERSION {
        return Err(SearchError::Parse {
            path: path.display().to_string(),
            reason: format!(
                "unsupported format_version {} (expected {FORMAT_VERSION})",
                report.format_version
            ),
        });
    }
    validate_configuration(&report.vehicles)?;
    Ok(report)
}

/// Every configuration along `moves`, starting with `start`. Moves are checked.
pub fn replay(start: &Configuration, moves: &[Move]) -> Result<Vec<Configuration>> {
    let mut frames: Vec<Configuration> = Vec::with_capacity(moves.len() + 1);
    frames.push(start.clone());
    for (step, &mv) in moves.iter().enumerate() {
        let next = try_apply_move(&frames[step], mv, step)?;
        frames.push(next);
    }
    Ok(frames)
}

/// Apply `moves` with legality checks and require the result to be a goal configuration.
pub fn verify_solution(start: &Configuration, moves: &[Move]) -> Result<Configuration> {
    let mut cur = start.clone();
    for (step, &mv) in moves.iter().enumerate() {
        cur = try_apply_move(&cur, mv, step)?;
    }
    if !is_goal(&cur) {
        return Err(SearchError::InvalidPuzzle {
            reason: format!("replaying {} moves does not free the target", moves.len()),
        });
    }
    Ok(cur)
}

/// Step-at-a-time driver over a move list, for externally timed playback.
#[derive(Debug, Clone)]
pub struct Playback {
    current: Configuration,
    moves: Vec<Move>,
    cursor: usize,
}

impl Playback {
    pub fn new(start: Configuration, moves: Vec<Move>) -> Self {
        Self {
            current: start,
            moves,
            cursor: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> &Configuration {
        &self.current
    }

    /// Number of moves applied so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.moves.len() - self.cursor
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.cursor == self.moves.len()
    }

    /// Apply the next move. Returns `Ok(None)` once every move has been played.
    pub fn step(&mut self) -> Result<Option<Move>> {
        let Some(&mv) = self.moves.get(self.cursor) else {
            return Ok(None);
        };
        self.current = try_apply_move(&self.current, mv, self.cursor)?;
        self.cursor += 1;
        Ok(Some(mv))
    }
}
