//! Built-in puzzles (compile-time configs) and file-backed ones.

pub mod file;

use std::path::PathBuf;

use crate::core::vehicle::Vehicle;
use crate::scenario::{Puzzle, ResourceLimits, SearchError};

fn demo_limits() -> ResourceLimits {
    ResourceLimits {
        max_expansions: 200_000,
        max_states: 1_000_000,
        max_edges: 25_000_000,
    }
}

/// A lone horizontal target two cells from the exit. Two moves.
pub fn lone_target() -> Puzzle {
    Puzzle::new("lone_target", vec![Vehicle::horizontal(2, 2, 2).as_target()])
        .with_limits(demo_limits())
}

/// Target at the left edge with a vertical blocker on its row; the blocker must step up
/// before the target passes. Five moves.
pub fn single_blocker() -> Puzzle {
    Puzzle::new(
        "single_blocker",
        vec![
            Vehicle::horizontal(2, 2, 0).as_target(),
            Vehicle::vertical(2, 1, 3),
        ],
    )
    .with_limits(demo_limits())
}

/// Target against the left edge with two length-3 vertical vehicles filling column 2: no
/// vehicle has a legal move. Unsolvable.
pub fn boxed_in() -> Puzzle {
    Puzzle::new(
        "boxed_in",
        vec![
            Vehicle::horizontal(2, 2, 0).as_target(),
            Vehicle::vertical(3, 0, 2),
            Vehicle::vertical(3, 3, 2),
        ],
    )
    .with_limits(demo_limits())
}

/// Beginner-level eight vehicle board:
///
/// ```text
/// AA...B
/// C..D.B
/// CXXD.B
/// C..D..
/// E...FF
/// E.GGG.
/// ```
pub fn jam_1() -> Puzzle {
    Puzzle::new(
        "jam_1",
        vec![
            Vehicle::horizontal(2, 2, 1).as_target(),
            Vehicle::horizontal(2, 0, 0),
            Vehicle::vertical(3, 0, 5),
            Vehicle::vertical(3, 1, 0),
            Vehicle::vertical(3, 1, 3),
            Vehicle::vertical(2, 4, 0),
            Vehicle::horizontal(2, 4, 4),
            Vehicle::horizontal(3, 5, 2),
        ],
    )
    .with_limits(demo_limits())
}

/// The tuple-text puzzle shipped in `tests/data/rush_dense.txt`.
pub fn dense_from_file() -> Result<Puzzle, SearchError> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("rush_dense.txt");
    Ok(file::load_puzzle(&path)?.with_limits(ResourceLimits::default()))
}

/// Return a puzzle by name.
pub fn by_name(name: &str) -> Result<Option<Puzzle>, SearchError> {
    match name {
        "lone_target" => Ok(Some(lone_target())),
        "single_blocker" => Ok(Some(single_blocker())),
        "boxed_in" => Ok(Some(boxed_in())),
        "jam_1" => Ok(Some(jam_1())),
        "dense_from_file" => Ok(Some(dense_from_file()?)),
        _ => Ok(None),
    }
}

/// Names of all built-in puzzles.
pub fn names() -> &'static [&'static str] {
    &[
        "lone_target",
        "single_blocker",
        "boxed_in",
        "jam_1",
        "dense_from_file",
    ]
}
