//! A shortest-solution solver for Rush Hour sliding-block puzzles on a 6x6 board.
//!
//! The core is an A* search over vehicle configurations with single-cell moves, a
//! straight-line heuristic on the target vehicle and explicit expansion budgets. Around it sit
//! puzzle files, solution reports, a BFS reference solver and two small binaries.

pub mod core;
pub mod state;
pub mod rules;
pub mod scenario;
pub mod scenarios;
pub mod search;
pub mod solution;

pub use crate::core::configuration::Configuration;
pub use crate::core::vehicle::{Orientation, Vehicle};
pub use crate::rules::movegen::Move;
pub use crate::scenario::{Puzzle, ResourceLimits, SearchError};
pub use crate::search::astar::{solve, SearchOutcome, Solution};
