//! Search engines over the configuration graph (A*, plus a BFS reference solver).

pub mod astar;
pub mod bfs;
pub mod frontier;
pub mod heuristic;
pub mod movegen;
pub mod resources;

pub use astar::{solve, solve_with, SearchOutcome, SearchStats, Solution};
