//! Pure puzzle rules: move generation, move application and the goal test.

pub mod apply;
pub mod goal;
pub mod movegen;

pub use apply::{apply_move, try_apply_move};
pub use goal::is_goal;
pub use movegen::{legal_moves, successors, Move};
