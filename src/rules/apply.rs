use crate::core::configuration::Configuration;
use crate::scenario::{Result, SearchError};

use super::movegen::{is_legal, Move};

/// Apply a move as a pure transform: returns a new configuration in which vehicle
/// `mv.vehicle` is displaced by `mv.delta` along its axis.
///
/// No bounds or overlap checks are made; applying a move that is not legal for `cfg` yields a
/// configuration that breaks the board invariants. Panics if `mv.vehicle` is out of range.
#[inline]
pub fn apply_move(cfg: &Configuration, mv: Move) -> Configuration {
    let mut next = cfg.clone();
    let v = next.vehicle_mut(mv.vehicle);
    *v = v.shifted(mv.delta);
    next
}

/// Checked variant of [`apply_move`] for moves from untrusted sources (files, user input).
///
/// `step` is only used to label the error.
pub fn try_apply_move(cfg: &Configuration, mv: Move, step: usize) -> Result<Configuration> {
    if !is_legal(cfg, mv) {
        return Err(SearchError::IllegalMove {
            step,
            vehicle: mv.vehicle,
            delta: mv.delta,
        });
    }
    Ok(apply_move(cfg, mv))
}
