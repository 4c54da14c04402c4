use serde::{Deserialize, Serialize};

use crate::core::configuration::Configuration;
use crate::core::occupancy::Occupancy;

use super::apply::apply_move;

/// A single-cell displacement of one vehicle along its own axis.
///
/// `delta` is `-1` (left / up) or `+1` (right / down). A slide over several cells is several
/// moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub vehicle: usize,
    pub delta: i8,
}

impl Move {
    #[inline]
    pub const fn new(vehicle: usize, delta: i8) -> Self {
        Self { vehicle, delta }
    }

    #[inline]
    pub const fn forward(vehicle: usize) -> Self {
        Self::new(vehicle, 1)
    }

    #[inline]
    pub const fn backward(vehicle: usize) -> Self {
        Self::new(vehicle, -1)
    }

    /// The move that undoes this one.
    #[inline]
    pub const fn reversed(self) -> Self {
        Self::new(self.vehicle, -self.delta)
    }
}

/// Legal single-cell moves, vehicles in index order, `-1` before `+1`.
pub fn legal_moves(cfg: &Configuration) -> Vec<Move> {
    let occ = cfg.occupancy();
    legal_moves_with(cfg, &occ)
}

/// Same as [`legal_moves`] with a caller-built occupancy grid.
pub fn legal_moves_with(cfg: &Configuration, occ: &Occupancy) -> Vec<Move> {
    let mut out: Vec<Move> = Vec::with_capacity(2 * cfg.len());

    for (idx, v) in cfg.vehicles().iter().enumerate() {
        let step = v.orientation.step();
        let behind = v.head() + step * -1;
        let ahead = v.tail() + step;

        if occ.is_free(behind) {
            out.push(Move::backward(idx));
        }
        if occ.is_free(ahead) {
            out.push(Move::forward(idx));
        }
    }

    out
}

/// Every legal move paired with the configuration it produces. Each neighbor is a fresh copy.
pub fn successors(cfg: &Configuration) -> Vec<(Move, Configuration)> {
    legal_moves(cfg)
        .into_iter()
        .map(|mv| (mv, apply_move(cfg, mv)))
        .collect()
}

#[inline]
pub fn is_legal(cfg: &Configuration, mv: Move) -> bool {
    mv.vehicle < cfg.len() && legal_moves(cfg).contains(&mv)
}
