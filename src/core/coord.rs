use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// Side length of the (square) board.
pub const BOARD_SIZE: i8 = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        in_bounds(self.row, self.col)
    }

    /// Row-major index into an N×N grid. Only meaningful for in-bounds cells.
    #[inline]
    pub fn index(self) -> usize {
        debug_assert!(self.in_bounds());
        (self.row as usize) * (BOARD_SIZE as usize) + self.col as usize
    }
}

impl Add for Cell {
    type Output = Cell;

    #[inline]
    fn add(self, rhs: Cell) -> Self::Output {
        Cell::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i8> for Cell {
    type Output = Cell;

    #[inline]
    fn mul(self, rhs: i8) -> Cell {
        Cell {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

#[inline]
pub fn in_bounds(row: i8, col: i8) -> bool {
    (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col)
}
