use crate::core::coord::{Cell, CELL_COUNT};
use crate::core::vehicle::Vehicle;

/// Cell -> vehicle index map over the whole board.
///
/// Rebuilt from scratch for every configuration; cells of out-of-bounds vehicles are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    cells: [Option<usize>; CELL_COUNT],
}

impl Occupancy {
    pub fn build(vehicles: &[Vehicle]) -> Self {
        let mut cells = [None; CELL_COUNT];
        for (idx, v) in vehicles.iter().enumerate() {
            for c in v.cells().filter(|c| c.in_bounds()) {
                cells[c.index()] = Some(idx);
            }
        }
        Self { cells }
    }

    /// Vehicle occupying `cell`, or `None` if empty or off the board.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<usize> {
        if cell.in_bounds() {
            self.cells[cell.index()]
        } else {
            None
        }
    }

    /// True iff `cell` is on the board and unoccupied.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        cell.in_bounds() && self.cells[cell.index()].is_none()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
