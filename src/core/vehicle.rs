use serde::{Deserialize, Serialize};

use crate::core::coord::{Cell, BOARD_SIZE};

/// Axis a vehicle is locked to. A vehicle only ever moves along this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H", alias = "Horizontal")]
    Horizontal,
    #[serde(rename = "V", alias = "Vertical")]
    Vertical,
}

impl Orientation {
    /// Unit step from head towards tail.
    #[inline]
    pub const fn step(self) -> Cell {
        match self {
            Orientation::Horizontal => Cell::new(0, 1),
            Orientation::Vertical => Cell::new(1, 0),
        }
    }

    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        }
    }
}

/// A rigid vehicle: fixed orientation and length, positioned by its head cell
/// (leftmost for horizontal vehicles, topmost for vertical ones).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    pub orientation: Orientation,
    pub length: u8,
    pub row: i8,
    pub col: i8,
    #[serde(default)]
    pub is_target: bool,
}

impl Vehicle {
    #[inline]
    pub const fn new(orientation: Orientation, length: u8, row: i8, col: i8) -> Self {
        Self {
            orientation,
            length,
            row,
            col,
            is_target: false,
        }
    }

    #[inline]
    pub const fn horizontal(length: u8, row: i8, col: i8) -> Self {
        Self::new(Orientation::Horizontal, length, row, col)
    }

    #[inline]
    pub const fn vertical(length: u8, row: i8, col: i8) -> Self {
        Self::new(Orientation::Vertical, length, row, col)
    }

    #[inline]
    pub const fn as_target(mut self) -> Self {
        self.is_target = true;
        self
    }

    #[inline]
    pub fn head(&self) -> Cell {
        Cell::new(self.row, self.col)
    }

    #[inline]
    pub fn tail(&self) -> Cell {
        self.head() + self.orientation.step() * (self.length as i8 - 1)
    }

    /// Occupied cells, head first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let head = self.head();
        let step = self.orientation.step();
        (0..self.length as i8).map(move |i| head + step * i)
    }

    /// Coordinate along the vehicle's own axis (col if horizontal, row if vertical).
    #[inline]
    pub fn axis_pos(&self) -> i8 {
        match self.orientation {
            Orientation::Horizontal => self.col,
            Orientation::Vertical => self.row,
        }
    }

    /// Axis position at which the tail touches the far board edge.
    #[inline]
    pub fn exit_pos(&self) -> i8 {
        BOARD_SIZE - self.length as i8
    }

    /// Copy of this vehicle displaced by `delta` cells along its axis. No bounds checks.
    #[inline]
    pub fn shifted(mut self, delta: i8) -> Self {
        match self.orientation {
            Orientation::Horizontal => self.col += delta,
            Orientation::Vertical => self.row += delta,
        }
        self
    }

    pub fn in_bounds(&self) -> bool {
        self.head().in_bounds() && self.tail().in_bounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_follow_orientation() {
        let h = Vehicle::horizontal(3, 1, 2);
        let cells: Vec<Cell> = h.cells().collect();
        assert_eq!(cells, vec![Cell::new(1, 2), Cell::new(1, 3), Cell::new(1, 4)]);

        let v = Vehicle::vertical(2, 4, 0);
        let cells: Vec<Cell> = v.cells().collect();
        assert_eq!(cells, vec![Cell::new(4, 0), Cell::new(5, 0)]);
        assert_eq!(v.tail(), Cell::new(5, 0));
    }

    #[test]
    fn bounds_cover_tail() {
        assert!(Vehicle::horizontal(2, 0, 4).in_bounds());
        assert!(!Vehicle::horizontal(2, 0, 5).in_bounds());
        assert!(!Vehicle::vertical(3, -1, 0).in_bounds());
    }
}
