use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::{Cell, BOARD_SIZE};
use crate::core::occupancy::Occupancy;
use crate::core::vehicle::Vehicle;
use crate::state::StateKey;

/// Labels used when rendering non-target vehicles. `X` is reserved for the target.
const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWYZ";

/// An arrangement of all vehicles on the board.
///
/// The index of a vehicle in this sequence is its identity for the whole search: moves refer
/// to vehicles by index and expansion never reorders them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    vehicles: Vec<Vehicle>,
}

impl Configuration {
    #[inline]
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn vehicle(&self, idx: usize) -> &Vehicle {
        &self.vehicles[idx]
    }

    #[inline]
    pub(crate) fn vehicle_mut(&mut self, idx: usize) -> &mut Vehicle {
        &mut self.vehicles[idx]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Index of the first vehicle flagged as target.
    #[inline]
    pub fn target_index(&self) -> Option<usize> {
        self.vehicles.iter().position(|v| v.is_target)
    }

    #[inline]
    pub fn target(&self) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.is_target)
    }

    pub fn target_count(&self) -> usize {
        self.vehicles.iter().filter(|v| v.is_target).count()
    }

    #[inline]
    pub fn key(&self) -> StateKey {
        StateKey::of(self)
    }

    #[inline]
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::build(&self.vehicles)
    }

    /// Single-character label of a vehicle, as used by [`fmt::Display`].
    pub fn label(&self, idx: usize) -> char {
        if self.vehicles[idx].is_target {
            'X'
        } else {
            LABELS[idx % LABELS.len()] as char
        }
    }
}

impl From<Vec<Vehicle>> for Configuration {
    fn from(vehicles: Vec<Vehicle>) -> Self {
        Self::new(vehicles)
    }
}

/// Renders the board as N lines of N characters; `.` marks an empty cell.
impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let occ = self.occupancy();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let ch = match occ.get(Cell::new(row, col)) {
                    Some(idx) => self.label(idx),
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_target_as_x() {
        let cfg = Configuration::new(vec![
            Vehicle::horizontal(2, 2, 0).as_target(),
            Vehicle::vertical(3, 0, 5),
        ]);
        let expected = [
            ".....B", ".....B", "XX...B", "......", "......", "......",
        ]
        .join("\n");
        assert_eq!(cfg.to_string(), expected);
        assert_eq!(cfg.target_index(), Some(0));
        assert_eq!(cfg.target_count(), 1);
    }
}
