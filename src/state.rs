use crate::core::configuration::Configuration;
use crate::core::vehicle::Vehicle;

/// Canonical key of a configuration, used for duplicate detection and as the lookup key of the
/// g-score and predecessor maps.
///
/// Encoding: one `u32` word per vehicle, in configuration order:
///
/// ```text
/// bits 24..32  orientation (0 = horizontal, 1 = vertical)
/// bits 16..24  length
/// bits  8..16  row  (two's complement byte)
/// bits  0..8   col  (two's complement byte)
/// ```
///
/// Two keys are equal iff the configurations agree, in order, on every vehicle's orientation,
/// length, row and col. The target flag is not part of the key; callers keep the target fixed
/// for the lifetime of a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey(Box<[u32]>);

impl StateKey {
    pub fn of(cfg: &Configuration) -> Self {
        Self(cfg.vehicles().iter().map(pack_vehicle).collect())
    }

    #[inline]
    pub fn vehicle_count(&self) -> usize {
        self.0.len()
    }
}

#[inline]
pub fn pack_vehicle(v: &Vehicle) -> u32 {
    (v.orientation.code() << 24)
        | ((v.length as u32) << 16)
        | ((v.row as u8 as u32) << 8)
        | (v.col as u8 as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_layout_is_stable() {
        assert_eq!(pack_vehicle(&Vehicle::horizontal(2, 2, 0)), 0x0002_0200);
        assert_eq!(pack_vehicle(&Vehicle::vertical(3, 0, 5)), 0x0103_0005);
        assert_eq!(pack_vehicle(&Vehicle::horizontal(2, 0, -1)), 0x0002_00ff);
    }

    #[test]
    fn key_is_order_sensitive() {
        let a = Configuration::new(vec![Vehicle::horizontal(2, 0, 0), Vehicle::vertical(2, 2, 2)]);
        let b = Configuration::new(vec![Vehicle::vertical(2, 2, 2), Vehicle::horizontal(2, 0, 0)]);
        assert_ne!(a.key(), b.key());
        assert_eq!(a.key().vehicle_count(), 2);
    }
}
