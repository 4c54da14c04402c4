use crate::core::configuration::Configuration;

/// Straight-line distance of the target from its exit position, ignoring blockers.
///
/// Every move changes the target's axis position by at most one, so this never overestimates
/// the remaining number of moves (admissible) and differs by at most one between neighbors
/// (consistent). Zero when no target is present.
#[inline]
pub fn distance_to_exit(cfg: &Configuration) -> u32 {
    match cfg.target() {
        Some(t) => (t.exit_pos() - t.axis_pos()).max(0) as u32,
        None => 0,
    }
}
