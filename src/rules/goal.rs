use crate::core::configuration::Configuration;

/// True if the target's tail touches the exit edge (right edge for a horizontal target,
/// bottom edge for a vertical one). Always false without a target.
pub fn is_goal(cfg: &Configuration) -> bool {
    match cfg.target() {
        Some(t) => t.axis_pos() == t.exit_pos(),
        None => false,
    }
}
