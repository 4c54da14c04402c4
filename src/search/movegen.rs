use crate::core::configuration::Configuration;
use crate::rules::movegen::{successors, Move};
use crate::scenario::SearchError;
use crate::search::resources::ResourceTracker;

/// [`successors`] with the generated edges counted against the tracker's edge budget.
pub fn tracked_successors(
    cfg: &Configuration,
    stage: &'static str,
    tracker: &mut ResourceTracker,
) -> Result<Vec<(Move, Configuration)>, SearchError> {
    let out = successors(cfg);
    tracker.bump_edges(stage, out.len())?;
    Ok(out)
}
