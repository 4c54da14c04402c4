//! A* search over the configuration graph.
//!
//! Every edge costs one move and [`distance_to_exit`] is consistent, so the first goal
//! configuration popped from the frontier closes a shortest path. The engine:
//! - records the best known `g` and a predecessor link per canonical key,
//! - counts every frontier pop against `ResourceLimits::max_expansions`,
//! - rebuilds the move list from the predecessor links once a goal is popped.
//!
//! Outcomes are a closed set: [`SearchOutcome::Solved`], [`SearchOutcome::Exhausted`] (the
//! reachable space holds no goal) and [`SearchOutcome::BudgetExceeded`] (solvability unknown).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::configuration::Configuration;
use crate::rules::goal::is_goal;
use crate::rules::movegen::Move;
use crate::scenario::{check_target, ResourceCounts, ResourceLimits, Result, SearchError};
use crate::search::frontier::{Frontier, FrontierNode};
use crate::search::heuristic::distance_to_exit;
use crate::search::movegen::tracked_successors;
use crate::search::resources::ResourceTracker;
use crate::solution::slides::{compress_slides, Slide};
use crate::state::StateKey;

const TRACE_EVERY: u64 = 10_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier pops, stale entries included.
    pub expansions: u64,
    /// Generated (move, neighbor) pairs.
    pub generated: u64,
    /// Distinct configurations that received a cost.
    pub states: u64,
    pub peak_frontier: u64,
}

impl SearchStats {
    fn from_counts(counts: ResourceCounts, states: usize, peak_frontier: usize) -> Self {
        Self {
            expansions: counts.expansions,
            generated: counts.edges,
            states: states as u64,
            peak_frontier: peak_frontier as u64,
        }
    }
}

/// A shortest move sequence from the start configuration to a goal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl Solution {
    /// Number of single-cell moves.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn slides(&self) -> Vec<Slide> {
        compress_slides(&self.moves)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Solution),
    /// The frontier ran empty: no goal is reachable from the start.
    Exhausted { stats: SearchStats },
    /// A budget ran out before the search finished.
    BudgetExceeded {
        metric: &'static str,
        limit: u64,
        stats: SearchStats,
    },
}

impl SearchOutcome {
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// The solution moves, or `None` for both failure outcomes.
    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            SearchOutcome::Solved(sol) => Some(&sol.moves),
            _ => None,
        }
    }

    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SearchOutcome::Solved(sol) => Some(sol),
            _ => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            SearchOutcome::Solved(sol) => sol.stats,
            SearchOutcome::Exhausted { stats } | SearchOutcome::BudgetExceeded { stats, .. } => {
                *stats
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SearchOutcome::Solved(_) => "solved",
            SearchOutcome::Exhausted { .. } => "exhausted",
            SearchOutcome::BudgetExceeded { .. } => "budget_exceeded",
        }
    }
}

enum Termination {
    Goal(StateKey),
    Exhausted,
}

/// Solve `start` with a fresh frontier.
pub fn solve(start: &Configuration, limits: ResourceLimits) -> Result<SearchOutcome> {
    let mut frontier = Frontier::new();
    solve_with(start, limits, &mut frontier)
}

/// Solve `start` using a caller-owned frontier. The frontier is cleared first; on return it
/// holds whatever was left unexpanded.
///
/// Fails with [`SearchError::MissingTarget`] / [`SearchError::MultipleTargets`] before
/// searching. Other structural invariants are assumed, not checked.
pub fn solve_with(
    start: &Configuration,
    limits: ResourceLimits,
    frontier: &mut Frontier,
) -> Result<SearchOutcome> {
    check_target(start)?;
    frontier.clear();

    let mut tracker = ResourceTracker::new(limits);
    let mut g_score: FxHashMap<StateKey, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<StateKey, (StateKey, Move)> = FxHashMap::default();
    let start_key = start.key();

    debug!(
        vehicles = start.len(),
        h0 = distance_to_exit(start),
        max_expansions = limits.max_expansions,
        "astar: start"
    );

    let run = expand(
        start,
        &start_key,
        frontier,
        &mut tracker,
        &mut g_score,
        &mut came_from,
    );
    let stats = SearchStats::from_counts(tracker.counts(), g_score.len(), frontier.peak_len());

    let outcome = match run {
        Ok(Termination::Goal(goal_key)) => SearchOutcome::Solved(Solution {
            moves: reconstruct(&came_from, &start_key, &goal_key),
            stats,
        }),
        Ok(Termination::Exhausted) => SearchOutcome::Exhausted { stats },
        Err(SearchError::LimitExceeded { metric, limit, .. }) => SearchOutcome::BudgetExceeded {
            metric,
            limit,
            stats,
        },
        Err(e) => return Err(e),
    };

    debug!(
        outcome = outcome.label(),
        moves = outcome.moves().map_or(0, |m| m.len()),
        expansions = stats.expansions,
        states = stats.states,
        "astar: done"
    );
    Ok(outcome)
}

fn expand(
    start: &Configuration,
    start_key: &StateKey,
    frontier: &mut Frontier,
    tracker: &mut ResourceTracker,
    g_score: &mut FxHashMap<StateKey, u32>,
    came_from: &mut FxHashMap<StateKey, (StateKey, Move)>,
) -> Result<Termination> {
    tracker.bump_states("astar_init", 1)?;
    g_score.insert(start_key.clone(), 0);
    frontier.push(FrontierNode {
        f: distance_to_exit(start),
        g: 0,
        key: start_key.clone(),
        cfg: start.clone(),
    });

    let termination = loop {
        let Some(node) = frontier.pop() else {
            break Termination::Exhausted;
        };
        tracker.bump_expansions("astar")?;

        let expansions = tracker.counts().expansions;
        if expansions % TRACE_EVERY == 0 {
            trace!(expansions, f = node.f, frontier = frontier.len(), "astar: progress");
        }

        // Superseded by a cheaper path pushed later.
        if g_score.get(&node.key).is_some_and(|&best| node.g > best) {
            continue;
        }

        if is_goal(&node.cfg) {
            break Termination::Goal(node.key);
        }

        let neighbors = tracked_successors(&node.cfg, "astar_expand", tracker)?;
        tracker.try_reserve_map("astar_expand", "g_score", g_score, neighbors.len())?;
        tracker.try_reserve_map("astar_expand", "came_from", came_from, neighbors.len())?;
        frontier.reserve(tracker, neighbors.len())?;

        let g = node.g + 1;
        for (mv, next) in neighbors {
            let key = next.key();
            let improves = g_score.get(&key).map_or(true, |&known| g < known);
            if !improves {
                continue;
            }
            if g_score.insert(key.clone(), g).is_none() {
                tracker.bump_states("astar_expand", 1)?;
            }
            came_from.insert(key.clone(), (node.key.clone(), mv));
            frontier.push(FrontierNode {
                f: g + distance_to_exit(&next),
                g,
                key,
                cfg: next,
            });
        }
    };

    Ok(termination)
}

/// Follow predecessor links from `goal` back to `start` and return the moves in play order.
fn reconstruct(
    came_from: &FxHashMap<StateKey, (StateKey, Move)>,
    start: &StateKey,
    goal: &StateKey,
) -> Vec<Move> {
    let mut moves: Vec<Move> = Vec::new();
    let mut cur = goal;
    while cur != start {
        let Some((prev, mv)) = came_from.get(cur) else {
            break;
        };
        moves.push(*mv);
        cur = prev;
    }
    moves.reverse();
    moves
}
