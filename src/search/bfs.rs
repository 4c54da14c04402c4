//! Breadth-first reference solvers.
//!
//! These share nothing with the A* engine beyond move generation and are used as ground truth
//! when cross-checking it: [`shortest_path`] answers the same question without a heuristic,
//! and [`ReachableSpace`] enumerates the whole connected component of a start configuration
//! together with exact distances to the nearest goal.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::configuration::Configuration;
use crate::rules::goal::is_goal;
use crate::rules::movegen::Move;
use crate::scenario::{check_target, ResourceLimits, Result, SearchError};
use crate::search::astar::{SearchOutcome, SearchStats, Solution};
use crate::search::movegen::tracked_successors;
use crate::search::resources::ResourceTracker;
use crate::state::StateKey;

/// Unweighted shortest path by plain BFS. Same outcome contract as
/// [`crate::search::astar::solve`].
pub fn shortest_path(start: &Configuration, limits: ResourceLimits) -> Result<SearchOutcome> {
    check_target(start)?;

    let mut tracker = ResourceTracker::new(limits);
    let mut parent: FxHashMap<StateKey, Option<(StateKey, Move)>> = FxHashMap::default();
    let mut peak = 0usize;

    let run = breadth_first(start, &mut tracker, &mut parent, &mut peak);

    let counts = tracker.counts();
    let stats = SearchStats {
        expansions: counts.expansions,
        generated: counts.edges,
        states: parent.len() as u64,
        peak_frontier: peak as u64,
    };

    let outcome = match run {
        Ok(Some(goal)) => {
            let mut moves = Vec::new();
            let mut cur = &goal;
            while let Some(Some((prev, mv))) = parent.get(cur) {
                moves.push(*mv);
                cur = prev;
            }
            moves.reverse();
            SearchOutcome::Solved(Solution { moves, stats })
        }
        Ok(None) => SearchOutcome::Exhausted { stats },
        Err(SearchError::LimitExceeded { metric, limit, .. }) => SearchOutcome::BudgetExceeded {
            metric,
            limit,
            stats,
        },
        Err(e) => return Err(e),
    };

    debug!(outcome = outcome.label(), expansions = stats.expansions, "bfs: done");
    Ok(outcome)
}

fn breadth_first(
    start: &Configuration,
    tracker: &mut ResourceTracker,
    parent: &mut FxHashMap<StateKey, Option<(StateKey, Move)>>,
    peak: &mut usize,
) -> Result<Option<StateKey>> {
    let mut queue: VecDeque<(StateKey, Configuration)> = VecDeque::new();
    let start_key = start.key();
    tracker.bump_states("bfs_init", 1)?;
    parent.insert(start_key.clone(), None);
    queue.push_back((start_key, start.clone()));

    while let Some((key, cfg)) = queue.pop_front() {
        tracker.bump_expansions("bfs")?;
        if is_goal(&cfg) {
            return Ok(Some(key));
        }
        let neighbors = tracked_successors(&cfg, "bfs_expand", tracker)?;
        tracker.try_reserve_map("bfs_expand", "parent", parent, neighbors.len())?;
        for (mv, next) in neighbors {
            let next_key = next.key();
            if parent.contains_key(&next_key) {
                continue;
            }
            tracker.bump_states("bfs_expand", 1)?;
            parent.insert(next_key.clone(), Some((key.clone(), mv)));
            queue.push_back((next_key, next));
        }
        *peak = (*peak).max(queue.len());
    }
    Ok(None)
}

/// The connected component of a start configuration under single-cell moves.
///
/// Moves are reversible, so the configuration graph is undirected and distances to the goal
/// set can be computed by one multi-source BFS over the component.
#[derive(Debug, Clone)]
pub struct ReachableSpace {
    pub states: Vec<Configuration>,
    pub index: FxHashMap<StateKey, usize>,
    pub adjacency: Vec<Vec<usize>>,
}

impl ReachableSpace {
    /// Enumerate every configuration reachable from `start`.
    ///
    /// Exceeding `limits.max_states` or `limits.max_edges` is an error here: a partial
    /// component would give wrong distances.
    pub fn explore(start: &Configuration, limits: ResourceLimits) -> Result<Self> {
        let mut tracker = ResourceTracker::new(limits);
        let mut states: Vec<Configuration> = vec![start.clone()];
        let mut index: FxHashMap<StateKey, usize> = FxHashMap::default();
        let mut adjacency: Vec<Vec<usize>> = Vec::new();
        tracker.bump_states("reachable_init", 1)?;
        index.insert(start.key(), 0);

        let mut cursor = 0usize;
        while cursor < states.len() {
            let neighbors = tracked_successors(&states[cursor], "reachable", &mut tracker)?;
            let mut adj: Vec<usize> = Vec::with_capacity(neighbors.len());
            for (_, next) in neighbors {
                let key = next.key();
                let id = match index.get(&key) {
                    Some(&id) => id,
                    None => {
                        tracker.bump_states("reachable", 1)?;
                        let id = states.len();
                        index.insert(key, id);
                        states.push(next);
                        id
                    }
                };
                adj.push(id);
            }
            adjacency.push(adj);
            cursor += 1;
        }

        debug!(states = states.len(), "reachable space enumerated");
        Ok(Self {
            states,
            index,
            adjacency,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn id_of(&self, cfg: &Configuration) -> Option<usize> {
        self.index.get(&cfg.key()).copied()
    }

    /// Exact number of moves from each state to the nearest goal; `None` where no goal is
    /// reachable (which, the graph being connected, means no goal exists in the component).
    pub fn distances_to_goal(&self) -> Vec<Option<u32>> {
        let mut dist: Vec<Option<u32>> = vec![None; self.states.len()];
        let mut queue: VecDeque<usize> = VecDeque::new();

        for (id, cfg) in self.states.iter().enumerate() {
            if is_goal(cfg) {
                dist[id] = Some(0);
                queue.push_back(id);
            }
        }

        while let Some(v) = queue.pop_front() {
            let d = dist[v].unwrap_or(0) + 1;
            for &u in &self.adjacency[v] {
                if dist[u].is_none() {
                    dist[u] = Some(d);
                    queue.push_back(u);
                }
            }
        }

        dist
    }
}
