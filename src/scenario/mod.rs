//! Puzzle layer: glue between the board primitives and the search engines.
//!
//! A [`Puzzle`] bundles:
//! - a name (used by the CLIs and solution reports)
//! - the start [`Configuration`]
//! - explicit budgets via [`ResourceLimits`]
//!
//! The engines assume a well-formed start configuration and only check for the target vehicle.
//! [`Puzzle::validate`] performs the full structural check and is meant to be called by CLIs,
//! file loaders and tests before running a solver.

pub mod config;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::configuration::Configuration;
use crate::core::occupancy::Occupancy;
use crate::core::vehicle::Vehicle;
use crate::search::astar::{self, SearchOutcome};

pub use config::SolverConfig;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Search budgets used to bound time and memory consumption.
///
/// - `max_expansions`: number of frontier pops (the node-expansion budget)
/// - `max_states`: number of distinct configurations recorded in the cost map
/// - `max_edges`: number of generated (move, neighbor) pairs
pub struct ResourceLimits {
    pub max_expansions: u64,
    pub max_states: u64,
    pub max_edges: u64,
}

impl ResourceLimits {
    #[inline]
    pub fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = max_expansions;
        self
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_expansions: 200_000,
            max_states: 5_000_000,
            max_edges: 50_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Running counters tracked during a search.
pub struct ResourceCounts {
    pub expansions: u64,
    pub states: u64,
    pub edges: u64,
}

#[derive(Debug, Error)]
/// Structured errors returned by the solvers, loaders and checked move application.
pub enum SearchError {
    #[error("no vehicle is marked as target")]
    MissingTarget,

    #[error("{count} vehicles are marked as target, expected exactly one")]
    MultipleTargets { count: usize },

    #[error("invalid puzzle: {reason}")]
    InvalidPuzzle { reason: String },

    #[error("illegal move at step {step}: vehicle {vehicle} by {delta:+}")]
    IllegalMove { step: usize, vehicle: usize, delta: i8 },

    /// A configured resource limit was exceeded. The engines turn this into
    /// [`SearchOutcome::BudgetExceeded`].
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(expansions={}, states={}, edges={})",
        .counts.expansions,
        .counts.states,
        .counts.edges
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },

    #[error(
        "allocation failed at {stage} for {structure}; \
         counts(expansions={}, states={}, edges={})",
        .counts.expansions,
        .counts.states,
        .counts.edges
    )]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },

    #[error("io error for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("invalid solver configuration: {0}")]
    Config(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A named start configuration plus the budgets to solve it with.
pub struct Puzzle {
    pub name: String,
    #[serde(rename = "vehicles")]
    pub configuration: Configuration,
    #[serde(default)]
    pub limits: ResourceLimits,
}

impl Puzzle {
    pub fn new(name: impl Into<String>, vehicles: Vec<Vehicle>) -> Self {
        Self {
            name: name.into(),
            configuration: Configuration::new(vehicles),
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate puzzle invariants. Intended to be called by CLIs/tests before running solvers.
    pub fn validate(&self) -> Result<()> {
        validate_configuration(&self.configuration)
    }

    /// Run the A* engine on the start configuration with this puzzle's limits.
    pub fn solve(&self) -> Result<SearchOutcome> {
        astar::solve(&self.configuration, self.limits)
    }
}

/// Check every structural invariant of a configuration: vehicle lengths, bounds, overlaps and
/// exactly one target.
pub fn validate_configuration(cfg: &Configuration) -> Result<()> {
    for (idx, v) in cfg.vehicles().iter().enumerate() {
        if !(2..=3).contains(&v.length) {
            return Err(SearchError::InvalidPuzzle {
                reason: format!("vehicle {idx} has length {}, expected 2 or 3", v.length),
            });
        }
        if !v.in_bounds() {
            return Err(SearchError::InvalidPuzzle {
                reason: format!(
                    "vehicle {idx} at ({}, {}) does not fit on the board",
                    v.row, v.col
                ),
            });
        }
    }

    let occ = Occupancy::build(cfg.vehicles());
    let covered: usize = cfg.vehicles().iter().map(|v| v.length as usize).sum();
    if occ.occupied_count() != covered {
        let (a, b) = first_overlap(cfg).unwrap_or((0, 0));
        return Err(SearchError::InvalidPuzzle {
            reason: format!("vehicles {a} and {b} overlap"),
        });
    }

    check_target(cfg)
}

/// Engine-side pre-check: exactly one vehicle must be flagged as target.
pub fn check_target(cfg: &Configuration) -> Result<()> {
    match cfg.target_count() {
        0 => Err(SearchError::MissingTarget),
        1 => Ok(()),
        count => Err(SearchError::MultipleTargets { count }),
    }
}

fn first_overlap(cfg: &Configuration) -> Option<(usize, usize)> {
    let vs = cfg.vehicles();
    for i in 0..vs.len() {
        for j in (i + 1)..vs.len() {
            if vs[i].cells().any(|c| vs[j].cells().any(|d| d == c)) {
                return Some((i, j));
            }
        }
    }
    None
}
