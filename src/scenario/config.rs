//! Solver configuration loaded from TOML.
//!
//! ```
//! use rush_hour::scenario::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [limits]
//!     max_expansions = 5000
//! "#).unwrap();
//!
//! assert_eq!(config.limits.max_expansions, 5000);
//! assert_eq!(config.limits.max_states, 5_000_000);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ResourceLimits, Result, SearchError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    pub limits: ResourceLimits,
}

impl SolverConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: SolverConfig =
            toml::from_str(s).map_err(|e| SearchError::Config(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    fn check(&self) -> Result<()> {
        if self.limits.max_expansions == 0 {
            return Err(SearchError::Config(
                "limits.max_expansions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
