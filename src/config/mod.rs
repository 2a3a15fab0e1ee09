//! Configuration management for parfact
//!
//! Settings are layered with figment: embedded defaults, then the user and
//! repository config files (or a single custom file), then `PARFACT_*`
//! environment variables. See [`ParfactConfig::load_with_custom_config`].

use serde::{Deserialize, Serialize};

use crate::factorial::Strategy;

mod core;

/// Main configuration structure for parfact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParfactConfig {
    /// Strategy used when none is given on the command line
    pub default_strategy: Strategy,

    /// Worker and scheduling settings
    pub parallel: ParallelSettings,
}

impl Default for ParfactConfig {
    fn default() -> Self {
        Self {
            default_strategy: Strategy::Thread,
            parallel: ParallelSettings::default(),
        }
    }
}

/// Worker and scheduling settings for the product reducer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelSettings {
    /// Requested worker count (0 = available parallelism)
    pub workers: usize,

    /// Largest resolved worker count accepted for a partitioned run (0 = no limit).
    /// Unlimited for library callers; `default-config.toml` caps CLI runs.
    pub max_workers: usize,

    /// Indices per partition above which task workers are dedicated
    pub long_running_threshold: u64,
}

impl Default for ParallelSettings {
    fn default() -> Self {
        Self {
            workers: 0,
            max_workers: 0,
            long_running_threshold: 10_000,
        }
    }
}

#[cfg(test)]
mod tests;
