//! Simulation engine parameters.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct EngineConfig {
    /// Upper bound on simulated months before a run is abandoned.
    #[serde(default = "default_max_periods")]
    #[validate(range(min = 1, max = 100_000))]
    pub max_periods: u32,
}

fn default_max_periods() -> u32 {
    1200
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_periods: default_max_periods(),
        }
    }
}
