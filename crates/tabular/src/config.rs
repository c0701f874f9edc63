use crate::EnvError;
use reward::{PolicyKind, RewardParams};
use serde::{Deserialize, Serialize};

const DEFAULT_GRID: usize = 5;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_MAX_STEPS: usize = 200;

/// Everything needed to build a [`TabularEnv`](crate::TabularEnv).
///
/// Deserializable from JSON. `policy` and `reward_params` (with all four
/// keys) are required; the grid defaults to 5x5, the seed to 42 and the step
/// budget to 200. A `null` seed draws one from the operating system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvConfig {
    #[serde(default = "default_grid")]
    pub grid_x: usize,
    #[serde(default = "default_grid")]
    pub grid_y: usize,
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
    pub policy: PolicyKind,
    pub reward_params: RewardParams,
}

fn default_grid() -> usize {
    DEFAULT_GRID
}

#[allow(clippy::unnecessary_wraps)]
fn default_seed() -> Option<u64> {
    Some(DEFAULT_SEED)
}

fn default_max_steps() -> usize {
    DEFAULT_MAX_STEPS
}

impl EnvConfig {
    #[must_use]
    pub fn new(grid_x: usize, grid_y: usize, policy: PolicyKind, reward_params: RewardParams) -> Self {
        Self {
            grid_x,
            grid_y,
            seed: default_seed(),
            max_steps: DEFAULT_MAX_STEPS,
            policy,
            reward_params,
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Parses a configuration from JSON and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfiguration`] for malformed JSON, missing
    /// required keys, unknown keys, or values rejected by [`validate`].
    ///
    /// [`validate`]: EnvConfig::validate
    pub fn from_json(json: &str) -> Result<Self, EnvError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfiguration`] if a grid side is zero, the
    /// step budget is zero, or a reward parameter is negative or non-finite.
    pub fn validate(&self) -> Result<(), EnvError> {
        if self.grid_x == 0 || self.grid_y == 0 {
            return Err(EnvError::InvalidConfiguration(format!(
                "grid must be at least 1x1, got {}x{}",
                self.grid_x, self.grid_y
            )));
        }
        if self.max_steps == 0 {
            return Err(EnvError::InvalidConfiguration("max_steps must be at least 1".into()));
        }
        self.reward_params.validate()?;
        Ok(())
    }
}
