#![allow(dead_code)]

use tabular::{BonusCache, EnvConfig, PolicyKind, RewardParams, TabularEnv};

pub fn env(width: usize, height: usize, policy: PolicyKind) -> TabularEnv {
    env_with(EnvConfig::new(width, height, policy, RewardParams::zero()))
}

/// Builds against a private bonus cache so tests do not share tables.
pub fn env_with(config: EnvConfig) -> TabularEnv {
    TabularEnv::with_cache(&config, &BonusCache::new()).unwrap()
}

pub fn noisy_params() -> RewardParams {
    RewardParams { rvar_mean_ter: 4.0, rvar_var_ter: 1.0, rvar_mean_step: 0.5, rvar_var_step: 0.25 }
}
