//! # Demo Loop
//!
//! The [`run`] function drives a single environment through one step, logging
//! what happened and printing a text snapshot before and after.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tabular::{Env, EnvConfig, PolicyKind, RenderMode, RewardParams, TabularEnv};

/// Reads and validates a JSON environment config.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the config is invalid.
pub fn load_config(path: &Path) -> Result<EnvConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    EnvConfig::from_json(&json).with_context(|| format!("invalid config {}", path.display()))
}

/// Noise-free config assembled from command-line flags.
pub fn config_from_flags(
    width: usize,
    height: usize,
    policy: PolicyKind,
    seed: u64,
    max_steps: usize,
) -> EnvConfig {
    EnvConfig::new(width, height, policy, RewardParams::zero())
        .with_seed(Some(seed))
        .with_max_steps(max_steps)
}

/// Render, step once with the raw `action` code, render again.
///
/// # Errors
///
/// Returns an error if the environment cannot be built or the action is
/// rejected.
pub fn run(config: &EnvConfig, action: i64, mode: RenderMode) -> Result<()> {
    let mut env = TabularEnv::new(config).context("failed to build environment")?;
    tracing::info!(
        "Environment {} on a {} grid, starting at cell {}.",
        env.name(),
        env.topology(),
        env.initial_cell()
    );
    print!("{}", env.render(mode));

    let outcome = Env::step(&mut env, action).with_context(|| format!("step with action {action} failed"))?;
    let variance = outcome
        .reward_variance
        .map_or_else(|| "none".to_owned(), |v| v.to_string());
    tracing::info!(
        "Reward: {}, noise: {}, var: {}",
        outcome.reward,
        outcome.reward_noise,
        variance
    );
    let state = env
        .encoded_state()
        .map_or_else(|| "overflow".to_owned(), |s| s.to_string());
    tracing::info!(
        "State {} (cell {}), termination: {} ({}).",
        state,
        outcome.observation.cell,
        outcome.termination,
        outcome.termination.code()
    );
    print!("{}", env.render(mode));
    Ok(())
}
