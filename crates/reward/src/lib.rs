#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]
//! # Reward Shaping
//!
//! Reward generation for the tabular environments.
//!
//! A [`RewardPolicy`] turns a classified transition into a [`RewardSpec`]: the
//! reward mean plus an optional two-level variance description (the expected
//! noise variance, and the variance of that variance). The [`NoiseModel`]
//! then realises the spec into a [`RewardDraw`].
//!
//! Three shaping strategies are provided:
//!
//! -   **Sparse:** nothing until the episode ends, then the terminal bonus
//!     minus the accumulated step penalties.
//! -   **Semi-sparse:** a step penalty on every move and the terminal bonus
//!     on arrival.
//! -   **Dense:** like semi-sparse, plus a per-cell bonus paid the first time
//!     each cell is entered in an episode. The per-cell bonuses come from a
//!     [`BonusCache`] shared by all environments of the same grid size.

pub mod bonus;
pub mod noise;
pub mod params;
pub mod policy;

pub use bonus::{BonusCache, BonusTable};
pub use noise::{NoiseModel, RewardDraw, RewardSpec};
pub use params::RewardParams;
pub use policy::{PolicyKind, RewardPolicy, TransitionContext, TransitionKind};

use thiserror::Error;

/// Penalty applied for every move.
pub const STEP_PENALTY: f64 = -1.0;
/// Reward for reaching the terminal cell.
pub const TERMINAL_BONUS: f64 = 100.0;
/// Dense per-cell bonuses are drawn uniformly from `0..DENSE_RANGE`.
pub const DENSE_RANGE: u32 = 11;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RewardError {
    #[error("reward parameter `{name}` must be finite and non-negative, got {value}")]
    InvalidParam { name: &'static str, value: f64 },
    #[error("reward parameters `{mean}` and `{var}` do not describe a sampleable noise variance")]
    UnsampleableNoise { mean: &'static str, var: &'static str },
    #[error("cannot sample reward noise: {0}")]
    Distribution(String),
    #[error("unknown reward policy {0:?}, expected sparse, semi_sparse or dense")]
    UnknownPolicy(String),
}
