#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Tabular Environments
//!
//! Episode state machine for a single agent moving on a rectangular grid.
//!
//! Each episode starts on a uniformly random cell. Every [`step`] moves the
//! agent one cell (clamped at the walls), classifies the transition, and asks
//! the configured [`RewardPolicy`] for a reward description that the
//! [`NoiseModel`] turns into a reward, a noise sample and a noise variance.
//! The episode ends when the agent enters the terminal cell (cell `0`) or when
//! the step budget runs out.
//!
//! ## Key Components
//!
//! -   [`TabularEnv`]: the environment itself, built from an [`EnvConfig`].
//! -   [`Env`]: the interface a training loop drives, taking raw action codes.
//! -   [`Observation`]: the agent's cell and the terminal cell, with the
//!     packed scalar encoding available through [`Observation::encode`].
//! -   [`Termination`]: why, if at all, the episode has ended.
//!
//! ```rust
//! use grid::Action;
//! use tabular::{EnvConfig, PolicyKind, RewardParams, TabularEnv};
//!
//! let config = EnvConfig::new(6, 6, PolicyKind::SemiSparse, RewardParams::zero());
//! let mut env = TabularEnv::new(&config).unwrap();
//! env.reset();
//! let outcome = env.step(Action::Up).unwrap();
//! assert_eq!(outcome.reward_noise, 0.0);
//! ```
//!
//! [`step`]: TabularEnv::step
//! [`RewardPolicy`]: reward::RewardPolicy
//! [`NoiseModel`]: reward::NoiseModel

pub mod config;
pub mod env;
pub mod episode;
pub mod error;
pub mod observation;
pub mod render;
pub mod tabular_env;

pub use config::EnvConfig;
pub use env::Env;
pub use episode::{EpisodeState, Termination};
pub use error::EnvError;
pub use observation::Observation;
pub use render::RenderMode;
pub use reward::{BonusCache, PolicyKind, RewardParams};
pub use tabular_env::{StepOutcome, TabularEnv, TERMINAL_CELL};
