//! # Gridworld
//!
//! Tabular grid-world environments for reinforcement-learning experiments.
//!
//! ## Overview
//!
//! An agent moves on a rectangular grid, one cell per step, until it reaches
//! the terminal cell or runs out of steps. Every step yields a reward mean, a
//! noise sample and the variance that sample was drawn with, so learners that
//! model reward uncertainty can be tested against a known ground truth.
//!
//! ## Project Architecture
//!
//! -   **`gridworld`:** The crate you are currently viewing. It re-exports the
//!     library crates and provides the demonstration binary.
//! -   **[`grid`]:** Pure index and coordinate arithmetic for rectangular
//!     grids, and the four-valued action set.
//! -   **[`reward`]:** Reward-shaping policies (sparse, semi-sparse, dense),
//!     the two-level noise model, and the shared dense bonus cache.
//! -   **[`tabular`]:** The episode state machine, its configuration and
//!     error types, and text rendering.
//!
//! ## Getting Started
//!
//! Build a [`tabular::TabularEnv`] from a [`tabular::EnvConfig`] (in code or
//! from JSON), then drive it with `reset` and `step`. The binary shows the
//! whole loop:
//!
//! ```text
//! gridworld --policy dense --width 6 --height 6 --action 0
//! ```

pub use grid;
pub use reward;
pub use tabular;
