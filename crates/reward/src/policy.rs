use crate::{
    BonusCache, BonusTable, RewardError, RewardParams, RewardSpec, STEP_PENALTY, TERMINAL_BONUS,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects a [`RewardPolicy`] variant at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Sparse,
    #[serde(alias = "semi-sparse", alias = "semisparse")]
    SemiSparse,
    Dense,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PolicyKind::Sparse => "sparse",
            PolicyKind::SemiSparse => "semi_sparse",
            PolicyKind::Dense => "dense",
        })
    }
}

impl FromStr for PolicyKind {
    type Err = RewardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sparse" => Ok(PolicyKind::Sparse),
            "semi_sparse" | "semi-sparse" | "semisparse" => Ok(PolicyKind::SemiSparse),
            "dense" => Ok(PolicyKind::Dense),
            _ => Err(RewardError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// How a step ended, as seen by the reward policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Normal,
    /// The step budget ran out on this step without reaching the terminal cell.
    StepLimit,
    /// The agent entered the terminal cell.
    Terminal,
}

/// Read-only view of the episode that a policy may depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionContext {
    /// Cell the agent landed on.
    pub cell: usize,
    /// Steps taken so far, including this one.
    pub step_count: usize,
    /// Whether `cell` had not been visited earlier in the episode.
    pub first_visit: bool,
}

/// Reward-shaping strategy.
#[derive(Debug, Clone)]
pub enum RewardPolicy {
    Sparse(RewardParams),
    SemiSparse(RewardParams),
    Dense { params: RewardParams, bonus: BonusTable },
}

impl RewardPolicy {
    /// Builds the policy selected by `kind` for a `width x height` grid.
    ///
    /// The dense variant takes its bonus table from `cache`, generating it
    /// with `rng` only if no environment of that size has been built yet.
    ///
    /// # Errors
    ///
    /// Returns [`RewardError::InvalidParam`] if `params` fails validation.
    pub fn new<R: Rng>(
        kind: PolicyKind,
        params: RewardParams,
        width: usize,
        height: usize,
        cache: &BonusCache,
        rng: &mut R,
    ) -> Result<Self, RewardError> {
        params.validate()?;
        Ok(match kind {
            PolicyKind::Sparse => RewardPolicy::Sparse(params),
            PolicyKind::SemiSparse => RewardPolicy::SemiSparse(params),
            PolicyKind::Dense => RewardPolicy::Dense {
                params,
                bonus: cache.get_or_create(width, height, rng),
            },
        })
    }

    #[must_use]
    pub fn kind(&self) -> PolicyKind {
        match self {
            RewardPolicy::Sparse(_) => PolicyKind::Sparse,
            RewardPolicy::SemiSparse(_) => PolicyKind::SemiSparse,
            RewardPolicy::Dense { .. } => PolicyKind::Dense,
        }
    }

    #[must_use]
    pub fn params(&self) -> &RewardParams {
        match self {
            RewardPolicy::Sparse(params)
            | RewardPolicy::SemiSparse(params)
            | RewardPolicy::Dense { params, .. } => params,
        }
    }

    /// Per-cell bonuses, for the dense variant only.
    #[must_use]
    pub fn bonus(&self) -> Option<&[u32]> {
        match self {
            RewardPolicy::Dense { bonus, .. } => Some(&bonus[..]),
            _ => None,
        }
    }

    /// Human-readable label including the variance parameters.
    #[must_use]
    pub fn name(&self) -> String {
        let label = match self.kind() {
            PolicyKind::Sparse => "Sparse",
            PolicyKind::SemiSparse => "Semi sparse",
            PolicyKind::Dense => "Dense",
        };
        format!("{label} {}", self.params())
    }

    /// Reward mean and variance description for one transition.
    #[must_use]
    pub fn compute(&self, kind: TransitionKind, ctx: &TransitionContext) -> RewardSpec {
        match self {
            RewardPolicy::Sparse(p) => match kind {
                TransitionKind::Normal => RewardSpec::deterministic(0.0),
                TransitionKind::StepLimit => {
                    RewardSpec::noisy(STEP_PENALTY, p.rvar_mean_step, p.rvar_var_step)
                }
                TransitionKind::Terminal => {
                    let steps = ctx.step_count as f64;
                    RewardSpec::noisy(
                        TERMINAL_BONUS + steps * STEP_PENALTY,
                        steps * p.rvar_mean_step + p.rvar_mean_ter,
                        steps * p.rvar_var_step + p.rvar_var_ter,
                    )
                }
            },
            RewardPolicy::SemiSparse(p) => match kind {
                TransitionKind::Terminal => {
                    RewardSpec::noisy(TERMINAL_BONUS, p.rvar_mean_ter, p.rvar_var_ter)
                }
                TransitionKind::Normal | TransitionKind::StepLimit => {
                    RewardSpec::noisy(STEP_PENALTY, p.rvar_mean_step, p.rvar_var_step)
                }
            },
            RewardPolicy::Dense { params: p, bonus } => match kind {
                TransitionKind::Terminal => {
                    RewardSpec::noisy(TERMINAL_BONUS, p.rvar_mean_ter, p.rvar_var_ter)
                }
                TransitionKind::Normal | TransitionKind::StepLimit => {
                    let first_visit_bonus = if ctx.first_visit {
                        bonus.get(ctx.cell).copied().map_or(0.0, f64::from)
                    } else {
                        0.0
                    };
                    RewardSpec::noisy(
                        first_visit_bonus + STEP_PENALTY,
                        p.rvar_mean_step,
                        p.rvar_var_step,
                    )
                }
            },
        }
    }
}
