//! Two-level reward noise.
//!
//! The noise variance of a reward is itself random: it is drawn from a scaled
//! chi-square distribution whose mean and variance are given by the
//! [`RewardSpec`]. A zero-mean Gaussian with that variance then produces the
//! reported noise sample.
//!
//! The realised reward is the spec's mean. Noise and variance are returned
//! alongside it as auxiliary signals for learners that model reward
//! uncertainty; they are never added to the reward.

use crate::RewardError;
use rand::Rng;
use rand_distr::{ChiSquared, Distribution, Normal};

/// Reward mean plus an optional variance description.
///
/// A variance term that is absent or exactly zero is treated as not given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardSpec {
    pub mean: f64,
    pub var_mean: Option<f64>,
    pub var_var: Option<f64>,
}

impl RewardSpec {
    /// Reward without any noise description.
    #[must_use]
    pub const fn deterministic(mean: f64) -> Self {
        Self { mean, var_mean: None, var_var: None }
    }

    #[must_use]
    pub const fn noisy(mean: f64, var_mean: f64, var_var: f64) -> Self {
        Self { mean, var_mean: Some(var_mean), var_var: Some(var_var) }
    }
}

/// Outcome of [`NoiseModel::draw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardDraw {
    pub reward: f64,
    pub noise: f64,
    /// `None` when the spec carried no variance.
    pub variance: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseModel;

impl NoiseModel {
    /// Realises `spec` into a reward, a noise sample and the variance that
    /// noise was drawn with.
    ///
    /// - both variance terms given: variance is drawn from a scaled
    ///   chi-square, noise from `N(0, variance)`;
    /// - only the mean variance given: variance is that value, noise from
    ///   `N(0, variance)`;
    /// - otherwise: no variance and zero noise.
    ///
    /// # Errors
    ///
    /// Returns [`RewardError::Distribution`] if the variance terms do not
    /// describe a valid distribution (negative or non-finite values).
    pub fn draw<R: Rng>(self, spec: RewardSpec, rng: &mut R) -> Result<RewardDraw, RewardError> {
        let variance = match (given(spec.var_mean), given(spec.var_var)) {
            (Some(mean), Some(var)) => Some(draw_chi_square(mean, var, rng)?),
            (Some(mean), None) => Some(mean),
            (None, _) => None,
        };
        let noise = match variance {
            Some(v) => gaussian(v, rng)?,
            None => 0.0,
        };
        Ok(RewardDraw { reward: spec.mean, noise, variance })
    }
}

fn given(term: Option<f64>) -> Option<f64> {
    term.filter(|v| v.abs() > 0.0)
}

/// Samples `c * X` with `X ~ ChiSquared(k)`, choosing `k` and `c` so the
/// result has expectation `mean` and variance `var`.
///
/// `E[cX] = ck` and `Var[cX] = 2c^2 k`, which gives `k = 2 mean^2 / var` and
/// `c = var / (2 mean)`.
///
/// # Errors
///
/// Returns [`RewardError::Distribution`] if `mean` or `var` is not strictly
/// positive and finite.
pub fn draw_chi_square<R: Rng>(mean: f64, var: f64, rng: &mut R) -> Result<f64, RewardError> {
    if !(mean.is_finite() && var.is_finite() && mean > 0.0 && var > 0.0) {
        return Err(RewardError::Distribution(format!(
            "chi-square moments must be positive, got mean {mean} and variance {var}"
        )));
    }
    let dof = 2.0 * mean * mean / var;
    let scale = var / (2.0 * mean);
    if !(dof.is_finite() && scale.is_finite() && dof > 0.0 && scale > 0.0) {
        return Err(RewardError::Distribution(format!(
            "chi-square shape {dof} or scale {scale} is out of range for mean {mean} and variance {var}"
        )));
    }
    let dist = ChiSquared::new(dof).map_err(|e| RewardError::Distribution(e.to_string()))?;
    Ok(scale * dist.sample(rng))
}

fn gaussian<R: Rng>(variance: f64, rng: &mut R) -> Result<f64, RewardError> {
    let dist =
        Normal::new(0.0, variance.sqrt()).map_err(|e| RewardError::Distribution(e.to_string()))?;
    Ok(dist.sample(rng))
}
