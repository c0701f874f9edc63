use crate::RewardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Variance parameters for one environment instance.
///
/// `rvar_mean_*` is the expected noise variance and `rvar_var_*` the variance
/// of that variance, for the terminal reward (`*_ter`) and for per-step
/// rewards (`*_step`). Every key is required when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewardParams {
    pub rvar_mean_ter: f64,
    pub rvar_var_ter: f64,
    pub rvar_mean_step: f64,
    pub rvar_var_step: f64,
}

impl RewardParams {
    /// Noise-free rewards.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            rvar_mean_ter: 0.0,
            rvar_var_ter: 0.0,
            rvar_mean_step: 0.0,
            rvar_var_step: 0.0,
        }
    }

    /// # Errors
    ///
    /// Returns [`RewardError::InvalidParam`] naming the first parameter that
    /// is negative, NaN or infinite, and [`RewardError::UnsampleableNoise`]
    /// for a mean/variance pair whose chi-square shape or scale overflows.
    pub fn validate(&self) -> Result<(), RewardError> {
        let fields = [
            ("rvar_mean_ter", self.rvar_mean_ter),
            ("rvar_var_ter", self.rvar_var_ter),
            ("rvar_mean_step", self.rvar_mean_step),
            ("rvar_var_step", self.rvar_var_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RewardError::InvalidParam { name, value });
            }
        }
        let pairs = [
            ("rvar_mean_ter", self.rvar_mean_ter, "rvar_var_ter", self.rvar_var_ter),
            ("rvar_mean_step", self.rvar_mean_step, "rvar_var_step", self.rvar_var_step),
        ];
        for (mean_name, mean, var_name, var) in pairs {
            if !chi_square_is_sampleable(mean, var) {
                return Err(RewardError::UnsampleableNoise { mean: mean_name, var: var_name });
            }
        }
        Ok(())
    }
}

/// A pair with a zero term never reaches the chi-square draw. Otherwise both
/// the shape `2m^2/v` and the scale `v/(2m)` must be finite and positive.
fn chi_square_is_sampleable(mean: f64, var: f64) -> bool {
    if !(mean > 0.0 && var > 0.0) {
        return true;
    }
    let dof = 2.0 * mean * mean / var;
    let scale = var / (2.0 * mean);
    dof.is_finite() && scale.is_finite() && dof > 0.0 && scale > 0.0
}

impl fmt::Display for RewardParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{rvar_mean_ter: {}, rvar_var_ter: {}, rvar_mean_step: {}, rvar_var_step: {}}}",
            self.rvar_mean_ter, self.rvar_var_ter, self.rvar_mean_step, self.rvar_var_step
        )
    }
}
