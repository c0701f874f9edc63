/// Reinforcement learning environment trait.
///
/// Modelled on the Gym interface: a training loop calls [`reset`] to start an
/// episode and [`step`] once per action. Actions arrive as raw integer codes
/// from the host framework and are validated by the environment.
///
/// [`reset`]: Env::reset
/// [`step`]: Env::step
pub trait Env {
    type Observation;
    type Outcome;
    type Error;

    /// Advance the environment by one action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not part of the action space or the
    /// environment cannot accept another step.
    fn step(&mut self, action: i64) -> Result<Self::Outcome, Self::Error>;

    /// Start a new episode and return its first observation.
    fn reset(&mut self) -> Self::Observation;

    /// Number of distinct observations.
    fn obs_size(&self) -> usize;

    /// Number of distinct actions.
    fn action_size(&self) -> usize;
}
