use crate::render::{self, RenderMode};
use crate::{Env, EnvConfig, EnvError, EpisodeState, Observation, Termination};
use grid::{Action, GridTopology};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use reward::{BonusCache, NoiseModel, RewardPolicy, TransitionContext, TransitionKind};
use tracing::{debug, info, trace};

/// Index of the terminal cell on every grid.
pub const TERMINAL_CELL: usize = 0;

/// Result of one accepted action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub observation: Observation,
    /// Reward mean for the transition. Noise is reported separately and is
    /// not included here.
    pub reward: f64,
    pub reward_noise: f64,
    /// Variance the noise was drawn with, `None` for noise-free rewards.
    pub reward_variance: Option<f64>,
    pub termination: Termination,
}

impl StepOutcome {
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.termination.is_done()
    }
}

/// Grid-world episode state machine with a pluggable reward policy.
///
/// The environment is single-threaded; wrap it in a lock to share it. The only
/// state shared between instances is the dense bonus table, held in a
/// [`BonusCache`].
#[derive(Debug)]
pub struct TabularEnv {
    topology: GridTopology,
    max_steps: usize,
    policy: RewardPolicy,
    noise: NoiseModel,
    rng: StdRng,
    episode: EpisodeState,
}

impl TabularEnv {
    /// Builds an environment using the process-wide [`BonusCache`].
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn new(config: &EnvConfig) -> Result<Self, EnvError> {
        Self::with_cache(config, BonusCache::global())
    }

    /// Builds an environment whose dense bonus table comes from `cache`.
    ///
    /// The first episode is started immediately, so the environment can be
    /// stepped without an explicit [`reset`](Self::reset).
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidConfiguration`] if `config` fails
    /// validation.
    pub fn with_cache(config: &EnvConfig, cache: &BonusCache) -> Result<Self, EnvError> {
        config.validate()?;
        let topology = GridTopology::new(config.grid_x, config.grid_y)?;
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let initial_cell = rng.gen_range(0..topology.cell_count());
        let policy = RewardPolicy::new(
            config.policy,
            config.reward_params,
            topology.width(),
            topology.height(),
            cache,
            &mut rng,
        )?;
        debug!(grid = %topology, policy = %config.policy, max_steps = config.max_steps, "environment created");
        Ok(Self {
            topology,
            max_steps: config.max_steps,
            policy,
            noise: NoiseModel,
            rng,
            episode: EpisodeState::start(topology.cell_count(), initial_cell, TERMINAL_CELL),
        })
    }

    /// Starts a new episode on a uniformly random cell.
    pub fn reset(&mut self) -> Observation {
        let initial_cell = self.rng.gen_range(0..self.topology.cell_count());
        self.start_episode(initial_cell)
    }

    /// Starts a new episode on `cell`.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::CellOutOfRange`] if `cell` is not on the grid.
    pub fn reset_to(&mut self, cell: usize) -> Result<Observation, EnvError> {
        if !self.topology.contains(cell) {
            return Err(EnvError::CellOutOfRange { cell, cells: self.topology.cell_count() });
        }
        Ok(self.start_episode(cell))
    }

    fn start_episode(&mut self, initial_cell: usize) -> Observation {
        self.episode = EpisodeState::start(self.topology.cell_count(), initial_cell, TERMINAL_CELL);
        debug!(initial_cell, "episode reset");
        self.observation()
    }

    /// Moves the agent one cell and returns the reward for the transition.
    ///
    /// The episode is only updated once the reward has been drawn, so an
    /// error leaves the state exactly as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::StepAfterTermination`] once the episode has ended;
    /// the state is left unchanged until [`reset`](Self::reset). Returns
    /// [`EnvError::Noise`] if the reward noise cannot be sampled.
    pub fn step(&mut self, action: Action) -> Result<StepOutcome, EnvError> {
        if self.episode.termination.is_done() {
            return Err(EnvError::StepAfterTermination(self.episode.termination));
        }

        let step_count = self.episode.step_count + 1;
        let cell = self.topology.apply(self.episode.current_cell, action);
        let kind = self.classify(cell, step_count);
        let termination = Termination::from_transition(kind);

        let ctx = TransitionContext { cell, step_count, first_visit: !self.episode.is_visited(cell) };
        let spec = self.policy.compute(kind, &ctx);
        let draw = self.noise.draw(spec, &mut self.rng)?;

        self.episode.step_count = step_count;
        self.episode.current_cell = cell;
        self.episode.termination = termination;
        self.episode.visit(cell);

        trace!(%action, cell, step = step_count, reward = draw.reward, noise = draw.noise, "step");
        if termination.is_done() {
            info!(%termination, steps = step_count, "episode finished");
        }

        Ok(StepOutcome {
            observation: self.observation(),
            reward: draw.reward,
            reward_noise: draw.noise,
            reward_variance: draw.variance,
            termination,
        })
    }

    /// Validates a raw action code and steps with it.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::InvalidAction`] for codes outside `0..=3`, plus
    /// everything [`step`](Self::step) returns.
    pub fn step_raw(&mut self, action: i64) -> Result<StepOutcome, EnvError> {
        let action = Action::try_from(action)?;
        self.step(action)
    }

    fn classify(&self, cell: usize, step_count: usize) -> TransitionKind {
        if cell == self.episode.terminal_cell {
            TransitionKind::Terminal
        } else if step_count >= self.max_steps {
            TransitionKind::StepLimit
        } else {
            TransitionKind::Normal
        }
    }

    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation { cell: self.episode.current_cell, terminal: self.episode.terminal_cell }
    }

    /// The observation packed into a single number, see [`Observation::encode`].
    /// `None` when the packed value does not fit in a `u64`.
    #[must_use]
    pub fn encoded_state(&self) -> Option<u64> {
        self.observation().encode(self.topology.digits())
    }

    #[must_use]
    pub fn render(&self, mode: RenderMode) -> String {
        render::render(mode, &self.topology, &self.episode)
    }

    #[must_use]
    pub fn name(&self) -> String {
        self.policy.name()
    }

    #[must_use]
    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    #[must_use]
    pub fn policy(&self) -> &RewardPolicy {
        &self.policy
    }

    #[must_use]
    pub fn episode(&self) -> &EpisodeState {
        &self.episode
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    #[must_use]
    pub fn current_cell(&self) -> usize {
        self.episode.current_cell
    }

    #[must_use]
    pub fn initial_cell(&self) -> usize {
        self.episode.initial_cell
    }

    #[must_use]
    pub fn terminal_cell(&self) -> usize {
        self.episode.terminal_cell
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.episode.step_count
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.episode.termination
    }

    #[must_use]
    pub fn is_visited(&self, cell: usize) -> bool {
        self.episode.is_visited(cell)
    }
}

impl Env for TabularEnv {
    type Observation = Observation;
    type Outcome = StepOutcome;
    type Error = EnvError;

    fn step(&mut self, action: i64) -> Result<StepOutcome, EnvError> {
        self.step_raw(action)
    }

    fn reset(&mut self) -> Observation {
        TabularEnv::reset(self)
    }

    fn obs_size(&self) -> usize {
        self.topology.cell_count()
    }

    fn action_size(&self) -> usize {
        Action::COUNT
    }
}
