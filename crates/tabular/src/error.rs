use crate::Termination;
use grid::GridError;
use reward::RewardError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("invalid action {0}: expected 0 (up), 1 (right), 2 (down) or 3 (left)")]
    InvalidAction(i64),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("step called after the episode ended ({0}); call reset first")]
    StepAfterTermination(Termination),
    #[error("cell {cell} is outside a grid of {cells} cells")]
    CellOutOfRange { cell: usize, cells: usize },
    #[error("unknown render mode {0:?}, expected \"human\" or \"ansi\"")]
    InvalidRenderMode(String),
    #[error("reward noise draw failed: {0}")]
    Noise(String),
}

impl From<GridError> for EnvError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidAction(code) => EnvError::InvalidAction(code),
            GridError::ZeroDimension { .. } => EnvError::InvalidConfiguration(err.to_string()),
        }
    }
}

impl From<RewardError> for EnvError {
    fn from(err: RewardError) -> Self {
        match err {
            RewardError::Distribution(msg) => EnvError::Noise(msg),
            RewardError::InvalidParam { .. }
            | RewardError::UnsampleableNoise { .. }
            | RewardError::UnknownPolicy(_) => {
                EnvError::InvalidConfiguration(err.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(err: serde_json::Error) -> Self {
        EnvError::InvalidConfiguration(err.to_string())
    }
}
