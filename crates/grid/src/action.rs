use crate::GridError;
use std::fmt;

/// One of the four moves available to the agent.
///
/// The discriminants are the wire values accepted from a host training loop.
/// `Up` increases `y` and `Down` decreases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Action {
    /// Number of distinct actions.
    pub const COUNT: usize = 4;

    pub const ALL: [Action; Self::COUNT] = [Action::Up, Action::Right, Action::Down, Action::Left];

    /// Wire value of the action.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<i64> for Action {
    type Error = GridError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Up),
            1 => Ok(Action::Right),
            2 => Ok(Action::Down),
            3 => Ok(Action::Left),
            other => Err(GridError::InvalidAction(other)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Up => "up",
            Action::Right => "right",
            Action::Down => "down",
            Action::Left => "left",
        };
        f.write_str(name)
    }
}
