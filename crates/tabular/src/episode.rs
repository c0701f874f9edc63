use reward::TransitionKind;
use std::fmt;

/// Why an episode ended, with the numeric codes reported to training loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Termination {
    #[default]
    NotDone = 0,
    TerminalReached = 1,
    StepLimitReached = 2,
}

impl Termination {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_done(self) -> bool {
        !matches!(self, Termination::NotDone)
    }

    pub(crate) const fn from_transition(kind: TransitionKind) -> Self {
        match kind {
            TransitionKind::Normal => Termination::NotDone,
            TransitionKind::StepLimit => Termination::StepLimitReached,
            TransitionKind::Terminal => Termination::TerminalReached,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Termination::NotDone => "not done",
            Termination::TerminalReached => "terminal reached",
            Termination::StepLimitReached => "step limit reached",
        })
    }
}

/// Mutable per-episode record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeState {
    pub(crate) current_cell: usize,
    pub(crate) initial_cell: usize,
    pub(crate) terminal_cell: usize,
    pub(crate) step_count: usize,
    visited: Vec<bool>,
    pub(crate) termination: Termination,
}

impl EpisodeState {
    /// Fresh episode on a grid of `cells` cells with only `initial_cell`
    /// visited.
    pub(crate) fn start(cells: usize, initial_cell: usize, terminal_cell: usize) -> Self {
        let mut visited = vec![false; cells];
        visited[initial_cell] = true;
        Self {
            current_cell: initial_cell,
            initial_cell,
            terminal_cell,
            step_count: 0,
            visited,
            termination: Termination::NotDone,
        }
    }

    #[must_use]
    pub fn current_cell(&self) -> usize {
        self.current_cell
    }

    #[must_use]
    pub fn initial_cell(&self) -> usize {
        self.initial_cell
    }

    #[must_use]
    pub fn terminal_cell(&self) -> usize {
        self.terminal_cell
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    #[must_use]
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Out-of-range cells count as not visited.
    #[must_use]
    pub fn is_visited(&self, cell: usize) -> bool {
        self.visited.get(cell).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|v| **v).count()
    }

    pub(crate) fn visit(&mut self, cell: usize) {
        self.visited[cell] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_marks_only_the_initial_cell() {
        let episode = EpisodeState::start(9, 4, 0);
        assert!(episode.is_visited(4));
        assert_eq!(episode.visited_count(), 1);
        assert!(!episode.is_visited(0));
        assert!(!episode.is_visited(100));
        assert_eq!(episode.termination(), Termination::NotDone);
    }

    #[test]
    fn codes_match_wire_values() {
        assert_eq!(Termination::NotDone.code(), 0);
        assert_eq!(Termination::TerminalReached.code(), 1);
        assert_eq!(Termination::StepLimitReached.code(), 2);
        assert!(!Termination::NotDone.is_done());
        assert!(Termination::StepLimitReached.is_done());
    }
}
