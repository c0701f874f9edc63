//! Text snapshots of an episode.
//!
//! The `ansi` mode draws one row per `y` coordinate, lowest first. Each cell
//! is three characters wide:
//!
//! | glyph | meaning |
//! |-------|---------|
//! | ` A ` | agent |
//! | ` S ` | episode start |
//! | ` T ` | terminal cell |
//! | ` X ` | visited this episode |
//! | ` . ` | not visited |
//!
//! When several apply, the earlier row of the table wins. The agent, start
//! and terminal glyphs are coloured with ANSI escapes.

use crate::{EnvError, EpisodeState};
use grid::GridTopology;
use std::fmt::Write;
use std::str::FromStr;

const AGENT: &str = "\x1b[91m";
const START: &str = "\x1b[95m";
const TERMINAL: &str = "\x1b[92m";
const BOLD: &str = "\x1b[1m";
const END: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Graphical output. Not implemented; renders nothing.
    Human,
    #[default]
    Ansi,
}

impl FromStr for RenderMode {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(RenderMode::Human),
            "ansi" => Ok(RenderMode::Ansi),
            other => Err(EnvError::InvalidRenderMode(other.to_owned())),
        }
    }
}

pub(crate) fn render(mode: RenderMode, topology: &GridTopology, episode: &EpisodeState) -> String {
    match mode {
        RenderMode::Human => String::new(),
        RenderMode::Ansi => render_ansi(topology, episode),
    }
}

fn render_ansi(topology: &GridTopology, episode: &EpisodeState) -> String {
    let mut out = String::new();
    for y in 0..topology.height() {
        out.push('|');
        for x in 0..topology.width() {
            let cell = topology.coords_to_index(x, y);
            // Writing to a String cannot fail.
            let _ = if cell == episode.current_cell() {
                write!(out, "{AGENT} A {END}")
            } else if cell == episode.initial_cell() {
                write!(out, "{BOLD}{START} S {END}")
            } else if cell == episode.terminal_cell() {
                write!(out, "{BOLD}{TERMINAL} T {END}")
            } else if episode.is_visited(cell) {
                write!(out, " X ")
            } else {
                write!(out, " . ")
            };
        }
        out.push_str("|\n");
    }
    out.push('\n');
    out
}
