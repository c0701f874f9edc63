mod common;

use common::env;
use grid::Action;
use tabular::{PolicyKind, RenderMode};

const AGENT: &str = "\x1b[91m A \x1b[0m";
const START: &str = "\x1b[1m\x1b[95m S \x1b[0m";
const TERMINAL: &str = "\x1b[1m\x1b[92m T \x1b[0m";

#[test]
fn fresh_episode_shows_agent_and_terminal() {
    let mut env = env(3, 3, PolicyKind::Dense);
    env.reset_to(4).unwrap();
    let expected = format!("|{TERMINAL} .  . |\n| . {AGENT} . |\n| .  .  . |\n\n");
    assert_eq!(env.render(RenderMode::Ansi), expected);
}

#[test]
fn trail_start_and_agent_after_moving() {
    let mut env = env(3, 3, PolicyKind::Dense);
    env.reset_to(4).unwrap();
    env.step(Action::Up).unwrap();
    env.step(Action::Right).unwrap();
    let expected = format!("|{TERMINAL} .  . |\n| . {START} . |\n| .  X {AGENT}|\n\n");
    assert_eq!(env.render(RenderMode::Ansi), expected);
}

#[test]
fn rendering_does_not_touch_the_episode() {
    let mut env = env(4, 2, PolicyKind::Sparse);
    env.reset_to(5).unwrap();
    let before = env.episode().clone();
    let _ = env.render(RenderMode::Ansi);
    let _ = env.render("human".parse().unwrap());
    assert_eq!(env.episode(), &before);
}
