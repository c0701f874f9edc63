//! # Gridworld Demo
//!
//! Builds one environment, renders it, takes a single step and renders it
//! again. Settings come from command-line flags or from a JSON config file.

mod app;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tabular::{PolicyKind, RenderMode};

/// Take one step in a tabular grid world.
#[derive(Parser, Debug)]
#[command(name = "gridworld", version, about)]
struct Cli {
    /// JSON environment config; overrides the grid and policy flags.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 6)]
    width: usize,

    #[arg(long, default_value_t = 6)]
    height: usize,

    /// Reward policy: sparse, semi_sparse or dense.
    #[arg(long, default_value_t = PolicyKind::Dense)]
    policy: PolicyKind,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 200)]
    max_steps: usize,

    /// Action code: 0 up, 1 right, 2 down, 3 left.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    action: i64,

    /// Render mode: ansi or human.
    #[arg(long, default_value = "ansi")]
    render: RenderMode,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => app::load_config(path)?,
        None => app::config_from_flags(cli.width, cli.height, cli.policy, cli.seed, cli.max_steps),
    };
    app::run(&config, cli.action, cli.render)
}
