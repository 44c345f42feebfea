use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use galactic_shooter::game::GameConfig;
use galactic_shooter::modes::{RolloutConfig, RolloutMode};

#[derive(Parser)]
#[command(name = "galactic_shooter")]
#[command(version, about = "Headless galactic shooter environment for RL experiments")]
struct Cli {
    /// Execution mode (currently only 'rollout' is implemented)
    #[arg(long, default_value = "rollout")]
    mode: Mode,

    /// Rule-set preset to run
    #[arg(long, default_value = "arcade")]
    preset: Preset,

    /// JSON config file overriding the preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of episodes to run
    #[arg(long, default_value = "100")]
    episodes: usize,

    /// Step cap per episode
    #[arg(long, default_value = "1000")]
    max_steps: u32,

    /// Log progress every N episodes
    #[arg(long, default_value = "10")]
    log_frequency: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Drive the simulation with a uniformly random policy
    Rollout,
    // Future modes:
    // Train,
}

#[derive(Clone, ValueEnum)]
enum Preset {
    /// Sparse ±10 rewards, escaped aliens recycle
    Arcade,
    /// Small survival bonus, ±1 rewards, escaped aliens cost a life
    Gym,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve the game configuration: explicit file beats preset
    let game_config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => match cli.preset {
            Preset::Arcade => GameConfig::arcade(),
            Preset::Gym => GameConfig::gym(),
        },
    };
    game_config.validate()?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Rollout => {
            let mut rollout_config = RolloutConfig::new(cli.episodes, game_config);
            rollout_config.max_steps = cli.max_steps;
            rollout_config.log_frequency = cli.log_frequency;

            let mut rollout = RolloutMode::new(rollout_config);
            rollout.run()?;
        }
    }

    Ok(())
}
