//! Random-policy rollout mode
//!
//! Drives the environment with uniformly random actions for a number of
//! episodes, recording episode statistics and printing periodic progress.
//! Useful as a smoke test of the simulation and as a reward-scale baseline
//! before plugging in a learning agent.

use anyhow::Result;
use rand::Rng;

use crate::env::ShooterEnvironment;
use crate::game::{Action, GameConfig};
use crate::metrics::EpisodeStats;

/// Configuration for rollout mode
#[derive(Debug, Clone)]
pub struct RolloutConfig {
    /// Number of episodes to run
    pub num_episodes: usize,

    /// Truncate an episode after this many steps even if it has not
    /// terminated (a random policy can dodge aliens for a long time)
    pub max_steps: u32,

    /// Log progress every N episodes
    pub log_frequency: usize,

    /// Game configuration (variant flags, rewards, spawn policy)
    pub game_config: GameConfig,
}

impl RolloutConfig {
    pub fn new(num_episodes: usize, game_config: GameConfig) -> Self {
        Self {
            num_episodes,
            max_steps: 1000,
            log_frequency: 10,
            game_config,
        }
    }
}

/// Headless episode driver with a uniformly random policy
pub struct RolloutMode {
    env: ShooterEnvironment,
    stats: EpisodeStats,
    config: RolloutConfig,
    rng: rand::rngs::ThreadRng,
}

impl RolloutMode {
    pub fn new(config: RolloutConfig) -> Self {
        let env = ShooterEnvironment::new(config.game_config.clone());

        Self {
            env,
            // Rolling window of 100 episodes, as in typical RL reporting
            stats: EpisodeStats::new(100),
            config,
            rng: rand::thread_rng(),
        }
    }

    /// Run all episodes, printing progress and a final summary
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        for episode in 0..self.config.num_episodes {
            let (reward, steps, score) = self.run_episode()?;
            self.stats.record_episode(reward, steps, score);

            if (episode + 1) % self.config.log_frequency == 0 {
                println!(
                    "[Episode {}/{}] {}",
                    episode + 1,
                    self.config.num_episodes,
                    self.stats.format_summary()
                );
            }
        }

        println!("\nRollout complete.");
        println!("{}", self.stats.format_summary());

        Ok(())
    }

    /// Run a single episode and return (total reward, steps, final score)
    fn run_episode(&mut self) -> Result<(f32, u32, u32)> {
        self.env.reset();
        let mut episode_reward = 0.0;
        let mut episode_steps = 0u32;

        loop {
            let action_idx = self.rng.gen_range(0..Action::COUNT);
            let result = self.env.step_index(action_idx)?;

            episode_reward += result.reward;
            episode_steps += 1;

            if result.terminated || episode_steps >= self.config.max_steps {
                return Ok((episode_reward, episode_steps, result.score));
            }
        }
    }

    fn print_header(&self) {
        println!("{}", "=".repeat(60));
        println!("Random Rollout - Galactic Shooter");
        println!("{}", "=".repeat(60));
        println!("Episodes: {}", self.config.num_episodes);
        println!(
            "Playfield: {}x{}",
            self.config.game_config.field_width, self.config.game_config.field_height
        );
        println!(
            "Rewards: kill {:+} | hit {:+} | survive {:+}",
            self.config.game_config.reward_kill,
            self.config.game_config.reward_hit,
            self.config.game_config.reward_survive
        );
        println!("Max steps per episode: {}", self.config.max_steps);
        println!("{}", "=".repeat(60));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rollout_config_defaults() {
        let config = RolloutConfig::new(50, GameConfig::default());
        assert_eq!(config.num_episodes, 50);
        assert_eq!(config.max_steps, 1000);
        assert_eq!(config.log_frequency, 10);
    }

    #[test]
    fn test_run_single_episode() {
        let mut config = RolloutConfig::new(1, GameConfig::default());
        config.max_steps = 50;
        let mut mode = RolloutMode::new(config);

        let (_reward, steps, _score) = mode.run_episode().unwrap();

        assert!(steps > 0);
        assert!(steps <= 50);
    }

    #[test]
    fn test_run_records_every_episode() {
        let mut config = RolloutConfig::new(3, GameConfig::default());
        config.max_steps = 20;
        let mut mode = RolloutMode::new(config);

        mode.run().unwrap();

        assert_eq!(mode.stats.total_episodes(), 3);
        assert!(mode.stats.total_steps() > 0);
    }
}
