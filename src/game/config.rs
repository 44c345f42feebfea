use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::entity::{ALIEN_WIDTH, PLAYER_WIDTH};
use super::error::GameError;

/// Configuration for the simulation
///
/// A single parameterized rule set replacing the divergent variants of the
/// game: which events cost lives, reward magnitudes, and spawn policy are
/// all explicit knobs. `default()` is the canonical arcade variant; `gym()`
/// is the continuous-reward variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the playfield in pixels
    pub field_width: i32,
    /// Height of the playfield in pixels
    pub field_height: i32,

    /// Whether an alien reaching the bottom costs a life (and is removed);
    /// when false the alien is recycled to a fresh position above the field
    pub alien_exit_penalty: bool,
    /// Whether a player-alien collision destroys the alien in addition to
    /// costing a life
    pub collision_removes_alien: bool,

    // Rewards (for RL). Ordering kill > survive > hit is required.
    /// Base reward granted every step for staying alive
    pub reward_survive: f32,
    /// Reward per alien destroyed by a bullet
    pub reward_kill: f32,
    /// Penalty per hit taken (collision or, with `alien_exit_penalty`, escape)
    pub reward_hit: f32,

    /// Trickle spawning kicks in below this alien population
    pub min_alien_population: usize,
    /// Per-step trickle spawn probability, in [0, 1]
    pub spawn_probability: f64,

    /// Horizontal speed applied by MoveLeft/MoveRight
    pub player_speed: i32,
    /// Inclusive range of per-alien fall speeds
    pub alien_min_speed: i32,
    pub alien_max_speed: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::arcade()
    }
}

impl GameConfig {
    /// Canonical arcade variant: sparse ±10 rewards, aliens recycle when
    /// they slip past the player, collisions destroy the alien
    pub fn arcade() -> Self {
        Self {
            field_width: 800,
            field_height: 600,
            alien_exit_penalty: false,
            collision_removes_alien: true,
            reward_survive: 0.0,
            reward_kill: 10.0,
            reward_hit: -10.0,
            min_alien_population: 3,
            spawn_probability: 0.02,
            player_speed: 5,
            alien_min_speed: 1,
            alien_max_speed: 3,
        }
    }

    /// Continuous variant: a small per-step survival bonus, ±1 event
    /// rewards, and a life lost whenever an alien escapes out the bottom
    pub fn gym() -> Self {
        Self {
            alien_exit_penalty: true,
            reward_survive: 0.0001,
            reward_kill: 1.0,
            reward_hit: -1.0,
            min_alien_population: 2,
            alien_max_speed: 1,
            ..Self::arcade()
        }
    }

    /// Check that the simulation can actually run with these values
    pub fn validate(&self) -> Result<(), GameError> {
        if self.field_width <= PLAYER_WIDTH.max(ALIEN_WIDTH) || self.field_height <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "playfield {}x{} is too small for the sprites",
                self.field_width, self.field_height
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_probability) {
            return Err(GameError::InvalidConfig(format!(
                "spawn_probability {} is not in [0, 1]",
                self.spawn_probability
            )));
        }
        if self.player_speed <= 0 {
            return Err(GameError::InvalidConfig(format!(
                "player_speed {} must be positive",
                self.player_speed
            )));
        }
        if self.alien_min_speed < 1 || self.alien_max_speed < self.alien_min_speed {
            return Err(GameError::InvalidConfig(format!(
                "alien speed range {}..={} is invalid",
                self.alien_min_speed, self.alien_max_speed
            )));
        }
        if self.reward_kill <= self.reward_survive || self.reward_survive <= self.reward_hit {
            return Err(GameError::InvalidConfig(
                "reward ordering must satisfy kill > survive > hit".to_string(),
            ));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(config)
    }
}
