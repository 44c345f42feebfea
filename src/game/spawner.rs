use rand::Rng;

use super::config::GameConfig;
use super::entity::{Alien, ALIEN_WIDTH};

/// Aliens enter the field at a random depth inside this band above y = 0,
/// so they stagger into view rather than appearing all at once.
const SPAWN_Y_MIN: i32 = -100;
const SPAWN_Y_MAX: i32 = -40;

/// Policy for introducing aliens into the world
///
/// Two entry points: `spawn` creates an alien unconditionally (the seed
/// alien at reset, replacement spawns after kills, recycling) and
/// `maybe_spawn` applies the low-probability trickle policy that keeps the
/// population near its configured minimum.
#[derive(Debug, Clone)]
pub struct Spawner {
    field_width: i32,
    min_population: usize,
    spawn_probability: f64,
    min_speed: i32,
    max_speed: i32,
}

impl Spawner {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            field_width: config.field_width,
            min_population: config.min_alien_population,
            spawn_probability: config.spawn_probability,
            min_speed: config.alien_min_speed,
            max_speed: config.alien_max_speed,
        }
    }

    /// Create an alien at a random position above the visible field with a
    /// random per-instance fall speed
    pub fn spawn(&self, rng: &mut impl Rng) -> Alien {
        let x = rng.gen_range(0..self.field_width - ALIEN_WIDTH);
        let y = rng.gen_range(SPAWN_Y_MIN..SPAWN_Y_MAX);
        let speed_y = rng.gen_range(self.min_speed..=self.max_speed);
        Alien::new(x, y, speed_y)
    }

    /// Trickle policy: spawn with the configured probability, but only while
    /// the population sits below its minimum
    pub fn maybe_spawn(&self, alien_count: usize, rng: &mut impl Rng) -> Option<Alien> {
        if alien_count < self.min_population && rng.gen_bool(self.spawn_probability) {
            Some(self.spawn(rng))
        } else {
            None
        }
    }
}
