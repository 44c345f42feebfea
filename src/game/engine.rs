use super::action::Action;
use super::collision;
use super::config::GameConfig;
use super::entity::Player;
use super::error::GameError;
use super::spawner::Spawner;
use super::state::GameState;

/// Event counts for a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Aliens destroyed by bullets this step
    pub kills: u32,
    /// Hits taken this step: player collisions plus, with the exit penalty
    /// enabled, aliens that escaped out the bottom
    pub hits_taken: u32,
    /// Aliens removed after escaping out the bottom (exit-penalty variant
    /// only; recycled aliens are not counted)
    pub aliens_escaped: u32,
}

/// Result of a simulation step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Reward for this step (for RL training)
    pub reward: f32,
    /// Whether the episode has terminated
    pub terminated: bool,
    /// Cumulative score after this step
    pub score: u32,
    /// Event counts behind the reward
    pub info: StepInfo,
}

/// The stepper that orchestrates all game rules for one discrete time step
pub struct GameEngine {
    config: GameConfig,
    spawner: Spawner,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            spawner: Spawner::from_config(&config),
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build a fresh episode state: centered player, one seed alien
    pub fn reset(&mut self) -> GameState {
        let player = Player::new(self.config.field_width, self.config.field_height);
        let seed_alien = self.spawner.spawn(&mut self.rng);
        GameState::new(
            player,
            vec![seed_alien],
            self.config.field_width,
            self.config.field_height,
        )
    }

    /// Execute one step of the simulation.
    ///
    /// Stepping a terminated state is a usage error, not a no-op: the caller
    /// must go through `reset` to start a new episode.
    pub fn step(&mut self, state: &mut GameState, action: Action) -> Result<StepResult, GameError> {
        if state.terminated {
            return Err(GameError::EpisodeOver);
        }

        // 1. Apply the action to the player
        match action {
            Action::MoveLeft => state.player.speed_x = -self.config.player_speed,
            Action::MoveRight => state.player.speed_x = self.config.player_speed,
            Action::Shoot => {
                let bullet = state.player.shoot();
                state.bullets.push(bullet);
            }
            Action::NoOp => state.player.speed_x = 0,
        }

        // 2. Advance all entities
        state.player.advance(self.config.field_width);
        for bullet in &mut state.bullets {
            bullet.advance();
        }
        state.bullets.retain(|b| !b.expired());
        for alien in &mut state.aliens {
            alien.advance();
        }

        // Aliens that slipped past the bottom either cost a life or recycle
        let mut escaped = 0u32;
        if self.config.alien_exit_penalty {
            let before = state.aliens.len();
            state
                .aliens
                .retain(|a| !a.has_left_field(self.config.field_height));
            escaped = (before - state.aliens.len()) as u32;
        } else {
            for alien in &mut state.aliens {
                if alien.has_left_field(self.config.field_height) {
                    *alien = self.spawner.spawn(&mut self.rng);
                }
            }
        }

        // 3. Resolve collisions and apply score/life deltas
        let report = collision::resolve(
            &state.player,
            &mut state.aliens,
            &mut state.bullets,
            self.config.collision_removes_alien,
        );

        let hits_taken = report.player_hits + escaped;
        state.score += report.kills;
        state.lives = state.lives.saturating_sub(hits_taken);

        // One replacement alien per kill, independent of the trickle policy
        for _ in 0..report.kills {
            let alien = self.spawner.spawn(&mut self.rng);
            state.aliens.push(alien);
        }

        // 4. Termination
        if state.lives == 0 {
            state.terminated = true;
        }

        // 5. Trickle spawn
        if let Some(alien) = self.spawner.maybe_spawn(state.aliens.len(), &mut self.rng) {
            state.aliens.push(alien);
        }

        // 6. Reward
        let reward = self.config.reward_survive
            + hits_taken as f32 * self.config.reward_hit
            + report.kills as f32 * self.config.reward_kill;

        state.steps += 1;

        Ok(StepResult {
            reward,
            terminated: state.terminated,
            score: state.score,
            info: StepInfo {
                kills: report.kills,
                hits_taken,
                aliens_escaped: escaped,
            },
        })
    }
}
