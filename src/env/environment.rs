use crate::game::{Action, GameConfig, GameEngine, GameError, GameState, StepResult};

/// Shooter environment for reinforcement learning
///
/// Wraps the game engine and owns the current episode state, exposing:
/// - A standard RL interface (reset, step)
/// - A discrete action space (4 actions: MoveLeft, MoveRight, Shoot, NoOp)
/// - Read-only state accessors for external featurization or rendering
///
/// Observation encoding is deliberately left to the caller: the simulation
/// hands out positions and counters, not pixels or tensors.
pub struct ShooterEnvironment {
    engine: GameEngine,
    state: GameState,
}

impl ShooterEnvironment {
    /// Create a new environment with an initial episode already in place
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();
        Self { engine, state }
    }

    /// Discard the current episode and start a fresh one.
    ///
    /// Returns a view of the initial state so the caller can featurize it.
    pub fn reset(&mut self) -> &GameState {
        self.state = self.engine.reset();
        &self.state
    }

    /// Step the environment with a typed action.
    ///
    /// Fails with `GameError::EpisodeOver` when called after the episode has
    /// terminated without an intervening `reset`.
    pub fn step(&mut self, action: Action) -> Result<StepResult, GameError> {
        self.engine.step(&mut self.state, action)
    }

    /// Step the environment with a discrete action index.
    ///
    /// Indices outside the action set are rejected with
    /// `GameError::InvalidAction` before the simulation is touched.
    pub fn step_index(&mut self, action_idx: usize) -> Result<StepResult, GameError> {
        let action = Action::try_from(action_idx)?;
        self.step(action)
    }

    /// Get reference to the current episode state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn lives(&self) -> u32 {
        self.state.lives
    }

    pub fn steps(&self) -> u32 {
        self.state.steps
    }

    pub fn is_terminated(&self) -> bool {
        self.state.terminated
    }

    /// Top-left corner of the player's bounding box
    pub fn player_position(&self) -> (i32, i32) {
        (self.state.player.bounds.x, self.state.player.bounds.y)
    }

    pub fn player_velocity(&self) -> i32 {
        self.state.player.speed_x
    }

    /// Top-left corners of all live aliens
    pub fn alien_positions(&self) -> Vec<(i32, i32)> {
        self.state
            .aliens
            .iter()
            .map(|a| (a.bounds.x, a.bounds.y))
            .collect()
    }

    /// Top-left corners of all live bullets
    pub fn bullet_positions(&self) -> Vec<(i32, i32)> {
        self.state
            .bullets
            .iter()
            .map(|b| (b.bounds.x, b.bounds.y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Alien, STARTING_LIVES};

    fn quiet_env() -> ShooterEnvironment {
        let mut config = GameConfig::default();
        config.spawn_probability = 0.0;
        ShooterEnvironment::new(config)
    }

    #[test]
    fn test_environment_creation() {
        let env = ShooterEnvironment::new(GameConfig::default());

        assert!(!env.is_terminated());
        assert_eq!(env.score(), 0);
        assert_eq!(env.lives(), STARTING_LIVES);
        assert_eq!(env.alien_positions().len(), 1);
        assert!(env.bullet_positions().is_empty());
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let mut env = quiet_env();
        env.step(Action::Shoot).unwrap();
        env.step(Action::MoveLeft).unwrap();

        let state = env.reset();

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.steps, 0);
        assert_eq!(state.aliens.len(), 1);
        assert!(state.bullets.is_empty());
        assert_eq!(state.player.bounds.center_x(), 400);
    }

    #[test]
    fn test_step_with_all_action_indices() {
        let mut env = quiet_env();

        for idx in 0..Action::COUNT {
            env.reset();
            let result = env.step_index(idx).unwrap();
            assert!(!result.terminated);
        }
    }

    #[test]
    fn test_invalid_action_index_rejected() {
        let mut env = quiet_env();
        let steps_before = env.steps();

        assert_eq!(env.step_index(7), Err(GameError::InvalidAction(7)));
        // The simulation was not advanced
        assert_eq!(env.steps(), steps_before);
    }

    #[test]
    fn test_accessors_track_movement() {
        let mut env = quiet_env();
        let (x_before, _) = env.player_position();

        env.step(Action::MoveRight).unwrap();

        let (x_after, _) = env.player_position();
        assert!(x_after > x_before);
        assert!(env.player_velocity() > 0);
        assert_eq!(env.steps(), 1);
    }

    #[test]
    fn test_step_after_done_requires_reset() {
        let mut env = quiet_env();
        // Pin an alien onto the player and drain all lives
        env.state.aliens[0] = Alien::new(
            env.state.player.bounds.x,
            env.state.player.bounds.y,
            0,
        );
        env.state.lives = 1;

        let result = env.step(Action::NoOp).unwrap();
        assert!(result.terminated);
        assert!(env.is_terminated());

        assert_eq!(env.step(Action::NoOp), Err(GameError::EpisodeOver));

        env.reset();
        assert!(env.step(Action::NoOp).is_ok());
    }

    #[test]
    fn test_multiple_episodes() {
        let mut env = ShooterEnvironment::new(GameConfig::default());

        for _ in 0..2 {
            env.reset();
            let mut steps = 0;
            let mut done = false;

            while !done && steps < 200 {
                let result = env.step(Action::NoOp).unwrap();
                done = result.terminated;
                steps += 1;
            }

            assert!(done || steps == 200);
        }
    }
}
