use super::entity::{Alien, Bullet, Player};

/// Lives at the start of every episode
pub const STARTING_LIVES: u32 = 3;

/// Complete simulation state for one episode
///
/// Created only by `GameEngine::reset` and fully replaced (never patched)
/// on the next reset. Score never decreases; lives never increase and
/// bottom out at 0, at which point `terminated` latches true.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub player: Player,
    pub aliens: Vec<Alien>,
    pub bullets: Vec<Bullet>,
    pub score: u32,
    pub lives: u32,
    pub steps: u32,
    pub terminated: bool,
    pub field_width: i32,
    pub field_height: i32,
}

impl GameState {
    /// Create a fresh running state: score 0, full lives, no bullets
    pub fn new(player: Player, aliens: Vec<Alien>, field_width: i32, field_height: i32) -> Self {
        Self {
            player,
            aliens,
            bullets: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            steps: 0,
            terminated: false,
            field_width,
            field_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = GameState::new(
            Player::new(800, 600),
            vec![Alien::new(100, -50, 1)],
            800,
            600,
        );

        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.steps, 0);
        assert!(!state.terminated);
        assert_eq!(state.aliens.len(), 1);
        assert!(state.bullets.is_empty());
    }
}
