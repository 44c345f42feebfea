use super::error::GameError;

/// Action applied to the player on each simulation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Set horizontal velocity to the left
    MoveLeft,
    /// Set horizontal velocity to the right
    MoveRight,
    /// Fire a bullet from the player's top-center (no cooldown)
    Shoot,
    /// Zero the player's horizontal velocity
    NoOp,
}

impl Action {
    /// Size of the discrete action space
    pub const COUNT: usize = 4;

    /// Discrete index of this action (inverse of `try_from`)
    pub fn index(&self) -> usize {
        match self {
            Action::MoveLeft => 0,
            Action::MoveRight => 1,
            Action::Shoot => 2,
            Action::NoOp => 3,
        }
    }
}

impl TryFrom<usize> for Action {
    type Error = GameError;

    /// Convert a discrete action index to an `Action`.
    ///
    /// Indices outside `0..Action::COUNT` are rejected rather than being
    /// coerced to `NoOp`, so a buggy controller fails loudly.
    fn try_from(idx: usize) -> Result<Self, GameError> {
        match idx {
            0 => Ok(Action::MoveLeft),
            1 => Ok(Action::MoveRight),
            2 => Ok(Action::Shoot),
            3 => Ok(Action::NoOp),
            _ => Err(GameError::InvalidAction(idx)),
        }
    }
}
