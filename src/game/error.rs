use thiserror::Error;

/// Errors raised by the simulation API.
///
/// In-simulation conditions (losing a life, an alien escaping, the episode
/// ending) are reported through `StepResult`, never through this type. Only
/// misuse of the API or a malformed configuration is an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// The episode has terminated; the state must be replaced via `reset()`
    /// before stepping again.
    #[error("episode is over; call reset() before stepping again")]
    EpisodeOver,

    /// A discrete action index outside the defined action set.
    #[error("invalid action index: {0}")]
    InvalidAction(usize),

    /// A configuration value that the simulation cannot run with.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
