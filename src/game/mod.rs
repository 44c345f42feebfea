//! Core game logic module for the Galactic Shooter
//!
//! This module contains all the simulation rules without any I/O or rendering
//! dependencies. It can be driven programmatically by an RL agent, a random
//! policy, or an external renderer.

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod entity;
pub mod error;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::Action;
pub use collision::CollisionReport;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use entity::{Alien, Bounds, Bullet, Player};
pub use error::GameError;
pub use spawner::Spawner;
pub use state::{GameState, STARTING_LIVES};
