//! Infinite Galactic Shooter - an arcade shooter environment for
//! reinforcement-learning experiments
//!
//! This library provides:
//! - Core game logic (game module): spawning, movement, collisions, scoring
//! - A reset/step environment facade for external controllers (env module)
//! - Episode statistics tracking (metrics module)
//! - A headless random-policy rollout driver (modes module)

pub mod env;
pub mod game;
pub mod metrics;
pub mod modes;
