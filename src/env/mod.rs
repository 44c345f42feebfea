//! Environment facade consumed by external controllers
//!
//! Provides:
//! - The reset/step interface (reward, done, score) for RL agents
//! - A validated discrete-index action entry point
//! - Read-only accessors for external featurization or rendering

pub mod environment;

pub use environment::ShooterEnvironment;
