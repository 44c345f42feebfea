pub mod rollout;

pub use rollout::{RolloutConfig, RolloutMode};
