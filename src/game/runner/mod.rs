// Endless runner
//
// This module contains the whole gameplay core:
// - Runner state and the clip each state plays
// - The runner character with its jump physics
// - The single recycled obstacle and the score it feeds
// - The jump policy standing in for player input
// - The state machine tying them together, one tick at a time
// - The render seam it draws through

pub mod animation;
pub mod clips;
pub mod config;
pub mod machine;
pub mod obstacle;
pub mod player;
pub mod policy;
pub mod render;
pub mod score;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationPlayer, PlaybackMode};
pub use clips::ClipLibrary;
pub use config::{ConfigError, RunnerConfig, BASE_CONFIG};
pub use machine::{RunnerStateMachine, SessionEnd};
pub use obstacle::Obstacle;
pub use player::PlayerCharacter;
pub use policy::{JumpPolicy, NeverJump, ProximityJump};
pub use render::{FrameCounter, RenderSink, Scene};
pub use score::{Score, ScoreSink};
pub use state::RunnerState;

use crate::engine::assets::ClipError;

/// Reasons a session cannot be built
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to resolve animation clips: {0}")]
    Clip(#[from] ClipError),

    #[error("Invalid runner config: {0}")]
    Config(#[from] ConfigError),
}
