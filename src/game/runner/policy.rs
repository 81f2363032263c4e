// Jump decision policies
//
// The runner has no player input beyond "start": a policy decides each tick
// whether to jump.

use super::config::RunnerConfig;
use super::state::RunnerState;

/// Decides whether the runner should jump this tick
pub trait JumpPolicy {
    /// `obstacle_offset` is the obstacle's horizontal distance ahead of the
    /// player (negative once it has been passed)
    fn should_jump(&self, obstacle_offset: f32, state: RunnerState) -> bool;
}

impl<F> JumpPolicy for F
where
    F: Fn(f32, RunnerState) -> bool,
{
    fn should_jump(&self, obstacle_offset: f32, state: RunnerState) -> bool {
        self(obstacle_offset, state)
    }
}

/// Jump whenever the obstacle is inside a fixed band ahead of the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityJump {
    /// Exclusive lower bound of the band
    pub near: f32,
    /// Exclusive upper bound of the band
    pub far: f32,
}

impl ProximityJump {
    pub fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }

    pub fn from_config(config: &RunnerConfig) -> Self {
        let (near, far) = config.proximity_window;
        Self::new(near, far)
    }
}

impl Default for ProximityJump {
    fn default() -> Self {
        Self::new(0.0, 2.0)
    }
}

impl JumpPolicy for ProximityJump {
    fn should_jump(&self, obstacle_offset: f32, state: RunnerState) -> bool {
        state == RunnerState::Running && obstacle_offset > self.near && obstacle_offset < self.far
    }
}

/// Never jumps; the runner meets every obstacle head-on
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverJump;

impl JumpPolicy for NeverJump {
    fn should_jump(&self, _obstacle_offset: f32, _state: RunnerState) -> bool {
        false
    }
}
