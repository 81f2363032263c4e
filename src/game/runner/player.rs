// The runner character

use glam::Vec3;

use crate::engine::physics::Aabb;

use super::animation::AnimationPlayer;
use super::clips::ClipLibrary;
use super::config::RunnerConfig;
use super::state::RunnerState;

/// The player-controlled (well, script-controlled) runner
///
/// Only the vertical component of `position` ever changes; the runner stays
/// put while the world scrolls past.
#[derive(Debug)]
pub struct PlayerCharacter {
    /// Feet position in world space
    position: Vec3,
    /// Vertical velocity (units/second)
    velocity_y: f32,
    state: RunnerState,
    animation: AnimationPlayer,
    clips: ClipLibrary,

    launch_velocity: f32,
    gravity: f32,
    half_extents: Vec3,
}

impl PlayerCharacter {
    /// Create an idle runner standing at `config.player_x`
    pub fn new(config: &RunnerConfig, clips: ClipLibrary) -> Self {
        let mut player = Self {
            position: Vec3::new(config.player_x, 0.0, 0.0),
            velocity_y: 0.0,
            state: RunnerState::Idle,
            animation: AnimationPlayer::new(),
            clips,
            launch_velocity: config.launch_velocity,
            gravity: config.gravity,
            half_extents: config.player_half_extents,
        };
        player.play_state_clip();
        player
    }

    /// Idle -> Running (the start trigger)
    pub fn start_run(&mut self) {
        if self.state != RunnerState::Idle {
            log::trace!("Ignoring start while {:?}", self.state);
            return;
        }
        self.transition(RunnerState::Running);
    }

    /// Running -> Jumping with the fixed launch velocity
    pub fn start_jump(&mut self) {
        if !self.state.can_jump() {
            log::trace!("Ignoring jump while {:?}", self.state);
            return;
        }
        self.velocity_y = self.launch_velocity;
        self.transition(RunnerState::Jumping);
        log::debug!("Jump at y={:.3}", self.position.y);
    }

    /// Advance jump physics by `dt` seconds
    ///
    /// Explicit Euler on the way up and down; the ground clamp makes the
    /// landing height exact no matter how the deltas were sliced.
    pub fn integrate(&mut self, dt: f32) {
        if self.state != RunnerState::Jumping {
            return;
        }

        self.position.y += self.velocity_y * dt;
        self.velocity_y += self.gravity * dt;

        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.velocity_y = 0.0;
            self.transition(RunnerState::Running);
            log::debug!("Landed");
        }
    }

    /// Running/Jumping -> Dead; a no-op if already dead or not yet running
    pub fn kill(&mut self) {
        if !self.state.can_die() {
            log::trace!("Ignoring kill while {:?}", self.state);
            return;
        }
        self.velocity_y = 0.0;
        self.transition(RunnerState::Dead);
    }

    /// Advance the playing clip
    pub fn update_animation(&mut self, dt: f32) {
        self.animation.update(dt);
    }

    /// World-space box around the runner
    pub fn bounding_box(&self) -> Aabb {
        Aabb::standing_on(self.position, self.half_extents)
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity_y(&self) -> f32 {
        self.velocity_y
    }

    pub fn animation(&self) -> &AnimationPlayer {
        &self.animation
    }

    /// Every state change swaps exactly one clip
    fn transition(&mut self, next: RunnerState) {
        debug_assert!(self.state.can_transition_to(next));
        self.state = next;
        self.play_state_clip();
    }

    fn play_state_clip(&mut self) {
        let clip = self.clips.for_state(self.state);
        self.animation.swap(clip, self.state.playback_mode());
    }
}
