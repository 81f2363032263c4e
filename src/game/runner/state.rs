// Runner state

use crate::engine::assets::ClipId;

use super::animation::PlaybackMode;

/// Represents the current state of the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RunnerState {
    /// Standing still, waiting for the start trigger
    #[default]
    Idle,
    /// Running along the ground
    Running,
    /// In the air after a jump
    Jumping,
    /// Hit the obstacle; terminal for the session
    Dead,
}

impl RunnerState {
    /// Check if the runner is in the air
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping)
    }

    /// Only a running runner may jump
    pub fn can_jump(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// The runner can only die once the run has begun
    pub fn can_die(&self) -> bool {
        matches!(self, Self::Running | Self::Jumping)
    }

    /// Whether `self -> next` is a legal transition
    pub fn can_transition_to(&self, next: RunnerState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running)
                | (Self::Running, Self::Jumping)
                | (Self::Jumping, Self::Running)
                | (Self::Running, Self::Dead)
                | (Self::Jumping, Self::Dead)
        )
    }

    /// Clip played while in this state
    pub fn clip_id(&self) -> ClipId {
        match self {
            Self::Idle => ClipId::Idle,
            Self::Running => ClipId::Run,
            Self::Jumping => ClipId::Jump,
            Self::Dead => ClipId::Death,
        }
    }

    /// How that clip is played
    pub fn playback_mode(&self) -> PlaybackMode {
        match self {
            Self::Idle | Self::Running => PlaybackMode::Loop,
            Self::Jumping | Self::Dead => PlaybackMode::OnceClamped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RunnerState; 4] = [
        RunnerState::Idle,
        RunnerState::Running,
        RunnerState::Jumping,
        RunnerState::Dead,
    ];

    #[test]
    fn test_initial_state() {
        assert_eq!(RunnerState::default(), RunnerState::Idle);
    }

    #[test]
    fn test_only_jumping_is_airborne() {
        assert!(!RunnerState::Idle.is_airborne());
        assert!(!RunnerState::Running.is_airborne());
        assert!(RunnerState::Jumping.is_airborne());
        assert!(!RunnerState::Dead.is_airborne());
    }

    #[test]
    fn test_jump_only_from_running() {
        for state in ALL {
            assert_eq!(state.can_jump(), state == RunnerState::Running);
            assert_eq!(
                state.can_transition_to(RunnerState::Jumping),
                state == RunnerState::Running
            );
        }
    }

    #[test]
    fn test_dead_not_reachable_from_idle() {
        assert!(!RunnerState::Idle.can_die());
        assert!(!RunnerState::Idle.can_transition_to(RunnerState::Dead));
        assert!(RunnerState::Running.can_transition_to(RunnerState::Dead));
        assert!(RunnerState::Jumping.can_transition_to(RunnerState::Dead));
    }

    #[test]
    fn test_dead_is_terminal() {
        for state in ALL {
            assert!(!RunnerState::Dead.can_transition_to(state));
        }
    }

    #[test]
    fn test_idle_only_leaves_to_running() {
        for state in ALL {
            assert_eq!(
                RunnerState::Idle.can_transition_to(state),
                state == RunnerState::Running
            );
        }
    }

    #[test]
    fn test_clip_per_state() {
        assert_eq!(RunnerState::Idle.clip_id(), ClipId::Idle);
        assert_eq!(RunnerState::Running.clip_id(), ClipId::Run);
        assert_eq!(RunnerState::Jumping.clip_id(), ClipId::Jump);
        assert_eq!(RunnerState::Dead.clip_id(), ClipId::Death);
    }

    #[test]
    fn test_one_shot_clips() {
        assert_eq!(RunnerState::Running.playback_mode(), PlaybackMode::Loop);
        assert_eq!(RunnerState::Jumping.playback_mode(), PlaybackMode::OnceClamped);
        assert_eq!(RunnerState::Dead.playback_mode(), PlaybackMode::OnceClamped);
    }
}
