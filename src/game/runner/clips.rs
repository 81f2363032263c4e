// State -> clip lookup

use crate::engine::assets::{AnimationClip, ClipError, ClipId, ClipProvider};

use super::state::RunnerState;

/// The four runner clips, resolved up front
///
/// Resolution happens once when a session is built, so a missing or
/// unplayable clip stops the session before the run can start instead of
/// surfacing mid-jump.
#[derive(Debug, Clone)]
pub struct ClipLibrary {
    idle: AnimationClip,
    run: AnimationClip,
    jump: AnimationClip,
    death: AnimationClip,
}

impl ClipLibrary {
    /// Resolve every runner clip through `provider`
    pub fn resolve(provider: &dyn ClipProvider) -> Result<Self, ClipError> {
        let fetch = |id: ClipId| -> Result<AnimationClip, ClipError> {
            let clip = provider.clip(id).ok_or(ClipError::Missing(id))?;
            if !(clip.duration.is_finite() && clip.duration > 0.0) {
                return Err(ClipError::InvalidDuration {
                    name: id.file_name().to_string(),
                    duration: clip.duration,
                });
            }
            Ok(clip)
        };

        Ok(Self {
            idle: fetch(ClipId::Idle)?,
            run: fetch(ClipId::Run)?,
            jump: fetch(ClipId::Jump)?,
            death: fetch(ClipId::Death)?,
        })
    }

    pub fn get(&self, id: ClipId) -> &AnimationClip {
        match id {
            ClipId::Idle => &self.idle,
            ClipId::Run => &self.run,
            ClipId::Jump => &self.jump,
            ClipId::Death => &self.death,
        }
    }

    /// Clip played while in `state`
    pub fn for_state(&self, state: RunnerState) -> &AnimationClip {
        self.get(state.clip_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::ClipCatalog;

    #[test]
    fn test_resolve_standard_catalog() {
        let library = ClipLibrary::resolve(&ClipCatalog::standard()).unwrap();

        assert_eq!(library.for_state(RunnerState::Idle).id, ClipId::Idle);
        assert_eq!(library.for_state(RunnerState::Running).id, ClipId::Run);
        assert_eq!(library.for_state(RunnerState::Jumping).id, ClipId::Jump);
        assert_eq!(library.for_state(RunnerState::Dead).id, ClipId::Death);
    }

    #[test]
    fn test_missing_clip_is_reported() {
        let mut catalog = ClipCatalog::standard();
        catalog.unregister(ClipId::Death.file_name());

        let err = ClipLibrary::resolve(&catalog).unwrap_err();
        assert!(matches!(err, ClipError::Missing(ClipId::Death)));
    }

    /// Standard catalog with one clip's duration overridden
    struct Retimed {
        catalog: ClipCatalog,
        id: ClipId,
        duration: f32,
    }

    impl ClipProvider for Retimed {
        fn clip(&self, id: ClipId) -> Option<AnimationClip> {
            let mut clip = self.catalog.clip(id)?;
            if id == self.id {
                clip.duration = self.duration;
            }
            Some(clip)
        }
    }

    #[test]
    fn test_unplayable_duration_is_reported() {
        for duration in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            let provider = Retimed {
                catalog: ClipCatalog::standard(),
                id: ClipId::Run,
                duration,
            };

            let err = ClipLibrary::resolve(&provider).unwrap_err();
            match err {
                ClipError::InvalidDuration { name, .. } => assert_eq!(name, "running.glb"),
                other => panic!("expected InvalidDuration, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_provider_fails_on_first_clip() {
        let err = ClipLibrary::resolve(&ClipCatalog::new()).unwrap_err();
        assert!(matches!(err, ClipError::Missing(ClipId::Idle)));
    }
}
