// Animation clip identifiers and the provider seam

use super::handle::ClipHandle;

/// The four clips the runner ever asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClipId {
    Idle,
    Run,
    Jump,
    Death,
}

impl ClipId {
    /// Every clip identifier, in the order they are resolved
    pub const ALL: [ClipId; 4] = [ClipId::Idle, ClipId::Run, ClipId::Jump, ClipId::Death];

    /// Model file the clip is exported in
    pub fn file_name(&self) -> &'static str {
        match self {
            ClipId::Idle => "idle.glb",
            ClipId::Run => "running.glb",
            ClipId::Jump => "jumping.glb",
            ClipId::Death => "standing death.glb",
        }
    }
}

/// A resolved animation clip
///
/// The runner only starts and stops clips; `duration` is kept so one-shot
/// playback knows where to clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub id: ClipId,
    pub handle: ClipHandle,
    /// Length of one playthrough in seconds
    pub duration: f32,
}

/// Something that can hand out animation clips by identifier
pub trait ClipProvider {
    /// Look up a clip; `None` if the provider has nothing for `id`
    fn clip(&self, id: ClipId) -> Option<AnimationClip>;
}
