// Asset management system
//
// Animation clips are the only assets the gameplay core touches. It asks a
// provider for them by identifier and never looks inside.

mod catalog;
mod clip;
mod handle;

pub use catalog::ClipCatalog;
pub use clip::{AnimationClip, ClipId, ClipProvider};
pub use handle::{AssetHandle, AssetId, ClipAsset, ClipHandle};

/// Clip resolution errors
#[derive(Debug, thiserror::Error)]
pub enum ClipError {
    #[error("Clip not found: {:?} ({})", .0, .0.file_name())]
    Missing(ClipId),

    #[error("Clip already loaded: {0}")]
    AlreadyLoaded(String),

    #[error("Invalid clip duration for {name}: {duration}")]
    InvalidDuration { name: String, duration: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_error_display() {
        let err = ClipError::Missing(ClipId::Jump);
        assert_eq!(err.to_string(), "Clip not found: Jump (jumping.glb)");
    }
}
