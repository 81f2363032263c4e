// In-memory clip catalog

use super::clip::{AnimationClip, ClipId, ClipProvider};
use super::{AssetHandle, AssetId, ClipError, ClipHandle};
use std::collections::HashMap;

/// Catalog of animation clips keyed by model file name
///
/// Stands in for the model loader: whatever imports the models registers
/// each clip's duration here, and the runner resolves clips through the
/// [`ClipProvider`] impl.
#[derive(Debug, Default)]
pub struct ClipCatalog {
    /// Clip durations by model file name
    durations: HashMap<String, f32>,

    /// Path to ID mapping
    clip_paths: HashMap<String, AssetId>,
}

impl ClipCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the four runner clips at their exported lengths
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (id, duration) in [
            (ClipId::Idle, 2.2),
            (ClipId::Run, 0.73),
            (ClipId::Jump, 1.1),
            (ClipId::Death, 2.6),
        ] {
            catalog.insert(id.file_name(), duration);
        }
        catalog
    }

    /// Register a clip under its model file name
    pub fn register(&mut self, name: &str, duration: f32) -> Result<ClipHandle, ClipError> {
        if self.clip_paths.contains_key(name) {
            return Err(ClipError::AlreadyLoaded(name.to_string()));
        }
        if !(duration.is_finite() && duration > 0.0) {
            return Err(ClipError::InvalidDuration {
                name: name.to_string(),
                duration,
            });
        }

        Ok(self.insert(name, duration))
    }

    fn insert(&mut self, name: &str, duration: f32) -> ClipHandle {
        let id = AssetId::from_path(name);
        self.durations.insert(name.to_string(), duration);
        self.clip_paths.insert(name.to_string(), id);
        log::debug!("Registered clip '{}' ({:.2}s)", name, duration);

        AssetHandle::new(id)
    }

    /// Remove a clip, returning whether it was present
    pub fn unregister(&mut self, name: &str) -> bool {
        self.durations.remove(name);
        self.clip_paths.remove(name).is_some()
    }

    /// Number of registered clips
    pub fn len(&self) -> usize {
        self.clip_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clip_paths.is_empty()
    }
}

impl ClipProvider for ClipCatalog {
    fn clip(&self, id: ClipId) -> Option<AnimationClip> {
        let name = id.file_name();
        let asset_id = *self.clip_paths.get(name)?;
        let duration = *self.durations.get(name)?;

        Some(AnimationClip {
            id,
            handle: AssetHandle::new(asset_id),
            duration,
        })
    }
}
