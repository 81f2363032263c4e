// Type-safe asset handle system

use std::marker::PhantomData;

/// Unique identifier for an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub(crate) u64);

impl AssetId {
    /// Create a new asset ID from a model path
    pub fn from_path(path: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        path.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Type-safe handle to a loaded asset
///
/// The `T` parameter keeps clip handles from being mixed up with handles
/// to other kinds of assets the renderer may hold.
#[derive(Debug)]
pub struct AssetHandle<T> {
    pub(crate) id: AssetId,
    _phantom: PhantomData<T>,
}

// Manual impls: derives would require `T: Clone`/`T: PartialEq` on the marker.
impl<T> Clone for AssetHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AssetHandle<T> {}

impl<T> PartialEq for AssetHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for AssetHandle<T> {}

impl<T> AssetHandle<T> {
    /// Create a new asset handle
    pub(crate) fn new(id: AssetId) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying asset ID
    pub fn id(&self) -> AssetId {
        self.id
    }
}

/// Marker type for animation clips
#[derive(Debug)]
pub struct ClipAsset;

/// Handle to an animation clip owned by the clip provider
pub type ClipHandle = AssetHandle<ClipAsset>;
