//! Bitmap readiness registry.
//!
//! Pixels live in the drawing backend; this store only tracks, per texture key,
//! whether the bitmap is still loading, ready to blit (with its intrinsic
//! size) or permanently failed. The scene treats "nothing pending" as its
//! fan-in barrier and skips failed bitmaps element by element.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Intrinsic pixel size of a decoded bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfo {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapStatus {
    Pending,
    Ready(BitmapInfo),
    Failed(String),
}

#[derive(Resource, Debug, Default)]
pub struct TextureStore {
    map: FxHashMap<String, BitmapStatus>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_pending(&mut self, key: impl Into<String>) {
        self.map.insert(key.into(), BitmapStatus::Pending);
    }

    pub fn mark_ready(&mut self, key: impl Into<String>, info: BitmapInfo) {
        self.map.insert(key.into(), BitmapStatus::Ready(info));
    }

    pub fn mark_failed(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        self.map.insert(key.into(), BitmapStatus::Failed(reason.into()));
    }

    pub fn status(&self, key: &str) -> Option<&BitmapStatus> {
        self.map.get(key)
    }

    /// Size of `key` if it finished decoding successfully.
    pub fn get(&self, key: &str) -> Option<BitmapInfo> {
        match self.map.get(key) {
            Some(BitmapStatus::Ready(info)) => Some(*info),
            _ => None,
        }
    }

    pub fn is_ready(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// True once no registered bitmap is still loading.
    pub fn is_settled(&self) -> bool {
        !self
            .map
            .values()
            .any(|status| matches!(status, BitmapStatus::Pending))
    }

    /// `(pending, ready, failed)` counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        self.map
            .values()
            .fold((0, 0, 0), |(p, r, f), status| match status {
                BitmapStatus::Pending => (p + 1, r, f),
                BitmapStatus::Ready(_) => (p, r + 1, f),
                BitmapStatus::Failed(_) => (p, r, f + 1),
            })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
