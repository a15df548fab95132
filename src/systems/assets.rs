//! Asset loading systems.
//!
//! - [`read_bitmap`] runs on a loader thread and turns a file into an
//!   [`AssetMessage`].
//! - [`drain_asset_messages`] runs on the main thread, decodes finished loads
//!   through a [`BitmapDecoder`] and settles the
//!   [`TextureStore`](crate::resources::texturestore::TextureStore).
//!
//! A failed bitmap is logged once and stays failed; whatever draws from it is
//! skipped while the rest of the scene keeps animating.

use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::error::SceneError;
use crate::events::asset::AssetMessage;
use crate::resources::assetloader::AssetLoader;
use crate::resources::texturestore::{BitmapInfo, TextureStore};

/// Turns raw file bytes into a bitmap the drawing backend can blit.
pub trait BitmapDecoder {
    fn decode(&mut self, key: &str, path: &Path, bytes: &[u8]) -> Result<BitmapInfo, SceneError>;
}

/// Read one bitmap file. Runs on a loader thread.
pub fn read_bitmap(key: String, path: PathBuf) -> AssetMessage {
    match std::fs::read(&path) {
        Ok(bytes) => AssetMessage::Loaded { key, path, bytes },
        Err(source) => {
            let error = SceneError::Io {
                path: path.clone(),
                source,
            };
            AssetMessage::LoadFailed {
                key,
                path,
                error: error.to_string(),
            }
        }
    }
}

/// Non-blocking: settle every load that has completed so far.
///
/// Returns the number of bitmaps settled by this call.
pub fn drain_asset_messages(world: &mut World, decoder: &mut impl BitmapDecoder) -> usize {
    let messages: Vec<AssetMessage> = match world.get_resource::<AssetLoader>() {
        Some(loader) => loader.rx_msg.try_iter().collect(),
        None => return 0,
    };
    if messages.is_empty() {
        return 0;
    }

    let settled = messages.len();
    {
        let mut store = world.resource_mut::<TextureStore>();
        for msg in messages {
            match msg {
                AssetMessage::Loaded { key, path, bytes } => {
                    match decoder.decode(&key, &path, &bytes) {
                        Ok(info) => {
                            info!(
                                "Bitmap '{}' ready ({}x{})",
                                key, info.width, info.height
                            );
                            store.mark_ready(key, info);
                        }
                        Err(e) => {
                            error!("{}", e);
                            store.mark_failed(key, e.to_string());
                        }
                    }
                }
                AssetMessage::LoadFailed { key, error, .. } => {
                    error!("Bitmap '{}' failed to load: {}", key, error);
                    store.mark_failed(key, error);
                }
            }
        }
    }

    let remaining = {
        let mut loader = world.resource_mut::<AssetLoader>();
        for _ in 0..settled {
            loader.settle_one();
        }
        loader.in_flight()
    };
    if remaining == 0 {
        let (_, ready, failed) = world.resource::<TextureStore>().counts();
        info!(
            "All bitmaps settled: {} ready, {} failed",
            ready, failed
        );
    }
    settled
}
