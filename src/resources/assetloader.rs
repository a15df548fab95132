//! Background bitmap loading.
//!
//! Each request spawns a short-lived thread that reads the file and reports
//! back over a channel (fan-out). The main thread drains the channel with
//! [`drain_asset_messages`](crate::systems::assets::drain_asset_messages),
//! which decodes the bytes and settles the matching
//! [`TextureStore`](crate::resources::texturestore::TextureStore) slot.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::events::asset::AssetMessage;
use crate::resources::texturestore::TextureStore;
use crate::systems::assets::read_bitmap;

#[derive(Resource)]
pub struct AssetLoader {
    tx_msg: Sender<AssetMessage>,
    /// Receiver for completed loads (loader threads -> ECS).
    pub rx_msg: Receiver<AssetMessage>,
    in_flight: usize,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLoader {
    pub fn new() -> Self {
        let (tx_msg, rx_msg) = unbounded::<AssetMessage>();
        Self {
            tx_msg,
            rx_msg,
            in_flight: 0,
        }
    }

    /// Start loading `path` as bitmap `key` and mark it pending in `store`.
    pub fn request(
        &mut self,
        store: &mut TextureStore,
        key: impl Into<String>,
        path: impl Into<PathBuf>,
    ) {
        let key = key.into();
        let path = path.into();
        debug!("Requesting bitmap '{}' from {:?}", key, path);
        store.mark_pending(key.clone());
        self.in_flight += 1;

        let tx = self.tx_msg.clone();
        std::thread::spawn(move || {
            let msg = read_bitmap(key, path);
            // receiver gone means the scene was torn down
            let _ = tx.send(msg);
        });
    }

    /// Loads requested but not yet drained.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn settle_one(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
