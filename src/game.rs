//! Scene setup and the per-tick driver.
//!
//! [`SceneCompositor`] owns the ECS [`World`] and the frame [`Schedule`]. A
//! front-end (the raylib window in `main.rs`, or a test) feeds it timestamps
//! through [`SceneCompositor::tick`]; the [`FrameScheduler`] decides whether
//! the tick draws, and a drawing tick runs the schedule:
//!
//! 1. apply queued [`SceneCommand`]s
//! 2. clear the [`FrameBuffer`]
//! 3. scroll and draw the parallax layers, back to front
//! 4. wander and move creatures
//! 5. draw creatures in spawn order
//! 6. advance every animation cursor, so the next tick shows the next frame
//!
//! Nothing in here touches a graphics API; the front-end replays the recorded
//! frame however it likes.

use std::path::Path;

use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Vector2;

use crate::components::creature::{AnimationState, CreatureKind};
use crate::components::scrollinglayer::ScrollingLayer;
use crate::components::zindex::ZIndex;
use crate::error::SceneError;
use crate::events::scene::{SceneCommand, SpawnRequest};
use crate::resources::animationstore::AnimationStore;
use crate::resources::assetloader::AssetLoader;
use crate::resources::framebuffer::FrameBuffer;
use crate::resources::framescheduler::{FrameScheduler, TickOutcome};
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenerng::SceneRng;
use crate::resources::scrollspeed::ScrollSpeed;
use crate::resources::spawncounter::SpawnCounter;
use crate::resources::texturestore::TextureStore;
use crate::systems::animation::advance_animations;
use crate::systems::assets::{BitmapDecoder, drain_asset_messages};
use crate::systems::commands::{apply_scene_commands, spawn_creature, update_scene_commands};
use crate::systems::movement::kinematic_movement;
use crate::systems::parallax::parallax_layers;
use crate::systems::render::{clear_frame, render_creatures};
use crate::systems::wander::wander;

/// Parallax ratio of each background strip, farthest first.
const LAYER_RATIOS: [f32; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Distance kept between the player's feet and the bottom of the frame.
const GROUND_MARGIN: f32 = 40.0;

/// Room kept free at the right edge so wandering enemies stay on screen.
const ENEMY_MARGIN: f32 = 150.0;

/// Bitmap key of the `index`-th (0-based) parallax layer.
pub fn layer_key(index: usize) -> String {
    format!("layer-{}", index + 1)
}

pub struct SceneCompositor {
    world: World,
    schedule: Schedule,
}

impl SceneCompositor {
    pub fn new(config: GameConfig) -> Result<Self, SceneError> {
        let mut world = World::new();
        world.insert_resource(FrameBuffer::new(config.window_width, config.window_height));
        world.insert_resource(FrameScheduler::new(
            config.min_frame_interval_ms,
            config.scene_frozen_frames,
        ));
        world.insert_resource(ScrollSpeed::new(config.scroll_speed, config.max_scroll_speed));
        world.insert_resource(TextureStore::new());
        world.insert_resource(AnimationStore::with_all_kinds());
        world.insert_resource(AssetLoader::new());
        world.insert_resource(SpawnCounter::default());
        world.insert_resource(SceneRng::default());
        world.insert_resource(Messages::<SceneCommand>::default());
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                update_scene_commands,
                apply_scene_commands,
                clear_frame,
                parallax_layers,
                wander,
                kinematic_movement,
                render_creatures,
                advance_animations,
            )
                .chain(),
        );
        schedule
            .initialize(&mut world)
            .map_err(|e| SceneError::Schedule(e.to_string()))?;

        Ok(Self { world, schedule })
    }

    /// Reseed the scene's random source (enemy placement, wandering).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.world.insert_resource(SceneRng::with_seed(seed));
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &GameConfig {
        self.world.resource::<GameConfig>()
    }

    /// Start loading a bitmap in the background.
    pub fn request_bitmap(&mut self, key: impl Into<String>, path: impl AsRef<Path>) {
        let key = key.into();
        let path = path.as_ref().to_path_buf();
        self.world
            .resource_scope(|world, mut loader: Mut<AssetLoader>| {
                let mut store = world.resource_mut::<TextureStore>();
                loader.request(&mut store, key, path);
            });
    }

    /// Request every bitmap the default scene uses from `dir`.
    pub fn load_default_assets(&mut self, dir: &Path) {
        for index in 0..LAYER_RATIOS.len() {
            let key = layer_key(index);
            let file = dir.join(format!("{}.png", key));
            self.request_bitmap(key, file);
        }
        for kind in CreatureKind::ALL {
            self.request_bitmap(kind.tex_key(), dir.join(kind.image_file()));
        }
        info!(
            "Requested {} bitmaps from {:?}",
            LAYER_RATIOS.len() + CreatureKind::ALL.len(),
            dir
        );
    }

    /// Settle finished bitmap loads. Returns how many were settled.
    pub fn pump_assets(&mut self, decoder: &mut impl BitmapDecoder) -> usize {
        drain_asset_messages(&mut self.world, decoder)
    }

    /// `true` once no bitmap is still loading.
    pub fn assets_ready(&self) -> bool {
        self.world.resource::<TextureStore>().is_settled()
    }

    /// Build the default scene: parallax layers, the player dog and the
    /// configured number of wandering enemies.
    pub fn populate(&mut self) {
        let (width, height, enemies) = {
            let config = self.config();
            (
                config.layer_width as f32,
                config.layer_height as f32,
                config.enemy_count,
            )
        };
        for (index, ratio) in LAYER_RATIOS.iter().enumerate() {
            let layer = ScrollingLayer::new(layer_key(index), width, height, *ratio);
            self.add_layer(layer, index as i32);
        }

        let player = self.player_request();
        self.spawn_creature(&player);

        for _ in 0..enemies {
            let request = self.random_enemy_request();
            self.spawn_creature(&request);
        }
        info!("Scene populated with {} enemies", enemies);
    }

    /// Add a parallax layer. Lower `z` draws first.
    pub fn add_layer(&mut self, layer: ScrollingLayer, z: i32) -> Entity {
        debug!("Adding layer '{}' at z {}", layer.tex_key, z);
        self.world.spawn((layer, ZIndex(z))).id()
    }

    /// Put a creature in the scene right away and return its live handle.
    pub fn spawn_creature(&mut self, request: &SpawnRequest) -> Entity {
        spawn_creature(&mut self.world, request)
    }

    /// The player dog standing near the bottom left of the frame.
    pub fn player_request(&self) -> SpawnRequest {
        let config = self.config();
        let kind = CreatureKind::Dog;
        let frame_height = kind.phases().first().map_or(0, |p| p.frame_height) as f32;
        let y = (config.window_height as f32 - frame_height / kind.default_scale() - GROUND_MARGIN)
            .max(0.0)
            .floor();
        SpawnRequest::new(kind, 0.0, y).as_player()
    }

    /// A random enemy roaming the upper half of the frame.
    pub fn random_enemy_request(&mut self) -> SpawnRequest {
        let (width, height) = self.config().window_size();
        let min = Vector2 { x: 0.0, y: 0.0 };
        let max = Vector2 {
            x: (width as f32 - ENEMY_MARGIN).max(0.0),
            y: height as f32 / 2.0,
        };

        let mut rng = self.world.resource_mut::<SceneRng>();
        let kind = CreatureKind::ENEMIES[rng.0.usize(..CreatureKind::ENEMIES.len())];
        let x = (rng.0.f32() * max.x).floor();
        let y = (rng.0.f32() * max.y).floor();
        let pace = rng.0.u32(1..=4) as f32;

        SpawnRequest::new(kind, x, y)
            .with_pace(pace, pace)
            .wandering(min, max)
    }

    /// Queue a command for the next drawn tick.
    pub fn send(&mut self, cmd: SceneCommand) {
        self.world.resource_mut::<Messages<SceneCommand>>().write(cmd);
    }

    /// Switch the player's animation and restart the tick chain.
    pub fn select_state(&mut self, state: AnimationState) {
        self.send(SceneCommand::SetPlayerState(state));
        self.start();
    }

    pub fn set_scroll_speed(&mut self, speed: u32) {
        self.send(SceneCommand::SetScrollSpeed(speed));
    }

    /// Nudge the scroll speed by `delta`. Queued nudges add up.
    pub fn adjust_scroll_speed(&mut self, delta: i32) {
        self.send(SceneCommand::AdjustScrollSpeed(delta));
    }

    pub fn scroll_speed(&self) -> ScrollSpeed {
        *self.world.resource::<ScrollSpeed>()
    }

    /// Cancel any pending tick and schedule a fresh one.
    pub fn start(&mut self) {
        let handle = self.world.resource_mut::<FrameScheduler>().start();
        debug!("Scheduled tick {:?}", handle);
    }

    pub fn stop(&mut self) {
        self.world.resource_mut::<FrameScheduler>().stop();
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        self.world.resource::<FrameScheduler>()
    }

    /// Fire the pending tick at `timestamp_ms` and draw if it qualifies.
    pub fn tick(&mut self, timestamp_ms: f64) -> TickOutcome {
        let ready = self.assets_ready();
        let outcome = self
            .world
            .resource_mut::<FrameScheduler>()
            .fire(timestamp_ms, ready);
        match outcome {
            TickOutcome::Draw => self.schedule.run(&mut self.world),
            TickOutcome::NotReady => {
                debug!("Tick at {:.1} ms skipped: bitmaps still loading", timestamp_ms)
            }
            _ => {}
        }
        outcome
    }

    /// Display list of the last drawn tick.
    pub fn frame(&self) -> &FrameBuffer {
        self.world.resource::<FrameBuffer>()
    }
}
