//! Scene configuration resource.
//!
//! Settings are read from an INI file. Every value has a safe default, so a
//! missing file or a missing key simply keeps the default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 700
//! target_fps = 60
//!
//! [scene]
//! min_frame_interval_ms = 16
//! frozen_frames = 1
//! scroll_speed = 5
//! max_scroll_speed = 40
//! enemies = 4
//!
//! [creatures]
//! player_frozen_frames = 3
//! enemy_frozen_frames = 2
//!
//! [layers]
//! width = 2400
//! height = 700
//!
//! [assets]
//! dir = ./assets/images
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::creature::CreatureKind;
use crate::error::SceneError;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 700;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MIN_FRAME_INTERVAL_MS: f64 = 16.0;
const DEFAULT_SCENE_FROZEN_FRAMES: u32 = 1;
const DEFAULT_SCROLL_SPEED: u32 = 5;
const DEFAULT_MAX_SCROLL_SPEED: u32 = 40;
const DEFAULT_ENEMY_COUNT: u32 = 4;
const DEFAULT_PLAYER_FROZEN_FRAMES: u32 = 3;
const DEFAULT_ENEMY_FROZEN_FRAMES: u32 = 2;
const DEFAULT_LAYER_WIDTH: u32 = 2400;
const DEFAULT_LAYER_HEIGHT: u32 = 700;
const DEFAULT_ASSETS_DIR: &str = "./assets/images";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Scene configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Frame buffer and window width in pixels.
    pub window_width: u32,
    /// Frame buffer and window height in pixels.
    pub window_height: u32,
    pub target_fps: u32,
    /// Ticks closer together than this are dropped.
    pub min_frame_interval_ms: f64,
    /// Scene-level throttle: only every Nth accepted tick is drawn.
    pub scene_frozen_frames: u32,
    /// Initial global scroll speed (pixels per tick at parallax ratio 1).
    pub scroll_speed: u32,
    pub max_scroll_speed: u32,
    /// Enemies spawned by the default scene.
    pub enemy_count: u32,
    pub player_frozen_frames: u32,
    pub enemy_frozen_frames: u32,
    pub layer_width: u32,
    pub layer_height: u32,
    /// Directory holding every bitmap.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            min_frame_interval_ms: DEFAULT_MIN_FRAME_INTERVAL_MS,
            scene_frozen_frames: DEFAULT_SCENE_FROZEN_FRAMES,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            max_scroll_speed: DEFAULT_MAX_SCROLL_SPEED,
            enemy_count: DEFAULT_ENEMY_COUNT,
            player_frozen_frames: DEFAULT_PLAYER_FROZEN_FRAMES,
            enemy_frozen_frames: DEFAULT_ENEMY_FROZEN_FRAMES,
            layer_width: DEFAULT_LAYER_WIDTH,
            layer_height: DEFAULT_LAYER_HEIGHT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), SceneError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| SceneError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, scroll_speed={}/{}, enemies={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.scroll_speed,
            self.max_scroll_speed,
            self.enemy_count
        );

        Ok(())
    }

    /// Parse configuration from INI text. Used for embedded defaults and tests.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), SceneError> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| SceneError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| -> Option<u32> {
            config
                .getuint(section, key)
                .ok()
                .flatten()
                .map(|v| v as u32)
        };

        // [window] section
        if let Some(width) = uint("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = uint("window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = uint("window", "target_fps") {
            self.target_fps = fps;
        }

        // [scene] section
        if let Some(ms) = config.getfloat("scene", "min_frame_interval_ms").ok().flatten() {
            self.min_frame_interval_ms = ms.max(0.0);
        }
        if let Some(n) = uint("scene", "frozen_frames") {
            self.scene_frozen_frames = n.max(1);
        }
        if let Some(speed) = uint("scene", "scroll_speed") {
            self.scroll_speed = speed;
        }
        if let Some(max) = uint("scene", "max_scroll_speed") {
            self.max_scroll_speed = max;
        }
        if let Some(n) = uint("scene", "enemies") {
            self.enemy_count = n;
        }

        // [creatures] section
        if let Some(n) = uint("creatures", "player_frozen_frames") {
            self.player_frozen_frames = n.max(1);
        }
        if let Some(n) = uint("creatures", "enemy_frozen_frames") {
            self.enemy_frozen_frames = n.max(1);
        }

        // [layers] section
        if let Some(width) = uint("layers", "width") {
            self.layer_width = width;
        }
        if let Some(height) = uint("layers", "height") {
            self.layer_height = height;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        self.scroll_speed = self.scroll_speed.min(self.max_scroll_speed);
    }

    fn to_ini(&self) -> Ini {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "scene",
            "min_frame_interval_ms",
            Some(self.min_frame_interval_ms.to_string()),
        );
        config.set(
            "scene",
            "frozen_frames",
            Some(self.scene_frozen_frames.to_string()),
        );
        config.set("scene", "scroll_speed", Some(self.scroll_speed.to_string()));
        config.set(
            "scene",
            "max_scroll_speed",
            Some(self.max_scroll_speed.to_string()),
        );
        config.set("scene", "enemies", Some(self.enemy_count.to_string()));

        config.set(
            "creatures",
            "player_frozen_frames",
            Some(self.player_frozen_frames.to_string()),
        );
        config.set(
            "creatures",
            "enemy_frozen_frames",
            Some(self.enemy_frozen_frames.to_string()),
        );

        config.set("layers", "width", Some(self.layer_width.to_string()));
        config.set("layers", "height", Some(self.layer_height.to_string()));

        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );
        config
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), SceneError> {
        self.to_ini()
            .write(&self.config_path)
            .map_err(|e| SceneError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Per-creature animation throttle for `kind`.
    pub fn frozen_frames_for(&self, kind: CreatureKind) -> u32 {
        if kind.is_enemy() {
            self.enemy_frozen_frames
        } else {
            self.player_frozen_frames
        }
    }

    /// Frame buffer size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
