//! Raylib front-end.
//!
//! Owns the GPU textures decoded from loaded bitmaps and replays a recorded
//! [`FrameBuffer`] into a raylib drawing scope. The scene itself never sees
//! any of this; it only learns each bitmap's size through [`BitmapDecoder`].

use std::path::Path;

use log::{info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::SceneError;
use crate::resources::animationstore::SpriteRect;
use crate::resources::framebuffer::{DrawCmd, FrameBuffer};
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::BitmapInfo;
use crate::systems::assets::BitmapDecoder;

const BACKGROUND: Color = Color::BLACK;

/// Open the window described by `config`.
pub fn open_window(config: &GameConfig) -> Result<(RaylibHandle, RaylibThread), SceneError> {
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("Sprite Parallax")
        .build();
    if !rl.is_window_ready() {
        return Err(SceneError::Surface(format!(
            "could not open a {}x{} window",
            config.window_width, config.window_height
        )));
    }
    rl.set_target_fps(config.target_fps);
    info!(
        "Window ready: {}x{} at {} fps",
        config.window_width, config.window_height, config.target_fps
    );
    Ok((rl, thread))
}

fn to_rect(r: &SpriteRect) -> Rectangle {
    Rectangle {
        x: r.x,
        y: r.y,
        width: r.width,
        height: r.height,
    }
}

/// GPU textures keyed like the scene's bitmaps.
#[derive(Default)]
pub struct RaylibSurface {
    textures: FxHashMap<String, Texture2D>,
}

impl RaylibSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a decoder that uploads into this surface.
    pub fn decoder<'a>(
        &'a mut self,
        rl: &'a mut RaylibHandle,
        thread: &'a RaylibThread,
    ) -> RaylibDecoder<'a> {
        RaylibDecoder {
            rl,
            thread,
            surface: self,
        }
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Replay the last recorded frame.
    pub fn present(&self, d: &mut RaylibDrawHandle, frame: &FrameBuffer) {
        for cmd in frame.commands() {
            match cmd {
                DrawCmd::Clear(area) => d.draw_rectangle_rec(to_rect(area), BACKGROUND),
                DrawCmd::Blit { tex_key, src, dst } => {
                    // the scene only blits ready bitmaps, so a miss means it was never uploaded
                    if let Some(tex) = self.textures.get(tex_key) {
                        d.draw_texture_pro(
                            tex,
                            to_rect(src),
                            to_rect(dst),
                            Vector2::zero(),
                            0.0,
                            Color::WHITE,
                        );
                    }
                }
            }
        }
    }
}

/// Decodes bitmap bytes into raylib textures.
pub struct RaylibDecoder<'a> {
    rl: &'a mut RaylibHandle,
    thread: &'a RaylibThread,
    surface: &'a mut RaylibSurface,
}

impl BitmapDecoder for RaylibDecoder<'_> {
    fn decode(&mut self, key: &str, path: &Path, bytes: &[u8]) -> Result<BitmapInfo, SceneError> {
        let decode_err = |reason: String| SceneError::Decode {
            key: key.to_string(),
            reason,
        };
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e.to_ascii_lowercase()))
            .unwrap_or_else(|| ".png".to_string());

        let image =
            Image::load_image_from_mem(&ext, bytes).map_err(|e| decode_err(e.to_string()))?;
        let texture = self
            .rl
            .load_texture_from_image(self.thread, &image)
            .map_err(|e| decode_err(e.to_string()))?;

        let info = BitmapInfo {
            width: texture.width.max(0) as u32,
            height: texture.height.max(0) as u32,
        };
        if self
            .surface
            .textures
            .insert(key.to_string(), texture)
            .is_some()
        {
            warn!("Texture '{}' replaced", key);
        }
        Ok(info)
    }
}
