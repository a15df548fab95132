//! Frame buffer resource and the drawing primitive it exposes.
//!
//! The scene never talks to a graphics API directly. Layers and creatures draw
//! through the [`Blitter`] trait; the [`FrameBuffer`] implementation records a
//! display list for the current tick which the windowed front-end replays
//! (see [`crate::surface`]). Tests inspect the recorded list instead.

use bevy_ecs::prelude::Resource;

use crate::resources::animationstore::SpriteRect;

/// Opaque drawing surface: copy a region of a bitmap, or clear a region.
pub trait Blitter {
    /// Clear `area` of the frame to the background.
    fn clear(&mut self, area: SpriteRect);

    /// Copy `src` of the bitmap stored under `tex_key` into `dst`, scaling as
    /// needed.
    fn blit(&mut self, tex_key: &str, src: SpriteRect, dst: SpriteRect);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear(SpriteRect),
    Blit {
        tex_key: String,
        src: SpriteRect,
        dst: SpriteRect,
    },
}

/// Fixed-size frame buffer holding the display list of the last drawn tick.
#[derive(Resource, Debug, Clone)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    commands: Vec<DrawCmd>,
    frames_drawn: u64,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames_drawn: 0,
        }
    }

    pub fn bounds(&self) -> SpriteRect {
        SpriteRect::new(0.0, 0.0, self.width as f32, self.height as f32)
    }

    /// Start a new frame: drop the previous list and clear the whole buffer.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames_drawn += 1;
        let bounds = self.bounds();
        self.clear(bounds);
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Recorded blits in draw order, as `(tex_key, src, dst)`.
    pub fn blits(&self) -> impl Iterator<Item = (&str, &SpriteRect, &SpriteRect)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCmd::Blit { tex_key, src, dst } => Some((tex_key.as_str(), src, dst)),
            DrawCmd::Clear(_) => None,
        })
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Blitter for FrameBuffer {
    fn clear(&mut self, area: SpriteRect) {
        self.commands.push(DrawCmd::Clear(area));
    }

    fn blit(&mut self, tex_key: &str, src: SpriteRect, dst: SpriteRect) {
        self.commands.push(DrawCmd::Blit {
            tex_key: tex_key.to_string(),
            src,
            dst,
        });
    }
}
