//! Horizontally repeating parallax strip.
//!
//! Two copies of the same bitmap are tracked at `x` and `x2`. Both scroll left
//! by `floor(global_speed * speed_ratio)` pixels per update; when a copy has
//! fully left the screen it is placed again right behind the other one. As long
//! as the strip is at least as wide as the viewport the pair covers it with no
//! gap.

use bevy_ecs::prelude::Component;

use crate::resources::animationstore::SpriteRect;
use crate::resources::framebuffer::Blitter;

#[derive(Component, Clone, Debug, PartialEq)]
pub struct ScrollingLayer {
    pub tex_key: String,
    pub x: f32,
    pub x2: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Parallax factor: 0 is static, 1 scrolls at full scene speed.
    pub speed_ratio: f32,
}

impl ScrollingLayer {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32, speed_ratio: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            x: 0.0,
            x2: width,
            y: 0.0,
            width,
            height,
            speed_ratio,
        }
    }

    /// Pixels scrolled per update at `global_speed`.
    pub fn offset(&self, global_speed: f32) -> f32 {
        (global_speed * self.speed_ratio).floor()
    }

    /// Scroll one tick. Positions are floored to whole pixels.
    pub fn update(&mut self, global_speed: f32) -> &mut Self {
        let offset = self.offset(global_speed);

        if self.x <= -self.width {
            self.x = self.x2 + self.width - offset;
        } else {
            self.x -= offset;
        }

        if self.x2 <= -self.width {
            self.x2 = self.x + self.width - offset;
        } else {
            self.x2 -= offset;
        }

        self.x = self.x.floor();
        self.x2 = self.x2.floor();
        self
    }

    /// Blit both copies of the strip. `source` is the region of the bitmap to
    /// stretch over each copy, normally the whole bitmap.
    pub fn draw(&self, blit: &mut impl Blitter, source: SpriteRect) {
        blit.blit(
            &self.tex_key,
            source,
            SpriteRect::new(self.x, self.y, self.width, self.height),
        );
        blit.blit(
            &self.tex_key,
            source,
            SpriteRect::new(self.x2, self.y, self.width, self.height),
        );
    }
}
