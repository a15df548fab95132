use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::components::animation::Animation;
use crate::components::mapposition::MapPosition;
use crate::resources::animationstore::{AnimationTable, SpriteRect};
use crate::resources::framebuffer::Blitter;

/// Sprite-sheet drawing data of a creature.
///
/// `table` is shared by every creature of the same kind. `scale` divides the
/// frame size on screen, so a large sheet can be shown small without
/// resampling the bitmap.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub scale: f32,
    pub table: Arc<AnimationTable>,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, scale: f32, table: Arc<AnimationTable>) -> Self {
        Self {
            tex_key: tex_key.into(),
            scale: if scale > 0.0 { scale } else { 1.0 },
            table,
        }
    }

    /// Source rectangle of the current frame, or `None` if the active state
    /// has no animation data.
    pub fn current_rect(&self, animation: &Animation) -> Option<SpriteRect> {
        self.table
            .rect_for(animation.state(), animation.cursor.current_frame())
    }

    /// Screen rectangle for a frame drawn at `position`.
    pub fn dest_rect(&self, position: &MapPosition, src: &SpriteRect) -> SpriteRect {
        SpriteRect::new(
            position.pos.x,
            position.pos.y,
            src.width / self.scale,
            src.height / self.scale,
        )
    }

    /// Blit the current frame. Returns `false` when there was nothing to draw.
    pub fn draw(
        &self,
        blit: &mut impl Blitter,
        position: &MapPosition,
        animation: &Animation,
    ) -> bool {
        let Some(src) = self.current_rect(animation) else {
            return false;
        };
        let dst = self.dest_rect(position, &src);
        blit.blit(&self.tex_key, src, dst);
        true
    }
}
