//! Frame composition.
//!
//! [`clear_frame`] opens a new display list with a full clear.
//! [`render_creatures`] draws every creature after the parallax layers, in
//! spawn order. A creature is skipped when its bitmap is not ready or its
//! active state has no animation data.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::creature::SpawnOrder;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::framebuffer::FrameBuffer;
use crate::resources::texturestore::TextureStore;

pub fn clear_frame(mut frame: ResMut<FrameBuffer>) {
    frame.begin_frame();
}

pub fn render_creatures(
    query: Query<(&Sprite, &MapPosition, &Animation, &SpawnOrder)>,
    textures: Res<TextureStore>,
    mut frame: ResMut<FrameBuffer>,
) {
    let mut to_draw: Vec<_> = query
        .iter()
        .filter(|(sprite, ..)| textures.is_ready(&sprite.tex_key))
        .collect();
    to_draw.sort_by_key(|(.., order)| **order);

    for (sprite, position, animation, _) in to_draw {
        sprite.draw(&mut *frame, position, animation);
    }
}
