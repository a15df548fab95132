//! Parallax layer system.
//!
//! Scrolls every [`ScrollingLayer`] by the global [`ScrollSpeed`] and draws it
//! into the [`FrameBuffer`], farthest layer (lowest [`ZIndex`]) first. Ties
//! keep spawn order, so the result never depends on query iteration order.

use bevy_ecs::prelude::*;

use crate::components::scrollinglayer::ScrollingLayer;
use crate::components::zindex::ZIndex;
use crate::resources::animationstore::SpriteRect;
use crate::resources::framebuffer::FrameBuffer;
use crate::resources::scrollspeed::ScrollSpeed;
use crate::resources::texturestore::TextureStore;

pub fn parallax_layers(
    mut layers: Query<(Entity, &mut ScrollingLayer, &ZIndex)>,
    speed: Res<ScrollSpeed>,
    textures: Res<TextureStore>,
    mut frame: ResMut<FrameBuffer>,
) {
    let mut sorted: Vec<_> = layers.iter_mut().collect();
    sorted.sort_by_key(|(entity, _, z)| (**z, *entity));

    let global_speed = speed.get() as f32;
    for (_, mut layer, _) in sorted {
        layer.update(global_speed);
        // a failed or unknown bitmap only hides this layer
        if let Some(info) = textures.get(&layer.tex_key) {
            let source = SpriteRect::new(0.0, 0.0, info.width as f32, info.height as f32);
            layer.draw(&mut *frame, source);
        }
    }
}
