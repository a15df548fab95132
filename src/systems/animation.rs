//! Animation system.
//!
//! [`advance_animations`] ticks each creature's
//! [`AnimationCursor`](crate::components::animation::AnimationCursor) against
//! the length of its active sequence in the shared
//! [`AnimationTable`](crate::resources::animationstore::AnimationTable). It
//! runs after the creatures are drawn: a freshly reset cursor always shows
//! frame 0 once. A state without data leaves the cursor untouched.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::{Animation, CursorStep};
use crate::components::sprite::Sprite;

pub fn advance_animations(mut query: Query<(Entity, &mut Animation, &Sprite)>) {
    for (entity, mut animation, sprite) in query.iter_mut() {
        let len = sprite.table.frame_count(animation.state());
        if animation.cursor.advance(len) == CursorStep::NoData {
            debug!(
                "{:?}: no animation data for state '{}'",
                entity,
                animation.state()
            );
        }
    }
}
