//! Depth order of parallax layers.
//!
//! Layers are composited back-to-front: the lowest [`ZIndex`] (the farthest,
//! slowest strip) is drawn first and every later layer paints over it.

use bevy_ecs::prelude::Component;

/// Draw order of a layer. Lower values are farther away and drawn first.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
