use bevy_ecs::prelude::Resource;

use crate::components::creature::SpawnOrder;

/// Hands out increasing [`SpawnOrder`] values so creatures draw in the order
/// they were added to the scene.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct SpawnCounter(u64);

impl SpawnCounter {
    pub fn next(&mut self) -> SpawnOrder {
        let order = SpawnOrder(self.0);
        self.0 += 1;
        order
    }
}
