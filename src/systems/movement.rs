use bevy_ecs::prelude::*;

use crate::components::kinematic::Kinematic;
use crate::components::mapposition::MapPosition;

/// Step every creature one tick toward its destination.
pub fn kinematic_movement(mut query: Query<(&mut MapPosition, &Kinematic)>) {
    for (mut position, kinematic) in query.iter_mut() {
        if kinematic.is_at_rest(&position) {
            continue;
        }
        kinematic.update_position(&mut position);
    }
}
