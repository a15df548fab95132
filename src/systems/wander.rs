use bevy_ecs::prelude::*;
use log::debug;

use crate::components::kinematic::Kinematic;
use crate::components::mapposition::MapPosition;
use crate::components::wander::Wander;
use crate::resources::scenerng::SceneRng;

/// Give every parked wandering creature a new destination inside its area.
pub fn wander(
    mut query: Query<(Entity, &MapPosition, &mut Kinematic, &Wander)>,
    mut rng: ResMut<SceneRng>,
) {
    for (entity, position, mut kinematic, area) in query.iter_mut() {
        if !kinematic.is_at_rest(position) {
            continue;
        }
        let next = area.pick(&mut rng.0);
        debug!("{:?} wanders to ({}, {})", entity, next.x, next.y);
        kinematic.set_destination(next.x, next.y);
    }
}
