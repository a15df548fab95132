//! Scene command systems.
//!
//! - [`update_scene_commands`] advances the [`SceneCommand`] message queue.
//! - [`apply_scene_commands`] applies every queued command before anything is
//!   drawn, so changes take effect on the tick that follows them.
//!
//! Every creature enters the world through [`spawn_creature`], whether it comes
//! from a queued command or from
//! [`SceneCompositor::spawn_creature`](crate::game::SceneCompositor::spawn_creature).
//! [`creature_bundle`] resolves a [`SpawnRequest`] against the creature catalog
//! and the configured throttles.

use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::animation::Animation;
use crate::components::creature::{Creature, Player, SpawnOrder};
use crate::components::kinematic::Kinematic;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::wander::Wander;
use crate::events::scene::{SceneCommand, SpawnRequest};
use crate::resources::animationstore::AnimationStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scrollspeed::ScrollSpeed;
use crate::resources::spawncounter::SpawnCounter;

/// Components every creature carries.
#[derive(Bundle)]
pub struct CreatureBundle {
    pub creature: Creature,
    pub position: MapPosition,
    pub kinematic: Kinematic,
    pub sprite: Sprite,
    pub animation: Animation,
    pub order: SpawnOrder,
}

/// Build the components for `request`, filling unset fields from the kind's
/// defaults.
pub fn creature_bundle(
    request: &SpawnRequest,
    store: &mut AnimationStore,
    config: &GameConfig,
    order: SpawnOrder,
) -> CreatureBundle {
    let kind = request.kind;
    let state = request
        .state
        .clone()
        .unwrap_or_else(|| kind.default_state().to_string());
    let frozen = request
        .frozen_frames
        .unwrap_or_else(|| config.frozen_frames_for(kind));
    let scale = request.scale.unwrap_or_else(|| kind.default_scale());

    CreatureBundle {
        creature: Creature { kind },
        position: MapPosition::new(request.position.x, request.position.y),
        kinematic: Kinematic::new(request.destination, request.pace),
        sprite: Sprite::new(kind.tex_key(), scale, store.table(kind)),
        animation: Animation::new(state, frozen),
        order,
    }
}

/// Spawn a creature straight into `world`. Returns the live entity.
pub fn spawn_creature(world: &mut World, request: &SpawnRequest) -> Entity {
    let order = world.resource_mut::<SpawnCounter>().next();
    let bundle = world.resource_scope(|world, mut store: Mut<AnimationStore>| {
        creature_bundle(request, &mut store, world.resource::<GameConfig>(), order)
    });
    let mut entity = world.spawn(bundle);
    if request.player {
        entity.insert(Player);
    }
    if let Some((min, max)) = request.wander {
        entity.insert(Wander::new(min, max));
    }
    let id = entity.id();
    info!(
        "Spawned {:?} as {:?} at ({}, {})",
        request.kind, id, request.position.x, request.position.y
    );
    id
}

/// Advance the [`SceneCommand`] queue once per drawn tick.
pub fn update_scene_commands(mut msgs: ResMut<Messages<SceneCommand>>) {
    msgs.update();
}

/// Apply queued [`SceneCommand`]s.
///
/// Commands addressed to an entity that no longer exists or lacks the needed
/// components are logged and dropped. Spawns are deferred to the end of the
/// system and keep their queue order.
pub fn apply_scene_commands(
    mut reader: MessageReader<SceneCommand>,
    mut commands: Commands,
    mut players: Query<&mut Animation, With<Player>>,
    mut animations: Query<&mut Animation, Without<Player>>,
    mut kinematics: Query<&mut Kinematic>,
    mut speed: ResMut<ScrollSpeed>,
) {
    for cmd in reader.read() {
        match cmd {
            SceneCommand::SetPlayerState(state) => {
                for mut animation in players.iter_mut() {
                    if animation.set_state(state.name()) {
                        debug!("Player state -> {}", state);
                    }
                }
            }
            SceneCommand::SetCreatureState { entity, state } => {
                let found = match players.get_mut(*entity) {
                    Ok(mut animation) => {
                        animation.set_state(state);
                        true
                    }
                    Err(_) => match animations.get_mut(*entity) {
                        Ok(mut animation) => {
                            animation.set_state(state);
                            true
                        }
                        Err(_) => false,
                    },
                };
                if !found {
                    warn!("SetCreatureState: {:?} has no animation", entity);
                }
            }
            SceneCommand::SetScrollSpeed(requested) => {
                let applied = speed.set(*requested);
                if applied != *requested {
                    debug!("Scroll speed {} clamped to {}", requested, applied);
                }
            }
            SceneCommand::AdjustScrollSpeed(delta) => {
                let applied = speed.adjust(*delta);
                debug!("Scroll speed {:+} -> {}", delta, applied);
            }
            SceneCommand::SpawnCreature(request) => {
                let request = request.clone();
                commands.queue(move |world: &mut World| {
                    spawn_creature(world, &request);
                });
            }
            SceneCommand::SetDestination { entity, x, y } => match kinematics.get_mut(*entity) {
                Ok(mut kinematic) => kinematic.set_destination(*x, *y),
                Err(_) => warn!("SetDestination: {:?} is not a creature", entity),
            },
            SceneCommand::SetPace { entity, x, y } => match kinematics.get_mut(*entity) {
                Ok(mut kinematic) => kinematic.set_pace(*x, *y),
                Err(_) => warn!("SetPace: {:?} is not a creature", entity),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::creature::CreatureKind;

    #[test]
    fn bundle_fills_defaults_from_kind_and_config() {
        let mut store = AnimationStore::with_all_kinds();
        let config = GameConfig::new();
        let request = SpawnRequest::new(CreatureKind::Enemy3, 10.0, 20.0);
        let bundle = creature_bundle(&request, &mut store, &config, SpawnOrder(4));
        assert_eq!(bundle.animation.state(), "run");
        assert_eq!(bundle.animation.cursor.frozen_frames(), config.enemy_frozen_frames);
        assert_eq!(bundle.sprite.tex_key, "enemy3");
        assert_eq!(bundle.sprite.scale, CreatureKind::Enemy3.default_scale());
        assert_eq!(bundle.position, MapPosition::new(10.0, 20.0));
        assert!(bundle.kinematic.is_at_rest(&bundle.position));
        assert_eq!(bundle.order, SpawnOrder(4));
    }

    #[test]
    fn bundle_honours_overrides() {
        let mut store = AnimationStore::with_all_kinds();
        let request = SpawnRequest::new(CreatureKind::Dog, 0.0, 0.0)
            .with_state("sit")
            .with_scale(2.0)
            .with_frozen_frames(7)
            .heading_to(50.0, 0.0)
            .with_pace(2.0, 0.0);
        let bundle = creature_bundle(&request, &mut store, &GameConfig::new(), SpawnOrder(0));
        assert_eq!(bundle.animation.state(), "sit");
        assert_eq!(bundle.animation.cursor.frozen_frames(), 7);
        assert_eq!(bundle.sprite.scale, 2.0);
        assert!(!bundle.kinematic.is_at_rest(&bundle.position));
    }
}
