//! Commands that change the running scene.
//!
//! Anything outside the frame schedule (keyboard, CLI, tests) steers the scene
//! by writing [`SceneCommand`] messages. They are applied at the start of the
//! next drawn tick by
//! [`apply_scene_commands`](crate::systems::commands::apply_scene_commands),
//! so a change never lands halfway through a frame.

use bevy_ecs::message::Message;
use bevy_ecs::prelude::Entity;
use raylib::prelude::Vector2;

use crate::components::creature::{AnimationState, CreatureKind};

#[derive(Message, Debug, Clone, PartialEq)]
pub enum SceneCommand {
    /// Switch the player creature to a new animation state.
    SetPlayerState(AnimationState),
    /// Switch any creature to a named state. Unknown names are accepted; the
    /// creature is simply not drawn until it gets a state with data.
    SetCreatureState { entity: Entity, state: String },
    SetScrollSpeed(u32),
    /// Relative change, applied to whatever the speed is when it lands.
    AdjustScrollSpeed(i32),
    SpawnCreature(SpawnRequest),
    SetDestination { entity: Entity, x: f32, y: f32 },
    SetPace { entity: Entity, x: f32, y: f32 },
}

/// Everything needed to put a creature in the scene.
///
/// Unset optional fields fall back to the kind's defaults
/// ([`CreatureKind::default_scale`], [`CreatureKind::default_state`]) and to the
/// configured throttle for the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnRequest {
    pub kind: CreatureKind,
    pub position: Vector2,
    pub destination: Vector2,
    pub pace: Vector2,
    pub scale: Option<f32>,
    pub state: Option<String>,
    pub frozen_frames: Option<u32>,
    /// Tag the creature as the player.
    pub player: bool,
    /// Roaming area; `None` parks the creature once it arrives.
    pub wander: Option<(Vector2, Vector2)>,
}

impl SpawnRequest {
    /// A creature parked at `(x, y)`.
    pub fn new(kind: CreatureKind, x: f32, y: f32) -> Self {
        let position = Vector2 { x, y };
        Self {
            kind,
            position,
            destination: position,
            pace: Vector2 { x: 0.0, y: 0.0 },
            scale: None,
            state: None,
            frozen_frames: None,
            player: false,
            wander: None,
        }
    }

    pub fn heading_to(mut self, x: f32, y: f32) -> Self {
        self.destination = Vector2 { x, y };
        self
    }

    pub fn with_pace(mut self, x: f32, y: f32) -> Self {
        self.pace = Vector2 { x, y };
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_frozen_frames(mut self, frozen_frames: u32) -> Self {
        self.frozen_frames = Some(frozen_frames);
        self
    }

    pub fn as_player(mut self) -> Self {
        self.player = true;
        self
    }

    pub fn wandering(mut self, min: Vector2, max: Vector2) -> Self {
        self.wander = Some((min, max));
        self
    }
}
