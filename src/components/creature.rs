//! Creature identity components and the static creature catalog.
//!
//! A [`CreatureKind`] bundles everything that is fixed per creature type: its
//! sprite-sheet phase table, the bitmap it is drawn from, the default display
//! scale and the state it starts in.

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Component;

use crate::resources::animationstore::AnimationPhase;

const DOG_PHASES: &[AnimationPhase] = &[
    AnimationPhase::new("idle", 7, 575, 523),
    AnimationPhase::new("jump", 7, 575, 523),
    AnimationPhase::new("fall", 7, 575, 523),
    AnimationPhase::new("run", 9, 575, 523),
    AnimationPhase::new("dizzy", 11, 575, 523),
    AnimationPhase::new("sit", 5, 575, 523),
    AnimationPhase::new("roll", 7, 575, 523),
    AnimationPhase::new("bite", 7, 575, 523),
    AnimationPhase::new("ko", 12, 575, 523),
    AnimationPhase::new("hit", 4, 575, 523),
];

const ENEMY1_PHASES: &[AnimationPhase] = &[AnimationPhase::new("run", 6, 293, 155)];
const ENEMY2_PHASES: &[AnimationPhase] = &[AnimationPhase::new("run", 6, 266, 188)];
const ENEMY3_PHASES: &[AnimationPhase] = &[AnimationPhase::new("run", 6, 218, 177)];
const ENEMY4_PHASES: &[AnimationPhase] = &[AnimationPhase::new("run", 9, 213, 212)];

/// Creature type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CreatureKind {
    Dog,
    Enemy1,
    Enemy2,
    Enemy3,
    Enemy4,
}

impl CreatureKind {
    pub const ALL: [CreatureKind; 5] = [
        CreatureKind::Dog,
        CreatureKind::Enemy1,
        CreatureKind::Enemy2,
        CreatureKind::Enemy3,
        CreatureKind::Enemy4,
    ];

    pub const ENEMIES: [CreatureKind; 4] = [
        CreatureKind::Enemy1,
        CreatureKind::Enemy2,
        CreatureKind::Enemy3,
        CreatureKind::Enemy4,
    ];

    /// Sheet rows in order.
    pub fn phases(self) -> &'static [AnimationPhase] {
        match self {
            CreatureKind::Dog => DOG_PHASES,
            CreatureKind::Enemy1 => ENEMY1_PHASES,
            CreatureKind::Enemy2 => ENEMY2_PHASES,
            CreatureKind::Enemy3 => ENEMY3_PHASES,
            CreatureKind::Enemy4 => ENEMY4_PHASES,
        }
    }

    /// Key of the bitmap in the [`TextureStore`](crate::resources::texturestore::TextureStore).
    pub fn tex_key(self) -> &'static str {
        match self {
            CreatureKind::Dog => "shadow_dog",
            CreatureKind::Enemy1 => "enemy1",
            CreatureKind::Enemy2 => "enemy2",
            CreatureKind::Enemy3 => "enemy3",
            CreatureKind::Enemy4 => "enemy4",
        }
    }

    pub fn image_file(self) -> &'static str {
        match self {
            CreatureKind::Dog => "shadow_dog.png",
            CreatureKind::Enemy1 => "enemy1.png",
            CreatureKind::Enemy2 => "enemy2.png",
            CreatureKind::Enemy3 => "enemy3.png",
            CreatureKind::Enemy4 => "enemy4.png",
        }
    }

    /// Display-size divisor applied to every frame.
    pub fn default_scale(self) -> f32 {
        match self {
            CreatureKind::Dog => 3.0,
            _ => 2.5,
        }
    }

    pub fn default_state(self) -> &'static str {
        match self {
            CreatureKind::Dog => AnimationState::Idle.name(),
            _ => AnimationState::Run.name(),
        }
    }

    pub fn is_enemy(self) -> bool {
        self != CreatureKind::Dog
    }
}

/// States offered by the player state selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AnimationState {
    Idle,
    Jump,
    Fall,
    Run,
    Dizzy,
    Sit,
    Roll,
    Bite,
    Ko,
    Hit,
}

impl AnimationState {
    pub const ALL: [AnimationState; 10] = [
        AnimationState::Idle,
        AnimationState::Jump,
        AnimationState::Fall,
        AnimationState::Run,
        AnimationState::Dizzy,
        AnimationState::Sit,
        AnimationState::Roll,
        AnimationState::Bite,
        AnimationState::Ko,
        AnimationState::Hit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Jump => "jump",
            AnimationState::Fall => "fall",
            AnimationState::Run => "run",
            AnimationState::Dizzy => "dizzy",
            AnimationState::Sit => "sit",
            AnimationState::Roll => "roll",
            AnimationState::Bite => "bite",
            AnimationState::Ko => "ko",
            AnimationState::Hit => "hit",
        }
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnimationState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationState::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| format!("Unknown animation state '{}'", s))
    }
}

/// Tags an entity as a creature of the given kind.
#[derive(Component, Debug, Clone, Copy)]
pub struct Creature {
    pub kind: CreatureKind,
}

/// Marker for the creature driven by the state selector.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Insertion order of a creature; creatures are drawn in ascending order.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SpawnOrder(pub u64);
