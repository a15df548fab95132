use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Roaming area of a creature.
///
/// Whenever the creature is parked at its destination the wander system picks
/// a fresh random destination inside `min..max`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Wander {
    pub min: Vector2,
    pub max: Vector2,
}

impl Wander {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self {
            min: Vector2 {
                x: min.x.min(max.x),
                y: min.y.min(max.y),
            },
            max: Vector2 {
                x: min.x.max(max.x),
                y: min.y.max(max.y),
            },
        }
    }

    pub fn pick(&self, rng: &mut fastrand::Rng) -> Vector2 {
        Vector2 {
            x: (self.min.x + rng.f32() * (self.max.x - self.min.x)).floor(),
            y: (self.min.y + rng.f32() * (self.max.y - self.min.y)).floor(),
        }
    }
}
