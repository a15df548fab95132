//! Global scroll speed.
//!
//! Pixels scrolled per tick by a layer with parallax ratio 1. Every layer reads
//! this value on update, so a change is seen by all layers on the next drawn
//! tick.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollSpeed {
    speed: u32,
    max: u32,
}

impl ScrollSpeed {
    pub fn new(speed: u32, max: u32) -> Self {
        Self {
            speed: speed.min(max),
            max,
        }
    }

    pub fn get(&self) -> u32 {
        self.speed
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Set the speed, clamped to `0..=max`. Returns the applied value.
    pub fn set(&mut self, speed: u32) -> u32 {
        self.speed = speed.min(self.max);
        self.speed
    }

    /// Move the speed by `delta`, clamped like [`set`](Self::set).
    pub fn adjust(&mut self, delta: i32) -> u32 {
        self.set(self.speed.saturating_add_signed(delta))
    }
}

impl Default for ScrollSpeed {
    fn default() -> Self {
        Self::new(5, 40)
    }
}
