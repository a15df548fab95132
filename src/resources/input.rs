//! Per-frame keyboard state for the scene controls.
//!
//! Captures the keys the scene reacts to and exposes them to the input system
//! via the [`InputState`] resource. Digits `1`..`0` select the ten player
//! states in [`AnimationState::ALL`] order, the vertical arrows change the
//! scroll speed and space spawns an enemy.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::components::creature::AnimationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }

    /// Feed the raw key state for this frame.
    pub fn update(&mut self, down: bool, pressed: bool) {
        self.active = down;
        self.just_pressed = pressed;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Keyboard state relevant to the scene.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// One key per entry of [`AnimationState::ALL`].
    pub select_state: [BoolState; 10],
    pub speed_up: BoolState,
    pub speed_down: BoolState,
    pub spawn_enemy: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            select_state: [
                BoolState::bound_to(KeyboardKey::KEY_ONE),
                BoolState::bound_to(KeyboardKey::KEY_TWO),
                BoolState::bound_to(KeyboardKey::KEY_THREE),
                BoolState::bound_to(KeyboardKey::KEY_FOUR),
                BoolState::bound_to(KeyboardKey::KEY_FIVE),
                BoolState::bound_to(KeyboardKey::KEY_SIX),
                BoolState::bound_to(KeyboardKey::KEY_SEVEN),
                BoolState::bound_to(KeyboardKey::KEY_EIGHT),
                BoolState::bound_to(KeyboardKey::KEY_NINE),
                BoolState::bound_to(KeyboardKey::KEY_ZERO),
            ],
            speed_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            speed_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            spawn_enemy: BoolState::bound_to(KeyboardKey::KEY_SPACE),
        }
    }
}

impl InputState {
    /// State whose key was pressed this frame. The lowest digit wins when
    /// several are pressed together.
    pub fn selected_state(&self) -> Option<AnimationState> {
        self.select_state
            .iter()
            .position(|key| key.just_pressed)
            .map(|i| AnimationState::ALL[i])
    }
}
