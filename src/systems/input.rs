//! Input systems.
//!
//! - [`update_input_state`] reads the keyboard from Raylib each frame and
//!   writes the results into [`InputState`].
//! - [`apply_controls`] turns fresh key presses into scene changes on a
//!   [`SceneCompositor`].
//!
//! Both run in the window loop, outside the frame schedule, so keys pressed on
//! frames that draw nothing are still picked up.
use log::info;
use raylib::RaylibHandle;

use crate::events::scene::SceneCommand;
use crate::game::SceneCompositor;
use crate::resources::input::{BoolState, InputState};

/// Poll Raylib for keyboard input and update `input`.
pub fn update_input_state(input: &mut InputState, rl: &RaylibHandle) {
    let poll = |key: &mut BoolState| {
        key.update(
            rl.is_key_down(key.key_binding),
            rl.is_key_pressed(key.key_binding),
        );
    };
    for key in input.select_state.iter_mut() {
        poll(key);
    }
    poll(&mut input.speed_up);
    poll(&mut input.speed_down);
    poll(&mut input.spawn_enemy);
}

/// React to keys pressed this frame.
pub fn apply_controls(scene: &mut SceneCompositor, input: &InputState) {
    if let Some(state) = input.selected_state() {
        info!("Selected player state '{}'", state);
        scene.select_state(state);
    }

    if input.speed_up.just_pressed {
        scene.adjust_scroll_speed(1);
    }
    if input.speed_down.just_pressed {
        scene.adjust_scroll_speed(-1);
    }

    if input.spawn_enemy.just_pressed {
        let request = scene.random_enemy_request();
        scene.send(SceneCommand::SpawnCreature(request));
    }
}
