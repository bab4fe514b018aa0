//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{MovementInput, MovementTuning, smooth_axis};

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Vertical axis (only feeds the fixed-step translation)
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    let dt = time.delta_secs();
    let raw = Vec2::new(x, y);
    input.axis = Vec2::new(
        smooth_axis(input.axis.x, raw.x, tuning.axis_sensitivity, dt),
        smooth_axis(input.axis.y, raw.y, tuning.axis_sensitivity, dt),
    );
    input.axis_raw = raw;

    input.sprint_held = keyboard.pressed(KeyCode::ShiftLeft);
    input.sprint_released = keyboard.just_released(KeyCode::ShiftLeft);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
}
