//! Movement domain: control authority, locomotion and jumping.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySoundEvent, SoundCue};
use crate::combat::{Knockback, SetMovementEnabledEvent};
use crate::movement::{
    ControlAuthority, Facing, JumpKind, JumpState, MovementInput, MovementState, MovementTuning,
    PlatformRider, Player, VisualOrientation,
};

/// Horizontal velocity and new facing for a raw axis value.
///
/// Facing is `None` when the axis is neutral so the previous facing sticks.
pub fn horizontal_velocity(axis: f32, move_speed: f32) -> (f32, Option<Facing>) {
    if axis > 0.0 {
        (move_speed, Some(Facing::Right))
    } else if axis < 0.0 {
        (-move_speed, Some(Facing::Left))
    } else {
        (0.0, None)
    }
}

/// Speed for the next tick given the sprint key state.
///
/// Releasing sprint always lands on the walk baseline, whatever the speed
/// was before.
pub fn next_move_speed(
    current: f32,
    sprint_held: bool,
    sprint_released: bool,
    tuning: &MovementTuning,
) -> f32 {
    if sprint_held {
        tuning.sprint_speed
    } else if sprint_released {
        tuning.walk_speed
    } else {
        current
    }
}

pub(crate) fn handle_movement_toggles(
    mut events: MessageReader<SetMovementEnabledEvent>,
    mut query: Query<&mut MovementState>,
) {
    for event in events.read() {
        if let Ok(mut state) = query.get_mut(event.target) {
            if state.movement_enabled != event.enabled {
                info!(
                    "Movement {} for {:?}",
                    if event.enabled { "enabled" } else { "disabled" },
                    event.target
                );
            }
            state.movement_enabled = event.enabled;
        }
    }
}

pub(crate) fn resolve_control_authority(
    mut query: Query<(&MovementState, &Knockback, &mut ControlAuthority), With<Player>>,
) {
    for (state, knockback, mut authority) in &mut query {
        let next = ControlAuthority::resolve(state.movement_enabled, knockback.is_active());
        if *authority != next {
            debug!("Control authority {:?} -> {:?}", *authority, next);
            *authority = next;
        }
    }
}

/// Keeps the character on the z = 0 plane while it is controllable.
pub(crate) fn pin_depth(mut query: Query<(&ControlAuthority, &mut Transform), With<Player>>) {
    for (authority, mut transform) in &mut query {
        if *authority != ControlAuthority::Locked && transform.translation.z != 0.0 {
            transform.translation.z = 0.0;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &ControlAuthority,
            &mut MovementState,
            &PlatformRider,
            &mut VisualOrientation,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (authority, mut state, rider, mut orientation, mut velocity) in &mut query {
        if !authority.is_player() {
            continue;
        }

        let (vx, facing) = horizontal_velocity(input.axis_raw.x, state.move_speed);
        velocity.x = vx;

        if let Some(facing) = facing {
            state.facing = facing;
            *orientation = VisualOrientation {
                facing_sign: facing.sign(),
                compensate_parent_scale: rider.platform_moving,
            };
        }

        // Evaluated after the velocity write, so a sprint change lands next tick
        state.move_speed = next_move_speed(
            state.move_speed,
            input.sprint_held,
            input.sprint_released,
            &tuning,
        );
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut query: Query<
        (
            &ControlAuthority,
            &MovementState,
            &mut JumpState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (authority, state, mut jump, mut velocity) in &mut query {
        if !authority.is_player() {
            continue;
        }

        if let Some(kind) = jump.try_jump(input.jump_just_pressed, state.on_ground) {
            velocity.y = tuning.jump_speed;
            sounds.write(PlaySoundEvent {
                cue: SoundCue::Jump,
            });
            match kind {
                JumpKind::Ground => debug!("Ground jump: jump_count={}", jump.jump_count),
                JumpKind::Air => debug!("Double jump consumed"),
            }
        }
    }
}

/// Secondary positional contribution on the fixed clock.
///
/// Ignores the movement lock and control authority. The vertical axis lands
/// on z and is flattened again by `pin_depth` while control is unlocked.
pub(crate) fn apply_fixed_translation(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut query: Query<(&MovementState, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut transform) in &mut query {
        let step = state.move_speed * dt;
        let offset = Vec3::new(input.axis.x * step, 0.0, input.axis.y * step);
        if offset != Vec3::ZERO {
            transform.translation += offset;
        }
    }
}
