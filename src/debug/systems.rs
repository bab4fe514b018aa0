//! Debug domain: hotkeys, gizmos and the controller readout.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{
    ApplyKnockbackEvent, AttackState, CombatTuning, CooldownGauge, HitRegion, Knockback,
    SetMovementEnabledEvent,
};
use crate::debug::state::{DebugInfoOverlay, DebugState};
use crate::movement::{
    ControlAuthority, GroundProbe, JumpState, MovementState, Player, probe_point,
};

/// F1 gizmos, F2 movement lock, F3 knockback, F4 readout
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    player_query: Query<(Entity, &MovementState), With<Player>>,
    mut movement_toggles: MessageWriter<SetMovementEnabledEvent>,
    mut knockbacks: MessageWriter<ApplyKnockbackEvent>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_gizmos = !debug_state.show_gizmos;
        info!("[DEBUG] Gizmos {}", if debug_state.show_gizmos { "ON" } else { "OFF" });
    }

    if keyboard.just_pressed(KeyCode::F4) {
        debug_state.show_info = !debug_state.show_info;
    }

    let Some((player, state)) = player_query.iter().next() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F2) {
        info!(
            "[DEBUG] Movement {}",
            if state.movement_enabled { "locked" } else { "unlocked" }
        );
        movement_toggles.write(SetMovementEnabledEvent {
            target: player,
            enabled: !state.movement_enabled,
        });
    }

    if keyboard.just_pressed(KeyCode::F3) {
        info!("[DEBUG] Knockback applied");
        knockbacks.write(ApplyKnockbackEvent { target: player });
    }
}

pub(crate) fn draw_debug_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<CombatTuning>,
    player_query: Query<(&Transform, &GroundProbe, &MovementState), With<Player>>,
    region_query: Query<(&GlobalTransform, Has<ColliderDisabled>), With<HitRegion>>,
) {
    for (transform, probe, state) in &player_query {
        let color = if state.on_ground {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.3, 0.2)
        };
        gizmos.circle_2d(
            probe_point(transform.translation, probe),
            probe.radius,
            color,
        );
    }

    for (transform, disabled) in &region_query {
        let color = if disabled {
            Color::srgba(0.6, 0.6, 0.6, 0.4)
        } else {
            Color::srgb(1.0, 0.8, 0.2)
        };
        gizmos.rect_2d(
            transform.translation().truncate(),
            tuning.hit_region_size,
            color,
        );
    }
}

pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<
        (
            &Transform,
            &LinearVelocity,
            &ControlAuthority,
            &JumpState,
            &Knockback,
            &AttackState,
            &CooldownGauge,
        ),
        With<Player>,
    >,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        // Cleanup overlay if it exists
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    // Ensure overlay exists
    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((transform, velocity, authority, jump, knockback, attack, gauge)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = transform.translation;
        **text = format!(
            "Pos: ({:.0}, {:.0})\nVel: ({:.0}, {:.0})\nAuthority: {:?}\nJumps: {} (double used: {})\nKnockback: {:.2}s\nAttack: {} ({} in flight)\nCooldown: {}/{} ({:.0}%)",
            pos.x,
            pos.y,
            velocity.x,
            velocity.y,
            authority,
            jump.jump_count,
            jump.double_jump_consumed,
            knockback.remaining.max(0.0),
            attack.active,
            attack.in_flight(),
            gauge.current,
            gauge.max,
            gauge.percent() * 100.0
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(16.0),
            top: Val::Px(16.0),
            ..default()
        },
        ZIndex(150),
    ));
}
