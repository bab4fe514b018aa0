//! Movement domain: player bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackState, CombatTuning, CooldownGauge, HitRegion, Knockback};
use crate::level::{PLAYER_SPAWN, RespawnPoint};
use crate::movement::{
    ControlAuthority, GameLayer, GroundProbe, JumpState, MovementState, MovementTuning,
    PlatformRider, Player, VisualOrientation,
};
use crate::sprites::{AnimationController, AnimatorParams, PlayerVisual};

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    combat_tuning: Res<CombatTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let body = tuning.body_size;

    let player = commands
        .spawn((
            // Identity & Movement
            (
                Player,
                MovementState::new(tuning.walk_speed),
                ControlAuthority::default(),
                JumpState::default(),
                GroundProbe {
                    offset: tuning.ground_probe_offset,
                    radius: tuning.ground_probe_radius,
                },
                PlatformRider::default(),
                VisualOrientation::default(),
                RespawnPoint(PLAYER_SPAWN),
            ),
            // Combat
            (
                Knockback::default(),
                CooldownGauge::new(combat_tuning.cooldown_min, combat_tuning.cooldown_max),
                AttackState::default(),
            ),
            // Presentation
            (AnimatorParams::default(), AnimationController::default()),
            Transform::from_translation(PLAYER_SPAWN),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(body.x, body.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .id();

    let region_size = combat_tuning.hit_region_size;
    commands.entity(player).with_children(|parent| {
        parent.spawn((
            PlayerVisual,
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(body),
                ..default()
            },
            Transform::default(),
        ));

        // Starts closed; the attack sequencer opens it
        parent.spawn((
            HitRegion {
                owner: player,
                offset: combat_tuning.hit_region_offset,
            },
            Transform::from_xyz(combat_tuning.hit_region_offset, 0.0, 0.0),
            Collider::rectangle(region_size.x, region_size.y),
            Sensor,
            ColliderDisabled,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Breakable]),
        ));
    });

    info!(
        "Spawning player at {:?}: walk={}, sprint={}, jump={}, cooldown={}..={}",
        PLAYER_SPAWN,
        tuning.walk_speed,
        tuning.sprint_speed,
        tuning.jump_speed,
        combat_tuning.cooldown_min,
        combat_tuning.cooldown_max
    );
}
