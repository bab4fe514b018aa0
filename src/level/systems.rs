//! Level domain: region triggers, respawn, moving platforms and attack targets.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySoundEvent, SoundCue};
use crate::combat::{ApplyKnockbackEvent, HitRegion, RestoreCooldownEvent, SetMovementEnabledEvent};
use crate::core::contact_pair;
use crate::level::components::{
    Breakable, Hazard, PlatformPath, Region, RegionEffect, RespawnPoint,
};
use crate::level::events::RespawnRequestedEvent;
use crate::level::resources::{DialogueFlags, LevelManager};
use crate::movement::{PlatformRider, Player};

pub(crate) fn handle_region_triggers(
    mut collision_start_events: MessageReader<CollisionStart>,
    region_query: Query<(&Region, &GlobalTransform)>,
    mut player_query: Query<&mut RespawnPoint, With<Player>>,
    mut respawn_requests: MessageWriter<RespawnRequestedEvent>,
    mut flags: ResMut<DialogueFlags>,
) {
    for event in collision_start_events.read() {
        let Some((player, other)) =
            contact_pair(event.collider1, event.collider2, |e| player_query.contains(e))
        else {
            continue;
        };
        let Ok((region, transform)) = region_query.get(other) else {
            continue;
        };

        match region.on_enter(transform.translation()) {
            Some(RegionEffect::Respawn) => {
                respawn_requests.write(RespawnRequestedEvent { entity: player });
            }
            Some(RegionEffect::SetCheckpoint(position)) => {
                if let Ok(mut respawn) = player_query.get_mut(player) {
                    if respawn.0 != position {
                        info!("Checkpoint reached at {:?}", position);
                    }
                    respawn.0 = position;
                }
            }
            Some(RegionEffect::EnterFinalArea) => {
                if !flags.in_final_area {
                    info!("Entered the throne room");
                }
                flags.in_final_area = true;
            }
            None => {}
        }
    }
}

/// Ends the level once the dialogue layer reports the final area.
pub(crate) fn complete_level_on_throne(
    flags: Res<DialogueFlags>,
    mut level: ResMut<LevelManager>,
    player_query: Query<Entity, With<Player>>,
    mut movement_toggles: MessageWriter<SetMovementEnabledEvent>,
) {
    if !flags.in_final_area || level.level_complete {
        return;
    }

    level.level_complete = true;
    info!("Level complete");
    for player in &player_query {
        movement_toggles.write(SetMovementEnabledEvent {
            target: player,
            enabled: false,
        });
    }
}

pub(crate) fn handle_respawn_requests(
    mut requests: MessageReader<RespawnRequestedEvent>,
    mut level: ResMut<LevelManager>,
    mut query: Query<(
        &RespawnPoint,
        &mut Transform,
        &mut LinearVelocity,
        Option<&mut PlatformRider>,
    )>,
) {
    for request in requests.read() {
        let Ok((respawn, mut transform, mut velocity, rider)) = query.get_mut(request.entity)
        else {
            warn!("Respawn requested for {:?} without a respawn point", request.entity);
            continue;
        };

        transform.translation = respawn.0;
        velocity.0 = Vec2::ZERO;
        if let Some(mut rider) = rider {
            rider.detach();
        }
        level.respawn_count += 1;
        info!(
            "Respawned {:?} at {:?} (respawn #{})",
            request.entity, respawn.0, level.respawn_count
        );
    }
}

pub(crate) fn drive_moving_platforms(
    mut query: Query<(&mut PlatformPath, &Transform, &mut LinearVelocity)>,
) {
    for (mut path, transform, mut velocity) in &mut query {
        velocity.0 = path.velocity_at(transform.translation.truncate());
    }
}

pub(crate) fn apply_hazard_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    hazard_query: Query<(), With<Hazard>>,
    player_query: Query<(), With<Player>>,
    mut knockbacks: MessageWriter<ApplyKnockbackEvent>,
    mut sounds: MessageWriter<PlaySoundEvent>,
) {
    for event in collision_start_events.read() {
        let Some((player, other)) =
            contact_pair(event.collider1, event.collider2, |e| player_query.contains(e))
        else {
            continue;
        };
        if !hazard_query.contains(other) {
            continue;
        }

        knockbacks.write(ApplyKnockbackEvent { target: player });
        sounds.write(PlaySoundEvent {
            cue: SoundCue::Hurt,
        });
    }
}

pub(crate) fn break_on_hit(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    region_query: Query<&HitRegion>,
    breakable_query: Query<&Breakable>,
    mut restores: MessageWriter<RestoreCooldownEvent>,
) {
    for event in collision_start_events.read() {
        let Some((region_entity, other)) =
            contact_pair(event.collider1, event.collider2, |e| region_query.contains(e))
        else {
            continue;
        };
        let (Ok(region), Ok(breakable)) =
            (region_query.get(region_entity), breakable_query.get(other))
        else {
            continue;
        };

        debug!("Breakable {:?} destroyed by {:?}", other, region.owner);
        restores.write(RestoreCooldownEvent {
            target: region.owner,
            amount: breakable.restores,
        });
        commands.entity(other).despawn();
    }
}
