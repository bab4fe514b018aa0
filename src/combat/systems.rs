//! Combat domain: knockback override, cooldown gauge and attack sequencing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::audio::{PlaySoundEvent, SoundCue};
use crate::combat::components::{AttackState, CooldownGauge, GaugeChange, HitRegion, Knockback};
use crate::combat::events::{
    ApplyKnockbackEvent, ConsumeCooldownEvent, CooldownChanged, CooldownMaxChanged,
    RestoreCooldownEvent,
};
use crate::combat::resources::{CombatInput, CombatTuning};
use crate::movement::{ControlAuthority, MovementState, Player};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack_just_pressed =
        keyboard.just_pressed(KeyCode::KeyL) || keyboard.just_pressed(KeyCode::KeyJ);
}

/// Forward a gauge mutation to the display widget and the sound player.
fn report_gauge_change(
    entity: Entity,
    change: GaugeChange,
    displayed: &mut MessageWriter<CooldownChanged>,
    sounds: &mut MessageWriter<PlaySoundEvent>,
) {
    match change {
        GaugeChange::Consumed { current } => {
            displayed.write(CooldownChanged { entity, current });
            sounds.write(PlaySoundEvent {
                cue: SoundCue::Skill,
            });
        }
        GaugeChange::Restored { current } => {
            displayed.write(CooldownChanged { entity, current });
        }
        GaugeChange::Unchanged => {}
    }
}

pub(crate) fn announce_cooldown_gauges(
    query: Query<(Entity, &CooldownGauge), Added<CooldownGauge>>,
    mut max_changed: MessageWriter<CooldownMaxChanged>,
    mut displayed: MessageWriter<CooldownChanged>,
) {
    for (entity, gauge) in &query {
        max_changed.write(CooldownMaxChanged {
            entity,
            min: gauge.min,
            max: gauge.max,
        });
        displayed.write(CooldownChanged {
            entity,
            current: gauge.current,
        });
    }
}

pub(crate) fn handle_knockback_requests(
    mut events: MessageReader<ApplyKnockbackEvent>,
    tuning: Res<CombatTuning>,
    mut query: Query<&mut Knockback>,
) {
    for event in events.read() {
        let Ok(mut knockback) = query.get_mut(event.target) else {
            warn!("Knockback requested for {:?} without a Knockback component", event.target);
            continue;
        };
        // Retriggering restarts the clock
        knockback.apply(tuning.knockback_duration);
        debug!(
            "Knockback applied to {:?} for {:.2}s",
            event.target, tuning.knockback_duration
        );
    }
}

pub(crate) fn handle_cooldown_requests(
    mut consume_events: MessageReader<ConsumeCooldownEvent>,
    mut restore_events: MessageReader<RestoreCooldownEvent>,
    mut displayed: MessageWriter<CooldownChanged>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut query: Query<&mut CooldownGauge>,
) {
    for event in consume_events.read() {
        if let Ok(mut gauge) = query.get_mut(event.target) {
            let change = gauge.consume(event.amount);
            report_gauge_change(event.target, change, &mut displayed, &mut sounds);
        }
    }

    for event in restore_events.read() {
        if let Ok(mut gauge) = query.get_mut(event.target) {
            let change = gauge.restore(event.amount);
            report_gauge_change(event.target, change, &mut displayed, &mut sounds);
        }
    }
}

/// While knockback owns the tick it forces velocity and nothing else acts.
pub(crate) fn apply_knockback_override(
    time: Res<Time>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (
            &ControlAuthority,
            &MovementState,
            &mut Knockback,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (authority, state, mut knockback, mut velocity) in &mut query {
        if *authority != ControlAuthority::Knockback {
            continue;
        }
        velocity.0 = knockback.tick(dt, state.facing, tuning.knockback_force);
        if !knockback.is_active() {
            debug!("Knockback expired, control returns next tick");
        }
    }
}

/// Attack timers keep running through knockback; disabling movement
/// closes every in-flight attack.
pub(crate) fn tick_attack_timers(
    time: Res<Time>,
    mut query: Query<(&ControlAuthority, &mut AttackState)>,
) {
    let dt = time.delta_secs();

    for (authority, mut attack) in &mut query {
        if *authority == ControlAuthority::Locked {
            if attack.force_close() {
                debug!("Attack force-closed: movement disabled");
            }
            continue;
        }
        if attack.tick(dt) {
            debug!("Attack window closed");
        }
    }
}

pub(crate) fn trigger_attacks(
    input: Res<CombatInput>,
    tuning: Res<CombatTuning>,
    mut displayed: MessageWriter<CooldownChanged>,
    mut sounds: MessageWriter<PlaySoundEvent>,
    mut query: Query<
        (
            Entity,
            &ControlAuthority,
            &mut AttackState,
            &mut CooldownGauge,
        ),
        With<Player>,
    >,
) {
    if !input.attack_just_pressed {
        return;
    }

    for (entity, authority, mut attack, mut gauge) in &mut query {
        if !authority.is_player() {
            continue;
        }
        if !attack.can_trigger(&gauge, tuning.allow_overlapping_attacks) {
            debug!(
                "Attack rejected: cooldown {} (min {}), active={}",
                gauge.current, gauge.min, attack.active
            );
            continue;
        }

        attack.begin(tuning.time_for_animation);
        let change = gauge.consume(1);
        report_gauge_change(entity, change, &mut displayed, &mut sounds);
        debug!(
            "Attack triggered: {} in flight, cooldown now {}",
            attack.in_flight(),
            gauge.current
        );
    }
}

/// Opens the hit region while its owner's attack is active and mirrors it
/// to the facing side.
pub(crate) fn sync_hit_regions(
    mut commands: Commands,
    owners: Query<(&AttackState, &MovementState)>,
    mut regions: Query<(Entity, &HitRegion, &mut Transform, Has<ColliderDisabled>)>,
) {
    for (entity, region, mut transform, disabled) in &mut regions {
        let Ok((attack, state)) = owners.get(region.owner) else {
            continue;
        };

        transform.translation.x = region.offset * state.facing.sign();

        if attack.active && disabled {
            commands.entity(entity).remove::<ColliderDisabled>();
        } else if !attack.active && !disabled {
            commands.entity(entity).insert(ColliderDisabled);
        }
    }
}
