//! Combat domain: knockback, cooldown-gated attacks and the hit region.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{AttackState, CooldownGauge, HitRegion, Knockback};
pub use events::{
    ApplyKnockbackEvent, ConsumeCooldownEvent, CooldownChanged, CooldownMaxChanged,
    RestoreCooldownEvent, SetMovementEnabledEvent,
};
pub use resources::{CombatInput, CombatTuning};

use bevy::prelude::*;

use crate::combat::systems::{
    announce_cooldown_gauges, apply_knockback_override, handle_cooldown_requests,
    handle_knockback_requests, read_combat_input, sync_hit_regions, tick_attack_timers,
    trigger_attacks,
};
use crate::core::ControllerSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<CombatInput>()
            .add_message::<ApplyKnockbackEvent>()
            .add_message::<SetMovementEnabledEvent>()
            .add_message::<ConsumeCooldownEvent>()
            .add_message::<RestoreCooldownEvent>()
            .add_message::<CooldownMaxChanged>()
            .add_message::<CooldownChanged>()
            .add_systems(Update, read_combat_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                (
                    announce_cooldown_gauges,
                    handle_knockback_requests,
                    handle_cooldown_requests,
                )
                    .chain()
                    .in_set(ControllerSet::Sense),
            )
            .add_systems(
                Update,
                (apply_knockback_override, tick_attack_timers, trigger_attacks)
                    .chain()
                    .in_set(ControllerSet::Act),
            )
            .add_systems(Update, sync_hit_regions.in_set(ControllerSet::Sync));
    }
}
