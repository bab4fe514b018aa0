//! Combat domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    pub knockback_force: f32,
    /// Length of every knockback, in seconds
    pub knockback_duration: f32,
    pub cooldown_min: i32,
    pub cooldown_max: i32,
    /// How long the hit region stays open per attack
    pub time_for_animation: f32,
    /// Allow a new attack while one is still open. Each overlapping attack
    /// still costs a charge and extends how long the region stays open.
    pub allow_overlapping_attacks: bool,
    pub hit_region_size: Vec2,
    pub hit_region_offset: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            knockback_force: 160.0,
            knockback_duration: 0.25,
            cooldown_min: 0,
            cooldown_max: 2,
            time_for_animation: 0.35,
            allow_overlapping_attacks: true,
            hit_region_size: Vec2::new(28.0, 24.0),
            hit_region_offset: 20.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack_just_pressed: bool,
}
