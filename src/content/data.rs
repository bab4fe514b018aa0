//! Data definitions for the player tuning RON file.
//!
//! These structs mirror `assets/data/player_tuning.ron`. Every field has a
//! serde default, so a file only needs to list the values it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::CombatTuning;
use crate::movement::MovementTuning;

// ============================================================================
// Player tuning (player_tuning.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerTuningDef {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub combat: CombatDef,
}

impl Default for PlayerTuningDef {
    fn default() -> Self {
        Self {
            schema_version: 1,
            movement: MovementDef::default(),
            combat: CombatDef::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub jump_speed: f32,
    pub axis_sensitivity: f32,
    pub ground_probe_offset: [f32; 2],
    pub ground_probe_radius: f32,
    pub parent_scale_compensation: f32,
    pub body_size: [f32; 2],
}

impl Default for MovementDef {
    fn default() -> Self {
        MovementTuning::default().into()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CombatDef {
    pub knockback_force: f32,
    pub knockback_duration: f32,
    pub cooldown_min: i32,
    pub cooldown_max: i32,
    pub time_for_animation: f32,
    pub allow_overlapping_attacks: bool,
    pub hit_region_size: [f32; 2],
    pub hit_region_offset: f32,
}

impl Default for CombatDef {
    fn default() -> Self {
        CombatTuning::default().into()
    }
}

// ============================================================================
// Conversions to runtime resources
// ============================================================================

impl From<MovementDef> for MovementTuning {
    fn from(def: MovementDef) -> Self {
        Self {
            walk_speed: def.walk_speed,
            sprint_speed: def.sprint_speed,
            jump_speed: def.jump_speed,
            axis_sensitivity: def.axis_sensitivity,
            ground_probe_offset: Vec2::from_array(def.ground_probe_offset),
            ground_probe_radius: def.ground_probe_radius,
            parent_scale_compensation: def.parent_scale_compensation,
            body_size: Vec2::from_array(def.body_size),
        }
    }
}

impl From<MovementTuning> for MovementDef {
    fn from(tuning: MovementTuning) -> Self {
        Self {
            walk_speed: tuning.walk_speed,
            sprint_speed: tuning.sprint_speed,
            jump_speed: tuning.jump_speed,
            axis_sensitivity: tuning.axis_sensitivity,
            ground_probe_offset: tuning.ground_probe_offset.to_array(),
            ground_probe_radius: tuning.ground_probe_radius,
            parent_scale_compensation: tuning.parent_scale_compensation,
            body_size: tuning.body_size.to_array(),
        }
    }
}

impl From<CombatDef> for CombatTuning {
    fn from(def: CombatDef) -> Self {
        Self {
            knockback_force: def.knockback_force,
            knockback_duration: def.knockback_duration,
            cooldown_min: def.cooldown_min,
            cooldown_max: def.cooldown_max,
            time_for_animation: def.time_for_animation,
            allow_overlapping_attacks: def.allow_overlapping_attacks,
            hit_region_size: Vec2::from_array(def.hit_region_size),
            hit_region_offset: def.hit_region_offset,
        }
    }
}

impl From<CombatTuning> for CombatDef {
    fn from(tuning: CombatTuning) -> Self {
        Self {
            knockback_force: tuning.knockback_force,
            knockback_duration: tuning.knockback_duration,
            cooldown_min: tuning.cooldown_min,
            cooldown_max: tuning.cooldown_max,
            time_for_animation: tuning.time_for_animation,
            allow_overlapping_attacks: tuning.allow_overlapping_attacks,
            hit_region_size: tuning.hit_region_size.to_array(),
            hit_region_offset: tuning.hit_region_offset,
        }
    }
}
