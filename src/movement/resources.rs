//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Baseline speed restored when sprint is released
    pub walk_speed: f32,
    pub sprint_speed: f32,
    pub jump_speed: f32,
    /// How fast the smoothed axis follows the raw axis (units per second)
    pub axis_sensitivity: f32,
    pub ground_probe_offset: Vec2,
    pub ground_probe_radius: f32,
    /// Visual scale factor applied while riding a moving platform
    pub parent_scale_compensation: f32,
    pub body_size: Vec2,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 80.0,
            sprint_speed: 160.0,
            jump_speed: 384.0,
            axis_sensitivity: 3.0,
            ground_probe_offset: Vec2::new(0.0, -17.0),
            ground_probe_radius: 6.0,
            parent_scale_compensation: 0.5,
            body_size: Vec2::new(20.0, 32.0),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Unsmoothed axis, used for velocity and facing
    pub axis_raw: Vec2,
    /// Smoothed axis, used by the fixed-step translation
    pub axis: Vec2,
    pub sprint_held: bool,
    pub sprint_released: bool,
    pub jump_just_pressed: bool,
}

/// Move `current` toward `target` by at most `sensitivity * dt`, snapping to
/// zero when the direction reverses.
pub fn smooth_axis(current: f32, target: f32, sensitivity: f32, dt: f32) -> f32 {
    if target != 0.0 && current != 0.0 && target.signum() != current.signum() {
        return 0.0;
    }

    let step = sensitivity * dt;
    let diff = target - current;
    if diff.abs() <= step {
        target
    } else {
        current + step * diff.signum()
    }
}
