//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;
pub(crate) mod platform;

pub use collisions::probe_point;
#[cfg(test)]
pub(crate) use collisions::{GroundQuery, sense_ground};
#[cfg(test)]
pub(crate) use movement::{horizontal_velocity, next_move_speed};

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_fixed_translation, apply_horizontal_movement, apply_jump, handle_movement_toggles,
    pin_depth, resolve_control_authority,
};
pub(crate) use platform::{carry_platform_riders, track_platform_contacts};
