//! Movement domain: grounding, locomotion, jumping and platform riding.

mod bootstrap;
mod components;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    ControlAuthority, Facing, GameLayer, GroundProbe, JumpKind, JumpState, MovementState,
    PlatformRider, Player, VisualOrientation, is_falling,
};
pub use resources::{MovementInput, MovementTuning, smooth_axis};
pub use systems::probe_point;

use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::level::{DialogueFlags, RespawnRequestedEvent};
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_fixed_translation, apply_horizontal_movement, apply_jump, carry_platform_riders,
    detect_ground, handle_movement_toggles, pin_depth, read_input, resolve_control_authority,
    track_platform_contacts,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                track_platform_contacts.in_set(ControllerSet::Contacts),
            )
            .add_systems(
                Update,
                (handle_movement_toggles, carry_platform_riders, detect_ground)
                    .chain()
                    .in_set(ControllerSet::Sense),
            )
            .add_systems(
                Update,
                (resolve_control_authority, pin_depth)
                    .chain()
                    .in_set(ControllerSet::Authority),
            )
            .add_systems(
                Update,
                (apply_horizontal_movement, apply_jump)
                    .chain()
                    .in_set(ControllerSet::Act),
            )
            .add_systems(FixedUpdate, apply_fixed_translation);
    }

    fn finish(&self, app: &mut App) {
        // The level manager and dialogue collaborators must be wired before play
        let world = app.world();
        if !world.contains_resource::<Messages<RespawnRequestedEvent>>() {
            panic!("MovementPlugin requires LevelPlugin: respawn requests are not registered");
        }
        if !world.contains_resource::<DialogueFlags>() {
            panic!("MovementPlugin requires LevelPlugin: DialogueFlags resource is missing");
        }
    }
}
