//! Level domain: level manager, trigger regions and the demo climb.

mod components;
mod events;
mod resources;
mod spawn;
mod systems;


pub use components::{Region, RespawnPoint};
pub use events::RespawnRequestedEvent;
pub use resources::{DialogueFlags, LevelManager};
pub use spawn::PLAYER_SPAWN;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::level::spawn::spawn_level;
use crate::level::systems::{
    apply_hazard_contacts, break_on_hit, complete_level_on_throne, drive_moving_platforms,
    handle_region_triggers, handle_respawn_requests,
};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogueFlags>()
            .init_resource::<LevelManager>()
            .add_message::<RespawnRequestedEvent>()
            .add_systems(Startup, spawn_level)
            .add_systems(
                Update,
                (
                    handle_region_triggers,
                    complete_level_on_throne,
                    handle_respawn_requests,
                )
                    .chain()
                    .in_set(ControllerSet::Contacts),
            )
            .add_systems(
                Update,
                (apply_hazard_contacts, break_on_hit).in_set(ControllerSet::Contacts),
            )
            .add_systems(FixedUpdate, drive_moving_platforms);
    }
}
