//! Core domain: tick ordering, camera and shared collision helpers.

mod schedule;
mod systems;


pub use schedule::ControllerSet;
pub use systems::contact_pair;

use bevy::prelude::*;

use crate::core::systems::{follow_player_camera, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ControllerSet::Input,
                ControllerSet::Contacts,
                ControllerSet::Sense,
                ControllerSet::Authority,
                ControllerSet::Act,
                ControllerSet::Sync,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera)
        .add_systems(PostUpdate, follow_player_camera);
    }
}
