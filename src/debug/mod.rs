//! Debug mode for tuning the controller by hand.
//!
//! Features:
//! - F1: toggle ground probe and hit region gizmos
//! - F2: toggle the movement lock
//! - F3: apply a knockback to the player
//! - F4: toggle the controller readout

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::debug::systems::{draw_debug_gizmos, handle_debug_hotkeys, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_hotkeys.in_set(ControllerSet::Input))
            .add_systems(
                Update,
                draw_debug_gizmos.run_if(|state: Res<DebugState>| state.show_gizmos),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
