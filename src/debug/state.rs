//! Debug domain: overlay toggles.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Draw the ground probe and hit region
    pub show_gizmos: bool,
    /// Show the controller readout (position, authority, cooldown)
    pub show_info: bool,
}

/// Marker for debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;
