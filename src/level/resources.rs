//! Level domain: dialogue flags and level manager state.

use bevy::prelude::*;

/// Narrative flags read by the dialogue layer
#[derive(Resource, Debug, Default)]
pub struct DialogueFlags {
    pub in_final_area: bool,
}

#[derive(Resource, Debug, Default)]
pub struct LevelManager {
    pub respawn_count: u32,
    pub level_complete: bool,
}
