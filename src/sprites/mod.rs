//! Sprites module: the presentation side of the character controller.
//!
//! This module handles:
//! - Turning animator parameters into animation states and frames
//! - Mirroring and scaling the character's visual child

mod animation;
mod orientation;


pub use animation::{AnimationController, AnimationStateChanged, AnimatorParams};
pub use orientation::PlayerVisual;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::sprites::animation::{
    animation_state_machine, sync_animator_params, update_animation_frames,
};
use crate::sprites::orientation::apply_visual_orientation;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>().add_systems(
            Update,
            (
                sync_animator_params,
                animation_state_machine,
                update_animation_frames,
                apply_visual_orientation,
            )
                .chain()
                .in_set(ControllerSet::Sync),
        );
    }
}
