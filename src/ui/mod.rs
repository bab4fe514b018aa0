//! UI domain: cooldown HUD and the level end overlay.

mod hud_cooldown;
mod victory;

#[cfg(test)]
mod tests;

pub use hud_cooldown::CooldownBarState;

use bevy::prelude::*;

use crate::core::ControllerSet;
use crate::ui::hud_cooldown::{receive_cooldown_updates, spawn_cooldown_bar_ui, update_cooldown_bar};
use crate::ui::victory::show_victory_overlay;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CooldownBarState>()
            .add_systems(Startup, spawn_cooldown_bar_ui)
            .add_systems(
                Update,
                (receive_cooldown_updates, update_cooldown_bar)
                    .chain()
                    .after(ControllerSet::Sync),
            )
            .add_systems(Update, show_victory_overlay.after(ControllerSet::Sync));
    }
}
