//! Content domain: data-driven tuning loaded from RON files.

mod data;
mod loader;
mod validation;


pub use data::PlayerTuningDef;
pub use loader::load_player_tuning;
pub use validation::validate_tuning;

use bevy::prelude::*;
use std::path::Path;

use crate::combat::CombatTuning;
use crate::movement::MovementTuning;

pub const DATA_DIR: &str = "assets/data";

/// Loads tuning when built, so it must be added before the plugins that
/// read `MovementTuning` and `CombatTuning`.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let tuning = load_validated_tuning(Path::new(DATA_DIR));
        app.insert_resource(MovementTuning::from(tuning.movement))
            .insert_resource(CombatTuning::from(tuning.combat));
    }
}

/// Load and validate the tuning file, falling back to defaults on any error.
pub fn load_validated_tuning(base_path: &Path) -> PlayerTuningDef {
    let tuning = match load_player_tuning(base_path) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return PlayerTuningDef::default();
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Invalid tuning: {}", error);
        }
        warn!("{} tuning error(s); using default tuning", errors.len());
        return PlayerTuningDef::default();
    }

    info!(
        "Loaded player tuning v{} (walk {}, sprint {}, jump {})",
        tuning.schema_version,
        tuning.movement.walk_speed,
        tuning.movement.sprint_speed,
        tuning.movement.jump_speed
    );
    tuning
}
