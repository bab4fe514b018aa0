//! Validation for tuning values that would break the controller.

use super::data::PlayerTuningDef;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value is not negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $def:expr, $($field:ident),+) => {
        $(
            if $def.$field < 0.0 {
                $errors.push(ValidationError {
                    section: $section,
                    field: stringify!($field),
                    message: format!("must not be negative, got {}", $def.$field),
                });
            }
        )+
    };
}

/// Validate the tuning values.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_tuning(tuning: &PlayerTuningDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &tuning.movement;
    check_non_negative!(
        errors,
        "movement",
        movement,
        walk_speed,
        sprint_speed,
        jump_speed,
        axis_sensitivity,
        parent_scale_compensation
    );
    if movement.ground_probe_radius <= 0.0 {
        errors.push(ValidationError {
            section: "movement",
            field: "ground_probe_radius",
            message: format!("must be positive, got {}", movement.ground_probe_radius),
        });
    }
    if movement.body_size.iter().any(|v| *v <= 0.0) {
        errors.push(ValidationError {
            section: "movement",
            field: "body_size",
            message: format!("must be positive, got {:?}", movement.body_size),
        });
    }

    let combat = &tuning.combat;
    check_non_negative!(
        errors,
        "combat",
        combat,
        knockback_force,
        knockback_duration,
        time_for_animation
    );
    if combat.cooldown_min > combat.cooldown_max {
        errors.push(ValidationError {
            section: "combat",
            field: "cooldown_max",
            message: format!(
                "must be at least cooldown_min ({}), got {}",
                combat.cooldown_min, combat.cooldown_max
            ),
        });
    }
    if combat.hit_region_size.iter().any(|v| *v <= 0.0) {
        errors.push(ValidationError {
            section: "combat",
            field: "hit_region_size",
            message: format!("must be positive, got {:?}", combat.hit_region_size),
        });
    }

    errors
}
