//! Facing and platform scale compensation for the character's visual.

use bevy::prelude::*;

use crate::movement::{MovementTuning, PlatformRider, VisualOrientation};
use crate::sprites::animation::AnimationController;

/// Sprite child that carries the character's look
#[derive(Component, Debug)]
pub struct PlayerVisual;

/// Scale for the visual: mirrored by facing. While the orientation asks for
/// parent-scale compensation, the ridden platform's scale is applied along
/// with `compensation`, so a platform scaled by `1 / compensation` renders
/// the character at its natural size.
pub fn visual_scale(
    orientation: &VisualOrientation,
    compensation: f32,
    platform_scale: Vec2,
) -> Vec3 {
    let base = if orientation.compensate_parent_scale {
        platform_scale * compensation
    } else {
        Vec2::ONE
    };
    Vec3::new(orientation.facing_sign * base.x, base.y, 1.0)
}

pub(crate) fn apply_visual_orientation(
    tuning: Res<MovementTuning>,
    owners: Query<(&VisualOrientation, &AnimationController, Option<&PlatformRider>)>,
    platforms: Query<&Transform, Without<PlayerVisual>>,
    mut visuals: Query<(&ChildOf, &mut Transform, &mut Sprite), With<PlayerVisual>>,
) {
    for (child_of, mut transform, mut sprite) in &mut visuals {
        let Ok((orientation, controller, rider)) = owners.get(child_of.parent()) else {
            continue;
        };

        let platform_scale = rider
            .and_then(|r| r.platform)
            .and_then(|platform| platforms.get(platform).ok())
            .map_or(Vec2::ONE, |t| t.scale.truncate());

        let scale = visual_scale(orientation, tuning.parent_scale_compensation, platform_scale);
        if transform.scale != scale {
            transform.scale = scale;
        }
        sprite.color = controller.state.tint();
    }
}
