//! Core domain: camera setup and collision pair helpers.

use bevy::prelude::*;

use crate::movement::Player;

/// How quickly the camera catches up with the player (per second)
const CAMERA_FOLLOW_RATE: f32 = 6.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn follow_player_camera(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Camera2d>)>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };

    let t = (CAMERA_FOLLOW_RATE * time.delta_secs()).min(1.0);
    for mut camera in &mut camera_query {
        let target = player.translation.truncate();
        let current = camera.translation.truncate();
        let next = current.lerp(target, t);
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}

/// Orders a collision pair so the entity accepted by `is_subject` comes first.
///
/// Returns `None` when neither side matches.
pub fn contact_pair(
    collider1: Entity,
    collider2: Entity,
    is_subject: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_subject(collider1) {
        Some((collider1, collider2))
    } else if is_subject(collider2) {
        Some((collider2, collider1))
    } else {
        None
    }
}
