//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundProbe, MovementState, Player};

/// Overlap query answered by the physics layer.
pub trait GroundQuery {
    /// True if any collider on `mask` overlaps the circle at `point`.
    fn overlaps(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool;
}

impl GroundQuery for SpatialQuery<'_, '_> {
    fn overlaps(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool {
        let filter = SpatialQueryFilter::from_mask(mask);
        !self
            .shape_intersections(&Collider::circle(radius), point, 0.0, &filter)
            .is_empty()
    }
}

pub fn probe_point(translation: Vec3, probe: &GroundProbe) -> Vec2 {
    translation.truncate() + probe.offset
}

pub fn sense_ground(query: &impl GroundQuery, translation: Vec3, probe: &GroundProbe) -> bool {
    query.overlaps(
        probe_point(translation, probe),
        probe.radius,
        GameLayer::Ground.into(),
    )
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundProbe, &mut MovementState), With<Player>>,
) {
    for (transform, probe, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        state.on_ground = sense_ground(&spatial_query, transform.translation, probe);

        if state.on_ground && !was_on_ground {
            debug!("Landed at {:?}", transform.translation.truncate());
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground at {:?}", transform.translation.truncate());
        }
    }
}
