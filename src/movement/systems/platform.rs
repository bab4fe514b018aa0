//! Movement domain: moving-platform attachment and carry.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::contact_pair;
use crate::level::Region;
use crate::movement::{PlatformRider, Player};

pub(crate) fn track_platform_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    region_query: Query<(&Region, &Transform)>,
    mut rider_query: Query<&mut PlatformRider, With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((rider_entity, other)) =
            contact_pair(event.collider1, event.collider2, |e| rider_query.contains(e))
        else {
            continue;
        };

        let Ok((region, platform_transform)) = region_query.get(other) else {
            continue;
        };
        if *region != Region::MovingPlatform {
            continue;
        }

        if let Ok(mut rider) = rider_query.get_mut(rider_entity) {
            rider.attach(other, platform_transform.translation.truncate());
            debug!("Attached {:?} to moving platform {:?}", rider_entity, other);
        }
    }

    for event in collision_end_events.read() {
        let Some((rider_entity, other)) =
            contact_pair(event.collider1, event.collider2, |e| rider_query.contains(e))
        else {
            continue;
        };

        let Ok((region, _)) = region_query.get(other) else {
            continue;
        };
        if *region != Region::MovingPlatform {
            continue;
        }

        if let Ok(mut rider) = rider_query.get_mut(rider_entity) {
            rider.detach();
            debug!("Detached {:?} from moving platform {:?}", rider_entity, other);
        }
    }
}

pub(crate) fn carry_platform_riders(
    platform_query: Query<&Transform, Without<PlatformRider>>,
    mut rider_query: Query<(&mut PlatformRider, &mut Transform)>,
) {
    for (mut rider, mut transform) in &mut rider_query {
        let Some(platform) = rider.platform else {
            continue;
        };

        let position = platform_query
            .get(platform)
            .ok()
            .map(|t| t.translation.truncate());
        if position.is_none() {
            debug!("Ridden platform {:?} is gone, detaching", platform);
        }

        let delta = rider.carry(position);
        if delta != Vec2::ZERO {
            transform.translation += delta.extend(0.0);
        }
    }
}
