//! Level domain: the climb towards the throne.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::level::components::{Breakable, Ground, Hazard, PlatformPath, Region};
use crate::movement::GameLayer;

/// Where the character starts and respawns until a checkpoint is reached
pub const PLAYER_SPAWN: Vec3 = Vec3::new(-300.0, -100.0, 0.0);

/// Scale of the moving platform; the rider's visual compensation cancels it
pub(crate) const MOVING_PLATFORM_SCALE: f32 = 2.0;
const MOVING_PLATFORM_SIZE: Vec2 = Vec2::new(45.0, 7.0);

const GROUND_COLOR: Color = Color::srgb(0.35, 0.4, 0.35);
const PLATFORM_COLOR: Color = Color::srgb(0.45, 0.4, 0.3);
const MOVING_PLATFORM_COLOR: Color = Color::srgb(0.55, 0.45, 0.25);
const HAZARD_COLOR: Color = Color::srgb(0.8, 0.2, 0.2);
const CHECKPOINT_COLOR: Color = Color::srgba(0.3, 0.8, 0.4, 0.4);
const THRONE_COLOR: Color = Color::srgb(0.9, 0.75, 0.2);
const BREAKABLE_COLOR: Color = Color::srgb(0.5, 0.7, 0.95);

fn solid_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Ground, [GameLayer::Player])
}

fn sensor_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player])
}

fn spawn_block(commands: &mut Commands, position: Vec2, size: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color: PLATFORM_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        solid_layers(),
    ));
}

fn spawn_region(commands: &mut Commands, region: Region, position: Vec2, size: Vec2, color: Color) {
    commands.spawn((
        region,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(-1.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));
}

pub(crate) fn spawn_level(mut commands: Commands) {
    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: GROUND_COLOR,
            custom_size: Some(Vec2::new(900.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -150.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(900.0, 40.0),
        solid_layers(),
    ));

    // Ascending ledges
    for (position, size) in [
        (Vec2::new(-120.0, -60.0), Vec2::new(120.0, 16.0)),
        (Vec2::new(60.0, 20.0), Vec2::new(100.0, 16.0)),
        (Vec2::new(420.0, 200.0), Vec2::new(140.0, 16.0)),
        (Vec2::new(200.0, 300.0), Vec2::new(100.0, 16.0)),
    ] {
        spawn_block(&mut commands, position, size);
    }

    // Moving platform bridging the gap to the upper ledges
    let path = PlatformPath::new(Vec2::new(200.0, 100.0), Vec2::new(320.0, 160.0), 60.0);
    commands.spawn((
        Region::MovingPlatform,
        Ground,
        Sprite {
            color: MOVING_PLATFORM_COLOR,
            custom_size: Some(MOVING_PLATFORM_SIZE),
            ..default()
        },
        Transform::from_translation(path.start.extend(0.0))
            .with_scale(Vec3::new(MOVING_PLATFORM_SCALE, MOVING_PLATFORM_SCALE, 1.0)),
        path,
        RigidBody::Kinematic,
        Collider::rectangle(MOVING_PLATFORM_SIZE.x, MOVING_PLATFORM_SIZE.y),
        CollisionEventsEnabled,
        solid_layers(),
    ));

    // Spikes on the floor between the start and the first ledge
    commands.spawn((
        Hazard,
        Sprite {
            color: HAZARD_COLOR,
            custom_size: Some(Vec2::new(60.0, 10.0)),
            ..default()
        },
        Transform::from_xyz(-200.0, -125.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(60.0, 10.0),
        Sensor,
        CollisionEventsEnabled,
        sensor_layers(),
    ));

    // Crystals that refill the attack gauge when struck
    for position in [Vec2::new(-60.0, -110.0), Vec2::new(440.0, 230.0)] {
        commands.spawn((
            Breakable { restores: 1 },
            Sprite {
                color: BREAKABLE_COLOR,
                custom_size: Some(Vec2::new(14.0, 22.0)),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(14.0, 22.0),
            Sensor,
            CollisionLayers::new(GameLayer::Breakable, [GameLayer::PlayerHitbox]),
        ));
    }

    spawn_region(
        &mut commands,
        Region::KillPlane,
        Vec2::new(0.0, -420.0),
        Vec2::new(4000.0, 40.0),
        Color::NONE,
    );
    spawn_region(
        &mut commands,
        Region::Checkpoint,
        Vec2::new(420.0, 232.0),
        Vec2::new(30.0, 48.0),
        CHECKPOINT_COLOR,
    );
    spawn_region(
        &mut commands,
        Region::Throne,
        Vec2::new(200.0, 336.0),
        Vec2::new(40.0, 56.0),
        THRONE_COLOR,
    );

    info!("Level spawned");
}
