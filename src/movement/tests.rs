//! Movement domain: tests for grounding, jumping, sprint and platform carry.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use super::systems::{
    GroundQuery, apply_fixed_translation, apply_horizontal_movement, apply_jump,
    handle_movement_toggles, horizontal_velocity, next_move_speed, resolve_control_authority,
    sense_ground, track_platform_contacts,
};
use super::{
    ControlAuthority, Facing, GameLayer, GroundProbe, JumpKind, JumpState, MovementInput,
    MovementPlugin, MovementState, MovementTuning, PlatformRider, Player, VisualOrientation,
    is_falling, probe_point, smooth_axis,
};
use crate::audio::PlaySoundEvent;
use crate::combat::{Knockback, SetMovementEnabledEvent};
use crate::level::{DialogueFlags, Region, RespawnRequestedEvent};

// -----------------------------------------------------------------------------
// Ground sensor
// -----------------------------------------------------------------------------

/// Answers overlaps against a single circle of ground at a fixed spot
struct FakeGround {
    center: Vec2,
    radius: f32,
    layer: GameLayer,
}

impl GroundQuery for FakeGround {
    fn overlaps(&self, point: Vec2, radius: f32, mask: LayerMask) -> bool {
        let layer_mask: LayerMask = self.layer.into();
        (mask & layer_mask) != LayerMask::NONE
            && point.distance(self.center) <= radius + self.radius
    }
}

#[test]
fn test_probe_point_applies_offset() {
    let probe = GroundProbe {
        offset: Vec2::new(0.0, -16.0),
        radius: 4.0,
    };
    assert_eq!(
        probe_point(Vec3::new(10.0, 20.0, 3.0), &probe),
        Vec2::new(10.0, 4.0)
    );
}

#[test]
fn test_sense_ground_hits_ground_layer() {
    let ground = FakeGround {
        center: Vec2::new(0.0, -20.0),
        radius: 2.0,
        layer: GameLayer::Ground,
    };
    let probe = GroundProbe {
        offset: Vec2::new(0.0, -16.0),
        radius: 4.0,
    };

    assert!(sense_ground(&ground, Vec3::ZERO, &probe));
    assert!(!sense_ground(&ground, Vec3::new(0.0, 50.0, 0.0), &probe));
}

#[test]
fn test_sense_ground_ignores_other_layers() {
    let sensor = FakeGround {
        center: Vec2::new(0.0, -16.0),
        radius: 10.0,
        layer: GameLayer::Sensor,
    };
    let probe = GroundProbe {
        offset: Vec2::new(0.0, -16.0),
        radius: 4.0,
    };

    assert!(!sense_ground(&sensor, Vec3::ZERO, &probe));
}

// -----------------------------------------------------------------------------
// Jump state machine
// -----------------------------------------------------------------------------

#[test]
fn test_ground_then_double_then_rejected() {
    let mut jump = JumpState::default();

    assert_eq!(jump.try_jump(true, true), Some(JumpKind::Ground));
    assert_eq!(jump.jump_count, 1);
    assert!(!jump.double_jump_consumed);

    assert_eq!(jump.try_jump(true, false), Some(JumpKind::Air));
    assert_eq!(jump.jump_count, 0);
    assert!(jump.double_jump_consumed);

    assert_eq!(jump.try_jump(true, false), None);
    assert_eq!(jump.jump_count, 0);
    assert!(jump.double_jump_consumed);
}

#[test]
fn test_no_press_resets_jump_count() {
    let mut jump = JumpState {
        jump_count: 1,
        double_jump_consumed: false,
    };

    assert_eq!(jump.try_jump(false, false), None);
    assert_eq!(jump.jump_count, 0);
}

#[test]
fn test_ground_jump_rejected_while_count_pending() {
    let mut jump = JumpState {
        jump_count: 1,
        double_jump_consumed: false,
    };

    // Still grounded on the tick right after a ground jump: not a fresh ground jump
    assert_eq!(jump.try_jump(true, true), None);
    assert_eq!(jump.jump_count, 0);
}

#[test]
fn test_ground_jump_rearms_double_jump() {
    let mut jump = JumpState {
        jump_count: 0,
        double_jump_consumed: true,
    };

    assert_eq!(jump.try_jump(true, true), Some(JumpKind::Ground));
    assert!(!jump.double_jump_consumed);
}

#[test]
fn test_walking_off_ledge_keeps_previous_double_jump_state() {
    let mut jump = JumpState {
        jump_count: 0,
        double_jump_consumed: true,
    };

    // Landing alone does not rearm the air jump; only a ground jump does
    assert_eq!(jump.try_jump(false, true), None);
    assert_eq!(jump.try_jump(true, false), None);
}

// -----------------------------------------------------------------------------
// Horizontal movement and sprint
// -----------------------------------------------------------------------------

#[test]
fn test_horizontal_velocity_branches() {
    assert_eq!(horizontal_velocity(0.4, 80.0), (80.0, Some(Facing::Right)));
    assert_eq!(horizontal_velocity(-1.0, 80.0), (-80.0, Some(Facing::Left)));
    assert_eq!(horizontal_velocity(0.0, 80.0), (0.0, None));
    // Out-of-range input goes through the same branches
    assert_eq!(horizontal_velocity(7.5, 80.0), (80.0, Some(Facing::Right)));
}

#[test]
fn test_sprint_hold_and_release() {
    let tuning = MovementTuning::default();

    let held = next_move_speed(tuning.walk_speed, true, false, &tuning);
    assert_eq!(held, tuning.sprint_speed);

    let idle = next_move_speed(held, false, false, &tuning);
    assert_eq!(idle, tuning.sprint_speed);

    let released = next_move_speed(idle, false, true, &tuning);
    assert_eq!(released, tuning.walk_speed);
}

#[test]
fn test_sprint_release_uses_baseline_not_previous() {
    let tuning = MovementTuning::default();
    // Speed changed by something else; release still lands on the baseline
    assert_eq!(next_move_speed(42.0, false, true, &tuning), tuning.walk_speed);
}

#[test]
fn test_smooth_axis_steps_and_snaps() {
    assert!((smooth_axis(0.0, 1.0, 3.0, 0.1) - 0.3).abs() < 1e-6);
    assert_eq!(smooth_axis(0.9, 1.0, 3.0, 0.1), 1.0);
    assert_eq!(smooth_axis(0.5, -1.0, 3.0, 0.1), 0.0);
    assert_eq!(smooth_axis(0.2, 0.0, 3.0, 0.1), 0.0);
}

#[test]
fn test_is_falling() {
    assert!(is_falling(&LinearVelocity(Vec2::new(0.0, -1.0))));
    assert!(!is_falling(&LinearVelocity(Vec2::new(5.0, 0.0))));
}

// -----------------------------------------------------------------------------
// Control authority
// -----------------------------------------------------------------------------

#[test]
fn test_control_authority_resolution() {
    assert_eq!(ControlAuthority::resolve(false, true), ControlAuthority::Locked);
    assert_eq!(ControlAuthority::resolve(true, true), ControlAuthority::Knockback);
    assert_eq!(ControlAuthority::resolve(true, false), ControlAuthority::Player);
}

// -----------------------------------------------------------------------------
// Platform attachment
// -----------------------------------------------------------------------------

#[test]
fn test_platform_carry_follows_platform_delta() {
    let mut world = World::new();
    let platform = world.spawn_empty().id();

    let mut rider = PlatformRider::default();
    assert_eq!(rider.carry(Some(Vec2::new(5.0, 0.0))), Vec2::ZERO);

    rider.attach(platform, Vec2::new(100.0, 50.0));
    assert!(rider.platform_moving);
    assert_eq!(rider.carry(Some(Vec2::new(103.0, 50.0))), Vec2::new(3.0, 0.0));
    assert_eq!(rider.carry(Some(Vec2::new(103.0, 48.0))), Vec2::new(0.0, -2.0));

    rider.detach();
    assert!(!rider.platform_moving);
    assert_eq!(rider.carry(Some(Vec2::new(200.0, 0.0))), Vec2::ZERO);
}

#[test]
fn test_platform_gone_detaches_rider() {
    let mut world = World::new();
    let platform = world.spawn_empty().id();

    let mut rider = PlatformRider::default();
    rider.attach(platform, Vec2::ZERO);

    assert_eq!(rider.carry(None), Vec2::ZERO);
    assert!(rider.platform.is_none());
    assert!(!rider.platform_moving);
}

// -----------------------------------------------------------------------------
// Tick wiring (headless app, no physics)
// -----------------------------------------------------------------------------

fn movement_test_app() -> App {
    let mut app = App::new();
    app.init_resource::<MovementTuning>()
        .init_resource::<MovementInput>()
        .add_message::<PlaySoundEvent>()
        .add_message::<SetMovementEnabledEvent>()
        .add_systems(
            Update,
            (
                handle_movement_toggles,
                resolve_control_authority,
                apply_horizontal_movement,
                apply_jump,
            )
                .chain(),
        );
    app
}

fn spawn_test_player(app: &mut App, on_ground: bool) -> Entity {
    let walk_speed = app.world().resource::<MovementTuning>().walk_speed;
    let mut state = MovementState::new(walk_speed);
    state.on_ground = on_ground;

    app.world_mut()
        .spawn((
            Player,
            state,
            ControlAuthority::default(),
            JumpState::default(),
            PlatformRider::default(),
            VisualOrientation::default(),
            Knockback::default(),
            LinearVelocity(Vec2::new(0.0, -3.0)),
        ))
        .id()
}

#[test]
fn test_move_left_keeps_vertical_velocity() {
    let mut app = movement_test_app();
    let player = spawn_test_player(&mut app, true);
    app.world_mut().resource_mut::<MovementInput>().axis_raw = Vec2::new(-1.0, 0.0);

    app.update();

    let walk = app.world().resource::<MovementTuning>().walk_speed;
    let velocity = app.world().get::<LinearVelocity>(player).unwrap();
    assert_eq!(velocity.x, -walk);
    assert_eq!(velocity.y, -3.0);

    let state = app.world().get::<MovementState>(player).unwrap();
    assert_eq!(state.facing, Facing::Left);
    let orientation = app.world().get::<VisualOrientation>(player).unwrap();
    assert_eq!(orientation.facing_sign, -1.0);
    assert!(!orientation.compensate_parent_scale);
}

#[test]
fn test_orientation_flags_parent_scale_on_platform() {
    let mut app = movement_test_app();
    let player = spawn_test_player(&mut app, true);
    let platform = app.world_mut().spawn_empty().id();
    app.world_mut()
        .get_mut::<PlatformRider>(player)
        .unwrap()
        .attach(platform, Vec2::ZERO);
    app.world_mut().resource_mut::<MovementInput>().axis_raw = Vec2::new(1.0, 0.0);

    app.update();

    let orientation = app.world().get::<VisualOrientation>(player).unwrap();
    assert_eq!(orientation.facing_sign, 1.0);
    assert!(orientation.compensate_parent_scale);
}

#[test]
fn test_sprint_takes_effect_next_tick() {
    let mut app = movement_test_app();
    let player = spawn_test_player(&mut app, true);
    {
        let mut input = app.world_mut().resource_mut::<MovementInput>();
        input.axis_raw = Vec2::new(1.0, 0.0);
        input.sprint_held = true;
    }
    let tuning = app.world().resource::<MovementTuning>().clone();

    app.update();
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().x,
        tuning.walk_speed
    );

    app.update();
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().x,
        tuning.sprint_speed
    );
}

#[test]
fn test_jump_sets_vertical_velocity_and_plays_sound() {
    let mut app = movement_test_app();
    let player = spawn_test_player(&mut app, true);
    app.world_mut().resource_mut::<MovementInput>().jump_just_pressed = true;

    app.update();

    let jump_speed = app.world().resource::<MovementTuning>().jump_speed;
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().y,
        jump_speed
    );
    assert_eq!(app.world().get::<JumpState>(player).unwrap().jump_count, 1);

    let sounds = app.world().resource::<Messages<PlaySoundEvent>>();
    let mut cursor = sounds.get_cursor();
    assert_eq!(cursor.read(sounds).count(), 1);
}

#[test]
fn test_knockback_suspends_player_control() {
    let mut app = movement_test_app();
    let player = spawn_test_player(&mut app, true);
    app.world_mut().get_mut::<Knockback>(player).unwrap().remaining = 0.5;
    {
        let mut input = app.world_mut().resource_mut::<MovementInput>();
        input.axis_raw = Vec2::new(1.0, 0.0);
        input.jump_just_pressed = true;
    }

    app.update();

    assert_eq!(
        *app.world().get::<ControlAuthority>(player).unwrap(),
        ControlAuthority::Knockback
    );
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().0,
        Vec2::new(0.0, -3.0)
    );
    assert_eq!(app.world().get::<JumpState>(player).unwrap().jump_count, 0);
}

#[test]
fn test_disabled_movement_locks_control() {
    let mut app = movement_test_app();
    let player = spawn_test_player(&mut app, true);
    app.world_mut().write_message(SetMovementEnabledEvent {
        target: player,
        enabled: false,
    });
    app.world_mut().resource_mut::<MovementInput>().axis_raw = Vec2::new(1.0, 0.0);

    app.update();

    assert_eq!(
        *app.world().get::<ControlAuthority>(player).unwrap(),
        ControlAuthority::Locked
    );
    assert!(!app.world().get::<MovementState>(player).unwrap().movement_enabled);
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().x, 0.0);
}

// -----------------------------------------------------------------------------
// Fixed-step translation
// -----------------------------------------------------------------------------

fn fixed_translation_app(axis: Vec2) -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .insert_resource(MovementInput {
            axis,
            ..default()
        })
        .add_systems(Update, apply_fixed_translation);
    app
}

fn step_fixed(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(100));
    app.update();
}

#[test]
fn test_fixed_translation_maps_axes_to_x_and_z() {
    let mut app = fixed_translation_app(Vec2::new(1.0, -0.5));
    let state = MovementState::new(80.0);
    let player = app
        .world_mut()
        .spawn((Player, state, Transform::default()))
        .id();

    step_fixed(&mut app);

    let translation = app.world().get::<Transform>(player).unwrap().translation;
    assert!((translation.x - 8.0).abs() < 1e-4);
    assert_eq!(translation.y, 0.0);
    assert!((translation.z + 4.0).abs() < 1e-4);
}

#[test]
fn test_fixed_translation_ignores_movement_lock() {
    let mut app = fixed_translation_app(Vec2::new(-1.0, 0.0));
    let mut state = MovementState::new(80.0);
    state.movement_enabled = false;
    let player = app
        .world_mut()
        .spawn((Player, state, ControlAuthority::Locked, Transform::default()))
        .id();

    step_fixed(&mut app);

    let translation = app.world().get::<Transform>(player).unwrap().translation;
    assert!((translation.x + 8.0).abs() < 1e-4);
}

#[test]
fn test_fixed_translation_idle_axis_holds_position() {
    let mut app = fixed_translation_app(Vec2::ZERO);
    let player = app
        .world_mut()
        .spawn((
            Player,
            MovementState::new(80.0),
            Transform::from_xyz(5.0, 6.0, 0.0),
        ))
        .id();

    step_fixed(&mut app);

    assert_eq!(
        app.world().get::<Transform>(player).map(|t| t.translation),
        Some(Vec3::new(5.0, 6.0, 0.0))
    );
}

// -----------------------------------------------------------------------------
// Platform contacts
// -----------------------------------------------------------------------------

fn platform_contact_app() -> App {
    let mut app = App::new();
    app.add_message::<CollisionStart>()
        .add_message::<CollisionEnd>()
        .add_systems(Update, track_platform_contacts);
    app
}

fn start(collider1: Entity, collider2: Entity) -> CollisionStart {
    CollisionStart {
        collider1,
        collider2,
        body1: None,
        body2: None,
    }
}

fn end(collider1: Entity, collider2: Entity) -> CollisionEnd {
    CollisionEnd {
        collider1,
        collider2,
        body1: None,
        body2: None,
    }
}

fn rider_of(app: &App, entity: Entity) -> (Option<Entity>, bool) {
    let rider = app.world().get::<PlatformRider>(entity).unwrap();
    (rider.platform, rider.platform_moving)
}

#[test]
fn test_platform_contact_attaches_and_detaches() {
    let mut app = platform_contact_app();
    let player = app
        .world_mut()
        .spawn((Player, PlatformRider::default()))
        .id();
    let platform = app
        .world_mut()
        .spawn((Region::MovingPlatform, Transform::from_xyz(30.0, 40.0, 0.0)))
        .id();

    app.world_mut().write_message(start(platform, player));
    app.update();
    assert_eq!(rider_of(&app, player), (Some(platform), true));

    app.world_mut().write_message(end(player, platform));
    app.update();
    assert_eq!(rider_of(&app, player), (None, false));
}

#[test]
fn test_other_regions_do_not_attach() {
    let mut app = platform_contact_app();
    let player = app
        .world_mut()
        .spawn((Player, PlatformRider::default()))
        .id();
    let checkpoint = app
        .world_mut()
        .spawn((Region::Checkpoint, Transform::default()))
        .id();
    let ledge = app.world_mut().spawn(Transform::default()).id();

    app.world_mut().write_message(start(player, checkpoint));
    app.world_mut().write_message(start(ledge, player));
    app.update();

    assert_eq!(rider_of(&app, player), (None, false));
}

#[test]
fn test_leaving_other_region_keeps_attachment() {
    let mut app = platform_contact_app();
    let player = app
        .world_mut()
        .spawn((Player, PlatformRider::default()))
        .id();
    let platform = app
        .world_mut()
        .spawn((Region::MovingPlatform, Transform::default()))
        .id();
    let checkpoint = app
        .world_mut()
        .spawn((Region::Checkpoint, Transform::default()))
        .id();

    app.world_mut().write_message(start(player, platform));
    app.update();
    app.world_mut().write_message(end(player, checkpoint));
    app.update();

    assert_eq!(rider_of(&app, player), (Some(platform), true));
}

// -----------------------------------------------------------------------------
// Plugin wiring
// -----------------------------------------------------------------------------

#[test]
#[should_panic(expected = "MovementPlugin requires LevelPlugin")]
fn test_plugin_refuses_to_start_without_level_collaborators() {
    let mut app = App::new();
    app.add_plugins(MovementPlugin);
    app.finish();
}

#[test]
fn test_plugin_starts_with_level_collaborators() {
    let mut app = App::new();
    app.init_resource::<DialogueFlags>()
        .add_message::<RespawnRequestedEvent>()
        .add_plugins(MovementPlugin);
    app.finish();
}
