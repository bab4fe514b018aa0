//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, static and moving platforms)
    Ground,
    /// Player character
    Player,
    /// Trigger regions (kill planes, checkpoints, throne, hazards)
    Sensor,
    /// Player hit region (breaks breakables)
    PlayerHitbox,
    /// Targets the hit region can destroy
    Breakable,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Component, Debug)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    /// Current horizontal speed. Sprinting rewrites this in place; there is
    /// no separate sprint flag.
    pub move_speed: f32,
    pub movement_enabled: bool,
}

impl MovementState {
    pub fn new(walk_speed: f32) -> Self {
        Self {
            on_ground: false,
            facing: Facing::Right,
            move_speed: walk_speed,
            movement_enabled: true,
        }
    }
}

/// Which branch of the tick owns the velocity.
///
/// Resolved once per tick before any timer advances, so a knockback that
/// runs out mid-tick still owns that tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlAuthority {
    /// Movement disabled: only sensing and animation sync run
    Locked,
    /// Knockback drives the velocity exclusively
    Knockback,
    /// Normal input-driven control
    #[default]
    Player,
}

impl ControlAuthority {
    pub fn resolve(movement_enabled: bool, knockback_active: bool) -> Self {
        if !movement_enabled {
            ControlAuthority::Locked
        } else if knockback_active {
            ControlAuthority::Knockback
        } else {
            ControlAuthority::Player
        }
    }

    pub fn is_player(self) -> bool {
        self == ControlAuthority::Player
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Air,
}

#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JumpState {
    pub jump_count: u8,
    pub double_jump_consumed: bool,
}

impl JumpState {
    /// Evaluate this tick's jump press. Returns the jump performed, if any.
    pub fn try_jump(&mut self, pressed: bool, on_ground: bool) -> Option<JumpKind> {
        if pressed && on_ground && self.jump_count == 0 {
            self.jump_count = self.jump_count.saturating_add(1);
            self.double_jump_consumed = false;
            Some(JumpKind::Ground)
        } else if pressed && !on_ground && self.jump_count <= 1 && !self.double_jump_consumed {
            // The air jump hands jump_count back to 0 rather than 2.
            self.jump_count = 0;
            self.double_jump_consumed = true;
            Some(JumpKind::Air)
        } else {
            self.jump_count = 0;
            None
        }
    }
}

/// Circle probe at the character's feet
#[derive(Component, Debug, Clone, Copy)]
pub struct GroundProbe {
    pub offset: Vec2,
    pub radius: f32,
}

/// Weak relation to the moving platform currently being ridden.
#[derive(Component, Debug, Default)]
pub struct PlatformRider {
    pub platform: Option<Entity>,
    /// Platform position at the last carry step
    pub last_platform_position: Vec2,
    pub platform_moving: bool,
}

impl PlatformRider {
    pub fn attach(&mut self, platform: Entity, position: Vec2) {
        self.platform = Some(platform);
        self.last_platform_position = position;
        self.platform_moving = true;
    }

    pub fn detach(&mut self) {
        self.platform = None;
        self.platform_moving = false;
    }

    /// Displacement to apply to the rider this tick.
    ///
    /// `platform_position` is `None` when the platform no longer exists, in
    /// which case the rider lets go.
    pub fn carry(&mut self, platform_position: Option<Vec2>) -> Vec2 {
        if self.platform.is_none() {
            return Vec2::ZERO;
        }

        match platform_position {
            Some(position) => {
                let delta = position - self.last_platform_position;
                self.last_platform_position = position;
                delta
            }
            None => {
                self.detach();
                Vec2::ZERO
            }
        }
    }
}

/// Orientation published for the presentation layer
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct VisualOrientation {
    pub facing_sign: f32,
    /// Set while riding a moving platform whose own scale must be offset
    pub compensate_parent_scale: bool,
}

impl Default for VisualOrientation {
    fn default() -> Self {
        Self {
            facing_sign: 1.0,
            compensate_parent_scale: false,
        }
    }
}

pub fn is_falling(velocity: &LinearVelocity) -> bool {
    velocity.y < 0.0
}
