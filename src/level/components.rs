//! Level domain: region tags, respawn points and platform paths.

use bevy::prelude::*;

/// Tag carried by trigger regions and moving platforms
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    KillPlane,
    Checkpoint,
    Throne,
    MovingPlatform,
}

/// What entering a region asks of the level collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RegionEffect {
    Respawn,
    SetCheckpoint(Vec3),
    EnterFinalArea,
}

impl Region {
    /// Effect of the character entering this region at `position`.
    ///
    /// Moving platforms are handled by the movement domain.
    pub fn on_enter(self, position: Vec3) -> Option<RegionEffect> {
        match self {
            Region::KillPlane => Some(RegionEffect::Respawn),
            Region::Checkpoint => Some(RegionEffect::SetCheckpoint(position.with_z(0.0))),
            Region::Throne => Some(RegionEffect::EnterFinalArea),
            Region::MovingPlatform => None,
        }
    }
}

/// Where the level manager puts the character back
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct RespawnPoint(pub Vec3);

/// Kinematic ping-pong path between two points.
#[derive(Component, Debug, Clone)]
pub struct PlatformPath {
    pub start: Vec2,
    pub end: Vec2,
    pub speed: f32,
    pub heading_to_end: bool,
}

/// Distance at which a platform counts as having reached a path end
pub const PATH_ARRIVAL_DISTANCE: f32 = 2.0;

impl PlatformPath {
    pub fn new(start: Vec2, end: Vec2, speed: f32) -> Self {
        Self {
            start,
            end,
            speed,
            heading_to_end: true,
        }
    }

    fn target(&self) -> Vec2 {
        if self.heading_to_end {
            self.end
        } else {
            self.start
        }
    }

    /// Velocity toward the current target, turning around on arrival.
    pub fn velocity_at(&mut self, position: Vec2) -> Vec2 {
        if position.distance(self.target()) <= PATH_ARRIVAL_DISTANCE {
            self.heading_to_end = !self.heading_to_end;
        }
        (self.target() - position).normalize_or_zero() * self.speed
    }
}

/// Knocks the character back on contact
#[derive(Component, Debug)]
pub struct Hazard;

/// Destroyed by the hit region; refunds cooldown to the attacker
#[derive(Component, Debug)]
pub struct Breakable {
    pub restores: u32,
}

/// Static level geometry
#[derive(Component, Debug)]
pub struct Ground;
