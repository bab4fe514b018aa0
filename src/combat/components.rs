//! Combat domain: knockback, cooldown gauge and attack sequencing state.

use bevy::prelude::*;

use crate::movement::Facing;

/// Timed velocity override. Active while `remaining > 0`.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Knockback {
    pub remaining: f32,
}

impl Knockback {
    /// Start (or restart) a knockback of `total_duration` seconds.
    pub fn apply(&mut self, total_duration: f32) {
        self.remaining = total_duration;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advance by `dt` and return the velocity the knockback forces this tick.
    pub fn tick(&mut self, dt: f32, facing: Facing, force: f32) -> Vec2 {
        self.remaining -= dt;
        knockback_velocity(facing, force)
    }
}

/// Push away from the direction the character faces, always upward.
pub fn knockback_velocity(facing: Facing, force: f32) -> Vec2 {
    match facing {
        Facing::Right => Vec2::new(-force, force),
        Facing::Left => Vec2::new(force, force),
    }
}

/// Outcome of a gauge mutation, used to decide which signals to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeChange {
    Consumed { current: i32 },
    Restored { current: i32 },
    Unchanged,
}

/// Bounded integer gauge gating the attack.
///
/// `min <= current <= max` holds after every mutation.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CooldownGauge {
    pub current: i32,
    pub min: i32,
    pub max: i32,
}

impl CooldownGauge {
    /// A full gauge. A `max` below `min` is raised to `min`.
    pub fn new(min: i32, max: i32) -> Self {
        let max = max.max(min);
        Self {
            current: max,
            min,
            max,
        }
    }

    pub fn can_spend(&self) -> bool {
        self.current > self.min
    }

    pub fn consume(&mut self, amount: u32) -> GaugeChange {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        if self.current > self.min {
            self.current = self.current.saturating_sub(amount).max(self.min);
            GaugeChange::Consumed {
                current: self.current,
            }
        } else {
            self.current = self.min;
            GaugeChange::Unchanged
        }
    }

    pub fn restore(&mut self, amount: u32) -> GaugeChange {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        if self.current < self.max {
            self.current = self.current.saturating_add(amount).min(self.max);
            GaugeChange::Restored {
                current: self.current,
            }
        } else {
            self.current = self.max;
            GaugeChange::Unchanged
        }
    }

    pub fn percent(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0 {
            return 0.0;
        }
        (self.current - self.min) as f32 / span as f32
    }
}

/// Attack sequencer: Idle -> Active -> Idle.
///
/// Every trigger pushes its own close timer. The hit region stays open until
/// the last in-flight timer elapses.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    pub active: bool,
    /// Seconds left on each in-flight activation
    pub timers: Vec<f32>,
}

impl AttackState {
    pub fn can_trigger(&self, gauge: &CooldownGauge, allow_overlap: bool) -> bool {
        gauge.can_spend() && (allow_overlap || !self.active)
    }

    pub fn begin(&mut self, time_for_animation: f32) {
        self.timers.push(time_for_animation);
        self.active = true;
    }

    /// Advance all timers. Returns true when the sequence closed this tick.
    pub fn tick(&mut self, dt: f32) -> bool {
        for timer in &mut self.timers {
            *timer -= dt;
        }
        self.timers.retain(|t| *t > 0.0);

        if self.active && self.timers.is_empty() {
            self.active = false;
            return true;
        }
        false
    }

    /// Drop every in-flight activation. Returns true if one was open.
    pub fn force_close(&mut self) -> bool {
        let was_active = self.active;
        self.timers.clear();
        self.active = false;
        was_active
    }

    pub fn in_flight(&self) -> usize {
        self.timers.len()
    }
}

/// Sensor collider opened while the owner's attack is active
#[derive(Component, Debug)]
pub struct HitRegion {
    pub owner: Entity,
    /// Horizontal distance from the owner, mirrored by facing
    pub offset: f32,
}
