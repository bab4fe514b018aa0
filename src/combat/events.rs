//! Combat domain: inbound requests and cooldown display signals.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Start or restart a knockback on the target
#[derive(Debug)]
pub struct ApplyKnockbackEvent {
    pub target: Entity,
}

impl Message for ApplyKnockbackEvent {}

/// Enable or disable player control (e.g. at a scripted level end)
#[derive(Debug)]
pub struct SetMovementEnabledEvent {
    pub target: Entity,
    pub enabled: bool,
}

impl Message for SetMovementEnabledEvent {}

#[derive(Debug)]
pub struct ConsumeCooldownEvent {
    pub target: Entity,
    pub amount: u32,
}

impl Message for ConsumeCooldownEvent {}

#[derive(Debug)]
pub struct RestoreCooldownEvent {
    pub target: Entity,
    pub amount: u32,
}

impl Message for RestoreCooldownEvent {}

/// "Set maximum cooldown" for the display widget, with the floor the gauge
/// empties to
#[derive(Debug)]
pub struct CooldownMaxChanged {
    pub entity: Entity,
    pub min: i32,
    pub max: i32,
}

impl Message for CooldownMaxChanged {}

/// "Set displayed cooldown" for the display widget
#[derive(Debug)]
pub struct CooldownChanged {
    pub entity: Entity,
    pub current: i32,
}

impl Message for CooldownChanged {}
