//! Level domain: requests handled by the level manager.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct RespawnRequestedEvent {
    pub entity: Entity,
}

impl Message for RespawnRequestedEvent {}
