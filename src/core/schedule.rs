//! Core domain: ordered system sets for the per-frame character tick.

use bevy::prelude::*;

/// Stages of the variable-rate tick, run in declaration order.
///
/// The fixed-rate translation lives in `FixedUpdate` and is not part of
/// this chain.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Keyboard sampling into input resources
    Input,
    /// Collision start/end notifications from tagged regions
    Contacts,
    /// Inbound requests, platform carry and the ground probe
    Sense,
    /// Decide who owns the velocity this tick
    Authority,
    /// Knockback override or player-driven movement, jumping and attacks
    Act,
    /// Presentation signals derived from the final state
    Sync,
}
