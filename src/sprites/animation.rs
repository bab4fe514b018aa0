//! Animation parameters and playback.
//!
//! The controller publishes three parameters (speed, grounded, attacking).
//! `AnimationController` turns them into a state and advances frames.

use avian2d::prelude::*;
use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::combat::AttackState;
use crate::movement::{MovementState, MovementTuning, is_falling};

/// Parameters pushed to the animator every tick.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimatorParams {
    /// Horizontal speed magnitude
    pub speed: f32,
    pub grounded: bool,
    pub attacking: bool,
}

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
    Fall,
    Attack,
}

impl AnimationState {
    /// Pick a state from the animator parameters.
    ///
    /// Attacking wins over everything; airborne splits on vertical direction;
    /// grounded motion above `walk_speed` counts as running.
    pub fn from_params(params: &AnimatorParams, rising: bool, walk_speed: f32) -> Self {
        if params.attacking {
            AnimationState::Attack
        } else if !params.grounded {
            if rising {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if params.speed > walk_speed {
            AnimationState::Run
        } else if params.speed > 0.0 {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }

    /// Placeholder tint until the character sheet lands.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.85, 0.85, 0.9),
            AnimationState::Walk => Color::srgb(0.75, 0.85, 1.0),
            AnimationState::Run => Color::srgb(0.6, 0.8, 1.0),
            AnimationState::Jump => Color::srgb(0.9, 0.9, 0.6),
            AnimationState::Fall => Color::srgb(0.8, 0.7, 0.5),
            AnimationState::Attack => Color::srgb(1.0, 0.5, 0.4),
        }
    }
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
    /// Whether a non-looping animation has reached its last frame.
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    /// Returns true on a transition.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        self.looping = matches!(
            state,
            AnimationState::Idle | AnimationState::Walk | AnimationState::Run
        );

        self.total_frames = match state {
            AnimationState::Idle | AnimationState::Walk => 4,
            AnimationState::Run => 6,
            AnimationState::Jump | AnimationState::Fall => 2,
            AnimationState::Attack => 3,
        };

        self.frame_duration = match state {
            AnimationState::Attack => 0.08,
            _ => 0.15,
        };
        true
    }

    /// Advance playback by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        self.frame_timer += dt;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    return;
                }
            }
        }
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Publishes the final velocity and flags of the tick to the animator.
pub(crate) fn sync_animator_params(
    mut query: Query<(
        &LinearVelocity,
        &MovementState,
        &AttackState,
        &mut AnimatorParams,
    )>,
) {
    for (velocity, state, attack, mut params) in &mut query {
        let next = AnimatorParams {
            speed: velocity.x.abs(),
            grounded: state.on_ground,
            attacking: attack.active,
        };
        params.set_if_neq(next);
    }
}

pub(crate) fn animation_state_machine(
    tuning: Res<MovementTuning>,
    mut query: Query<(
        Entity,
        &AnimatorParams,
        &LinearVelocity,
        &mut AnimationController,
    )>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, params, velocity, mut controller) in &mut query {
        let next = AnimationState::from_params(params, !is_falling(velocity), tuning.walk_speed);
        let from = controller.state;
        if controller.set_state(next) {
            changed_events.write(AnimationStateChanged {
                entity,
                from,
                to: next,
            });
        }
    }
}

pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<&mut AnimationController>,
) {
    let dt = time.delta_secs();
    for mut controller in &mut query {
        controller.advance(dt);
    }
}
