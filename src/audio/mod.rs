//! Audio domain: fire-and-forget sound cues.

mod manifest;


pub use manifest::SoundBank;

use bevy::ecs::message::{Message, MessageReader};
use bevy::prelude::*;

use crate::audio::manifest::load_sound_bank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Skill,
    Hurt,
}

impl SoundCue {
    /// Key of the clip in the sound manifest
    pub fn key(self) -> &'static str {
        match self {
            SoundCue::Jump => "jump",
            SoundCue::Skill => "skill",
            SoundCue::Hurt => "hurt",
        }
    }
}

#[derive(Debug)]
pub struct PlaySoundEvent {
    pub cue: SoundCue,
}

impl Message for PlaySoundEvent {}

pub struct SfxPlugin;

impl Plugin for SfxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_message::<PlaySoundEvent>()
            .add_systems(Startup, load_sound_bank)
            .add_systems(PostUpdate, play_sounds);
    }
}

fn play_sounds(
    mut commands: Commands,
    mut events: MessageReader<PlaySoundEvent>,
    bank: Res<SoundBank>,
) {
    for event in events.read() {
        let Some(handle) = bank.get(event.cue.key()) else {
            debug!("No clip for {:?}", event.cue);
            continue;
        };
        commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
    }
}
