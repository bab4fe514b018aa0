//! UI domain: attack cooldown bar.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{CooldownChanged, CooldownMaxChanged};

pub(crate) const COOLDOWN_BAR_WIDTH: f32 = 160.0;
pub(crate) const COOLDOWN_BAR_HEIGHT: f32 = 14.0;
pub(crate) const COOLDOWN_BAR_PADDING: f32 = 16.0;

/// Last values pushed to the widget
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CooldownBarState {
    pub min: i32,
    pub max: i32,
    pub current: i32,
}

impl CooldownBarState {
    /// Fill over the gauge's usable span, matching `CooldownGauge::percent`
    pub fn fill_percent(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0 {
            return 0.0;
        }
        ((self.current - self.min) as f32 / span as f32).clamp(0.0, 1.0) * 100.0
    }
}

/// Marker for the cooldown bar container
#[derive(Component)]
pub struct CooldownBarUI;

#[derive(Component)]
pub struct CooldownBarFill;

#[derive(Component)]
pub struct CooldownBarLabel;

pub(crate) fn spawn_cooldown_bar_ui(mut commands: Commands) {
    commands
        .spawn((
            CooldownBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(COOLDOWN_BAR_PADDING),
                top: Val::Px(COOLDOWN_BAR_PADDING),
                width: Val::Px(COOLDOWN_BAR_WIDTH),
                height: Val::Px(COOLDOWN_BAR_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                CooldownBarFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.3, 0.6, 0.95)),
            ));
        });

    commands.spawn((
        CooldownBarLabel,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(COOLDOWN_BAR_PADDING * 2.0 + COOLDOWN_BAR_WIDTH),
            top: Val::Px(COOLDOWN_BAR_PADDING - 2.0),
            ..default()
        },
    ));
}

pub(crate) fn receive_cooldown_updates(
    mut max_events: MessageReader<CooldownMaxChanged>,
    mut current_events: MessageReader<CooldownChanged>,
    mut state: ResMut<CooldownBarState>,
) {
    for event in max_events.read() {
        state.min = event.min;
        state.max = event.max;
    }
    for event in current_events.read() {
        state.current = event.current;
    }
}

pub(crate) fn update_cooldown_bar(
    state: Res<CooldownBarState>,
    mut fill_query: Query<&mut Node, With<CooldownBarFill>>,
    mut label_query: Query<&mut Text, With<CooldownBarLabel>>,
) {
    if !state.is_changed() {
        return;
    }

    for mut node in &mut fill_query {
        node.width = Val::Percent(state.fill_percent());
    }
    for mut text in &mut label_query {
        text.0 = format!("Skill {}/{}", state.current, state.max);
    }
}
