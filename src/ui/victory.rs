//! UI domain: throne room overlay.

use bevy::prelude::*;

use crate::level::{DialogueFlags, LevelManager};

/// Marker for victory overlay root
#[derive(Component, Debug)]
pub struct VictoryOverlayUI;

pub(crate) fn show_victory_overlay(
    mut commands: Commands,
    flags: Res<DialogueFlags>,
    level: Res<LevelManager>,
    existing: Query<(), With<VictoryOverlayUI>>,
) {
    if !flags.in_final_area || !existing.is_empty() {
        return;
    }

    let bg_color = Color::srgba(0.02, 0.05, 0.1, 0.85);
    let title_color = Color::srgb(0.95, 0.85, 0.3);
    let text_color = Color::srgb(0.9, 0.9, 0.9);

    commands
        .spawn((
            VictoryOverlayUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(bg_color),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("THE THRONE"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("Falls: {}", level.respawn_count)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(text_color),
            ));
        });

    info!("Victory overlay shown");
}
