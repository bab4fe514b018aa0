//! UI domain: tests for the cooldown widget and victory overlay.

use bevy::prelude::*;

use super::CooldownBarState;
use super::hud_cooldown::receive_cooldown_updates;
use super::victory::{VictoryOverlayUI, show_victory_overlay};
use crate::combat::{CooldownChanged, CooldownGauge, CooldownMaxChanged};
use crate::level::{DialogueFlags, LevelManager};

fn bar(min: i32, max: i32, current: i32) -> CooldownBarState {
    CooldownBarState { min, max, current }
}

#[test]
fn test_fill_percent() {
    assert_eq!(bar(0, 2, 1).fill_percent(), 50.0);
    assert_eq!(bar(0, 0, 0).fill_percent(), 0.0);
    assert_eq!(bar(0, 2, 5).fill_percent(), 100.0);
}

#[test]
fn test_fill_percent_spans_from_min() {
    // Raised floor: at min the bar is empty, not a third full
    assert_eq!(bar(1, 3, 1).fill_percent(), 0.0);
    assert_eq!(bar(1, 3, 2).fill_percent(), 50.0);

    let mut gauge = CooldownGauge::new(1, 3);
    gauge.consume(1);
    assert_eq!(
        bar(gauge.min, gauge.max, gauge.current).fill_percent(),
        gauge.percent() * 100.0
    );
}

#[test]
fn test_widget_tracks_latest_values() {
    let mut app = App::new();
    app.init_resource::<CooldownBarState>()
        .add_message::<CooldownMaxChanged>()
        .add_message::<CooldownChanged>()
        .add_systems(Update, receive_cooldown_updates);

    let entity = app.world_mut().spawn_empty().id();
    app.world_mut()
        .write_message(CooldownMaxChanged {
            entity,
            min: 1,
            max: 3,
        });
    app.world_mut()
        .write_message(CooldownChanged { entity, current: 2 });
    app.world_mut()
        .write_message(CooldownChanged { entity, current: 1 });
    app.update();

    assert_eq!(
        *app.world().resource::<CooldownBarState>(),
        bar(1, 3, 1)
    );
}

#[test]
fn test_victory_overlay_spawns_once() {
    let mut app = App::new();
    app.init_resource::<DialogueFlags>()
        .init_resource::<LevelManager>()
        .add_systems(Update, show_victory_overlay);

    app.update();
    let mut overlays = app
        .world_mut()
        .query_filtered::<(), With<VictoryOverlayUI>>();
    assert_eq!(overlays.iter(app.world()).count(), 0);

    app.world_mut().resource_mut::<DialogueFlags>().in_final_area = true;
    app.update();
    app.update();
    assert_eq!(overlays.iter(app.world()).count(), 1);
}
