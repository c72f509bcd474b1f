//! Collector movement, resizing, and clamping behavior, driven through a
//! headless app with a manually advanced clock.

use std::time::Duration;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use rain_catcher::core::config::{
    COLLECTOR_BOTTOM_MARGIN, COLLECTOR_SIZE, MIN_COLLECTOR_SIZE, RESIZE_STEP,
};
use rain_catcher::core::{Collector, GameState, PlayArea};
use rain_catcher::gameplay::GameplayPlugin;

/// Builds a headless app already switched into the playing state.
fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin));
    app.add_plugins(GameplayPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO));
    app.update();
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
    app
}

/// Runs one frame with the given simulated delta.
fn advance(app: &mut App, dt: f32) {
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        dt,
    )));
    app.update();
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

fn collector_translation(app: &mut App) -> Vec3 {
    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<Collector>>();
    query.single(app.world()).translation
}

fn set_collector_x(app: &mut App, x: f32) {
    let mut query = app
        .world_mut()
        .query_filtered::<&mut Transform, With<Collector>>();
    query.single_mut(app.world_mut()).translation.x = x;
}

fn set_collector_size(app: &mut App, size: f32) {
    let mut query = app.world_mut().query::<&mut Collector>();
    let mut collector = query.single_mut(app.world_mut());
    collector.width = size;
    collector.height = size;
}

fn collector_size(app: &mut App) -> (f32, f32) {
    let mut query = app.world_mut().query::<&Collector>();
    let collector = query.single(app.world());
    (collector.width, collector.height)
}

#[test]
fn collector_spawns_centered_above_bottom_margin() {
    let mut app = test_app();
    let area = PlayArea::default();

    let translation = collector_translation(&mut app);
    let expected_y = area.bottom() + COLLECTOR_BOTTOM_MARGIN + COLLECTOR_SIZE / 2.0;
    assert!(
        translation.x.abs() < 1e-3,
        "collector should start horizontally centered"
    );
    assert!(
        (translation.y - expected_y).abs() < 1e-3,
        "collector bottom edge should sit on the bottom margin"
    );

    let (width, height) = collector_size(&mut app);
    assert!(
        (width - COLLECTOR_SIZE).abs() < f32::EPSILON,
        "starting width"
    );
    assert!(
        (height - COLLECTOR_SIZE).abs() < f32::EPSILON,
        "starting height"
    );
}

#[test]
fn held_left_key_moves_collector_by_speed_times_delta() {
    let mut app = test_app();
    // Left edge 100 px from the play-area edge, i.e. 300 px left of center
    // for the default 800 px width and 64 px collector.
    set_collector_x(&mut app, -268.0);

    press(&mut app, KeyCode::ArrowLeft);
    advance(&mut app, 0.1);

    let translation = collector_translation(&mut app);
    assert!(
        (translation.x - -298.0).abs() < 1e-3,
        "0.1 s at 300 px/s should move the collector 30 px left, got {}",
        translation.x
    );
}

#[test]
fn collector_never_leaves_play_area() {
    let mut app = test_app();
    let area = PlayArea::default();

    press(&mut app, KeyCode::ArrowRight);
    advance(&mut app, 1.0);
    advance(&mut app, 1.0);

    let max_x = area.right() - COLLECTOR_SIZE / 2.0;
    let translation = collector_translation(&mut app);
    assert!(
        (translation.x - max_x).abs() < 1e-3,
        "collector should be clamped to the right edge"
    );

    release(&mut app, KeyCode::ArrowRight);
    press(&mut app, KeyCode::ArrowLeft);
    for _ in 0..5 {
        advance(&mut app, 1.0);
    }

    let min_x = area.left() + COLLECTOR_SIZE / 2.0;
    let translation = collector_translation(&mut app);
    assert!(
        (translation.x - min_x).abs() < 1e-3,
        "collector should be clamped to the left edge"
    );
}

#[test]
fn out_of_bounds_position_is_clamped_without_input() {
    let mut app = test_app();
    let area = PlayArea::default();

    set_collector_x(&mut app, area.right() + 100.0);
    advance(&mut app, 0.0);

    let translation = collector_translation(&mut app);
    assert!(
        (translation.x - (area.right() - COLLECTOR_SIZE / 2.0)).abs() < 1e-3,
        "clamp applies even on a zero-delta tick"
    );
}

#[test]
fn up_key_grows_collector_in_fixed_steps() {
    let mut app = test_app();
    let area = PlayArea::default();

    press(&mut app, KeyCode::ArrowUp);
    let mut expected = COLLECTOR_SIZE;
    for _ in 0..3 {
        advance(&mut app, 1.0 / 60.0);
        expected += RESIZE_STEP;
        let (width, height) = collector_size(&mut app);
        assert!(
            (width - expected).abs() < f32::EPSILON,
            "width should grow by exactly one step per tick"
        );
        assert!(
            (height - expected).abs() < f32::EPSILON,
            "height should grow by exactly one step per tick"
        );
    }

    // The bottom edge stays anchored while the collector grows upward.
    let translation = collector_translation(&mut app);
    let expected_y = area.bottom() + COLLECTOR_BOTTOM_MARGIN + expected / 2.0;
    assert!(
        (translation.y - expected_y).abs() < 1e-3,
        "collector should stay bottom-anchored while resizing"
    );
}

#[test]
fn down_key_at_band_floor_is_cancelled_by_correction() {
    let mut app = test_app();
    set_collector_size(&mut app, MIN_COLLECTOR_SIZE);

    press(&mut app, KeyCode::ArrowDown);
    advance(&mut app, 1.0 / 60.0);

    // The key shrinks below the band and the correction immediately
    // steps back up, in the same tick.
    let (width, height) = collector_size(&mut app);
    assert!(
        (width - MIN_COLLECTOR_SIZE).abs() < f32::EPSILON,
        "width should be pushed straight back to the floor"
    );
    assert!(
        (height - MIN_COLLECTOR_SIZE).abs() < f32::EPSILON,
        "height should be pushed straight back to the floor"
    );
}

#[test]
fn undersized_collector_walks_back_one_step_per_tick() {
    let mut app = test_app();
    set_collector_size(&mut app, 10.0);

    for expected in [13.0, 16.0, 19.0, 22.0] {
        advance(&mut app, 0.0);
        let (width, _) = collector_size(&mut app);
        assert!(
            (width - expected).abs() < f32::EPSILON,
            "correction steps, never snaps: expected {expected}, got {width}"
        );
    }

    // 22 is inside the band, so the size settles there.
    advance(&mut app, 0.0);
    let (width, _) = collector_size(&mut app);
    assert!(
        (width - 22.0).abs() < f32::EPSILON,
        "in-band size must stay put"
    );
}

#[test]
fn oversized_collector_shrinks_one_step_per_tick() {
    let mut app = test_app();
    set_collector_size(&mut app, 260.0);

    advance(&mut app, 0.0);
    let (width, height) = collector_size(&mut app);
    assert!(
        (width - 257.0).abs() < f32::EPSILON,
        "oversized width shrinks by one step"
    );
    assert!(
        (height - 257.0).abs() < f32::EPSILON,
        "oversized height shrinks by one step"
    );
}
