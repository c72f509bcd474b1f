use bevy::diagnostic::{Diagnostic, DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use game_helpers::FONT;

use crate::core::{Collector, GameState, PlayArea, Score};

/// Component tag for the score display
#[derive(Component)]
pub struct ScoreDisplay;

/// Component tag for the debug overlay text
#[derive(Component)]
pub struct DebugOverlay;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(FrameTimeDiagnosticsPlugin)
            .add_systems(OnEnter(GameState::Playing), spawn_hud)
            .add_systems(
                Update,
                (
                    update_score_display,
                    toggle_debug_overlay,
                    update_debug_overlay,
                )
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Spawns the score line and the debug overlay (hidden until toggled)
pub fn spawn_hud(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    area: Res<PlayArea>,
    mut clear_color: ResMut<ClearColor>,
) {
    clear_color.0 = Color::srgb(0.0, 0.0, 0.2); // Night blue

    commands.spawn((
        Text2d::new("Drops collected: 0"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Left),
        Transform::from_xyz(area.left() + 120.0, area.top() - 30.0, 1.0),
        ScoreDisplay,
    ));

    commands.spawn((
        Text2d::new(String::new()),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 18.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Left),
        Transform::from_xyz(area.left() + 120.0, area.top() - 80.0, 1.0),
        Visibility::Hidden,
        DebugOverlay,
    ));
}

/// Keeps the score line current
pub fn update_score_display(
    score: Res<Score>,
    mut score_query: Query<&mut Text2d, With<ScoreDisplay>>,
) {
    if let Some(mut text) = score_query.iter_mut().next() {
        *text = Text2d::new(format!("Drops collected: {}", score.0));
    }
}

/// Shows or hides the debug overlay with F3
pub fn toggle_debug_overlay(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut overlay_query: Query<&mut Visibility, With<DebugOverlay>>,
) {
    if keyboard_input.just_pressed(KeyCode::F3) {
        for mut visibility in &mut overlay_query {
            *visibility = match *visibility {
                Visibility::Hidden => Visibility::Visible,
                _ => Visibility::Hidden,
            };
        }
    }
}

/// Writes the frame rate and collector dimensions into the overlay while
/// it is visible
pub fn update_debug_overlay(
    diagnostics: Res<DiagnosticsStore>,
    collector_query: Query<&Collector>,
    mut overlay_query: Query<(&mut Text2d, &Visibility), With<DebugOverlay>>,
) {
    let Ok((mut text, visibility)) = overlay_query.get_single_mut() else {
        return;
    };
    if *visibility != Visibility::Visible {
        return;
    }
    let Ok(collector) = collector_query.get_single() else {
        return;
    };

    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(Diagnostic::smoothed)
        .unwrap_or_default();

    *text = Text2d::new(format!(
        "FPS: {fps:.0}\ncollector: {} x {}",
        collector.width, collector.height
    ));
}
