use bevy::prelude::*;
use game_helpers::FONT;

use crate::core::{GameState, PlayArea};

/// Component marker for welcome screen entities
#[derive(Component)]
pub struct WelcomeScreen;

pub struct WelcomePlugin;

impl Plugin for WelcomePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Welcome), spawn_welcome_screen)
            .add_systems(
                Update,
                handle_welcome_input.run_if(in_state(GameState::Welcome)),
            )
            .add_systems(OnExit(GameState::Welcome), despawn_welcome_screen);
    }
}

/// Spawns the two-line welcome message
pub fn spawn_welcome_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    area: Res<PlayArea>,
    mut clear_color: ResMut<ClearColor>,
) {
    clear_color.0 = Color::srgb(0.2, 0.4, 0.4); // Teal

    commands.spawn((
        Text2d::new("Welcome to Rain Catcher!"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 40.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, area.height / 4.0, 0.0),
        WelcomeScreen,
    ));

    commands.spawn((
        Text2d::new("Tap anywhere to begin!"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextLayout::new_with_justify(JustifyText::Center),
        TextColor(Color::WHITE),
        Transform::from_xyz(0.0, -area.height / 4.0, 0.0),
        WelcomeScreen,
    ));
}

/// Starts the game on any click or touch
pub fn handle_welcome_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if mouse_input.just_pressed(MouseButton::Left) || touch_input.any_just_pressed() {
        info!("Starting game");
        next_state.set(GameState::Playing);
    }
}

/// Cleans up the welcome screen entities
pub fn despawn_welcome_screen(mut commands: Commands, query: Query<Entity, With<WelcomeScreen>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
