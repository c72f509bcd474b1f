use bevy::prelude::*;
use bevy::window::{WindowMode, WindowResolution};

pub const FONT: &str = "fonts/FiraSans-Bold.ttf";

// Logical playfield resolution, shared by window setup and game logic.
pub const WINDOW_WIDTH: f32 = 800.0;
pub const WINDOW_HEIGHT: f32 = 480.0;

// Creates a Bevy app with the default settings every screen relies on.
// This prevents duplication / errors across launchers.
pub fn get_default_app(title: &str) -> App {
    let mut app = App::new();

    let resolution = WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    let window_plugin = WindowPlugin {
        primary_window: Some(Window {
            title: title.to_string(),
            present_mode: bevy::window::PresentMode::Fifo,
            resolution,
            mode: WindowMode::Windowed,
            ..default()
        }),
        ..default()
    };

    app.add_plugins(DefaultPlugins.set(window_plugin));

    // Paces presentation to the display refresh rate.
    // https://github.com/aevyrie/bevy_framepace
    app.add_plugins(bevy_framepace::FramepacePlugin);

    app.insert_resource(ClearColor(Color::BLACK));

    app
}
