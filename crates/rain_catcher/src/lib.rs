use bevy::prelude::*;

pub mod audio;
pub mod core;
pub mod gameplay;
pub mod ui;
pub mod welcome;

use audio::GameAudioPlugin;
use gameplay::GameplayPlugin;
use ui::HudPlugin;
use welcome::WelcomePlugin;

/// Entry point for the game
pub fn run() {
    let mut app = game_helpers::get_default_app("Rain Catcher");

    app.add_plugins(GameplayPlugin)
        .add_plugins(WelcomePlugin)
        .add_plugins(HudPlugin)
        .add_plugins(GameAudioPlugin)
        .add_systems(Startup, setup_camera);

    app.run();
}

/// Sets up the main 2D camera
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
