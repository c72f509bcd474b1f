use bevy::prelude::*;
use game_helpers::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Game states that control the flow of the application
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum GameState {
    #[default]
    Welcome,
    Playing,
}

/// Logical playfield geometry, injected once at startup and read by both
/// screens. World coordinates put the origin at the playfield center.
#[derive(Resource, Clone, Copy)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

impl PlayArea {
    pub const fn left(&self) -> f32 {
        -self.width / 2.0
    }

    pub const fn right(&self) -> f32 {
        self.width / 2.0
    }

    pub const fn bottom(&self) -> f32 {
        -self.height / 2.0
    }

    pub const fn top(&self) -> f32 {
        self.height / 2.0
    }
}

/// Component for the player-controlled collector
#[derive(Component)]
pub struct Collector {
    /// Logical width used for collision and clamping
    pub width: f32,
    /// Logical height used for collision
    pub height: f32,
}

impl Collector {
    /// Steps both dimensions uniformly. Key resize and band correction
    /// only ever change size through this.
    pub fn resize_by(&mut self, step: f32) {
        self.width += step;
        self.height += step;
    }
}

/// Marker component for falling drop entities
#[derive(Component)]
pub struct Raindrop;

/// Tracks the player's score
#[derive(Resource, Default)]
pub struct Score(pub u32);

/// Controls drop spawn timing
#[derive(Resource)]
pub struct SpawnTimer {
    /// Seconds accumulated since the last spawn
    pub elapsed: f32,
    /// Rolled interval the elapsed time must strictly exceed
    pub interval: f32,
}

impl SpawnTimer {
    /// Resets the elapsed time and rolls a fresh spawn interval.
    pub fn reroll(&mut self) {
        self.elapsed = 0.0;
        self.interval = fastrand::f32().mul_add(
            config::MAX_SPAWN_INTERVAL - config::MIN_SPAWN_INTERVAL,
            config::MIN_SPAWN_INTERVAL,
        );
    }
}

impl Default for SpawnTimer {
    fn default() -> Self {
        let mut timer = Self {
            elapsed: 0.0,
            interval: config::MIN_SPAWN_INTERVAL,
        };
        timer.reroll();
        timer
    }
}

/// Frame delta in seconds. A negative or non-finite delta is treated as
/// zero so position and size updates stay well-defined.
pub fn frame_delta(time: &Time) -> f32 {
    let dt = time.delta_secs();
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

/// Game configuration constants
pub mod config {
    // Collector configuration
    pub const COLLECTOR_SIZE: f32 = 64.0;
    pub const COLLECTOR_SPEED: f32 = 300.0;
    pub const COLLECTOR_BOTTOM_MARGIN: f32 = 20.0;
    pub const MIN_COLLECTOR_SIZE: f32 = 20.0;
    pub const MAX_COLLECTOR_SIZE: f32 = 250.0;
    pub const RESIZE_STEP: f32 = 3.0;

    // Drop configuration
    pub const DROP_SIZE: f32 = 64.0;
    pub const DROP_FALL_SPEED: f32 = 200.0;

    // Spawn timing bounds in seconds
    pub const MIN_SPAWN_INTERVAL: f32 = 0.3;
    pub const MAX_SPAWN_INTERVAL: f32 = 1.2;
}
