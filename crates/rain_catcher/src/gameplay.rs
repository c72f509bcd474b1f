use bevy::prelude::*;
use game_helpers::input::pressed_world_position;

use crate::core::config::{
    COLLECTOR_BOTTOM_MARGIN, COLLECTOR_SIZE, COLLECTOR_SPEED, DROP_FALL_SPEED, DROP_SIZE,
    MAX_COLLECTOR_SIZE, MIN_COLLECTOR_SIZE, RESIZE_STEP,
};
use crate::core::{Collector, GameState, PlayArea, Raindrop, Score, SpawnTimer, frame_delta};

/// Event fired once per caught drop
#[derive(Event)]
pub struct DropCaughtEvent;

pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<PlayArea>()
            .init_resource::<Score>()
            .add_event::<DropCaughtEvent>()
            .add_systems(OnEnter(GameState::Playing), spawn_game_elements)
            // The chain order is semantic: input before size correction,
            // clamping after every size and position change, the drop
            // sweep last.
            .add_systems(
                Update,
                (
                    handle_pointer_input,
                    handle_keyboard_input,
                    correct_collector_size,
                    sync_collector_sprite,
                    clamp_collector,
                    spawn_raindrops,
                    move_raindrops,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

/// Spawns the collector and resets the per-session gameplay resources
pub fn spawn_game_elements(mut commands: Commands, area: Res<PlayArea>) {
    commands.spawn((
        Sprite::from_color(
            Color::srgb(1.0, 0.04, 0.04), // Red
            Vec2::splat(COLLECTOR_SIZE),
        ),
        Transform::from_xyz(
            0.0,
            area.bottom() + COLLECTOR_BOTTOM_MARGIN + COLLECTOR_SIZE / 2.0,
            0.0,
        ),
        Collector {
            width: COLLECTOR_SIZE,
            height: COLLECTOR_SIZE,
        },
    ));

    commands.insert_resource(Score::default());
    commands.insert_resource(SpawnTimer::default());
}

/// Centers the collector on the pointer while it is held down
pub fn handle_pointer_input(
    mut collector_query: Query<&mut Transform, With<Collector>>,
    windows: Query<&Window>,
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
) {
    let Ok(mut transform) = collector_query.get_single_mut() else {
        return;
    };

    if let Some(world_pos) =
        pressed_world_position(&mouse_input, &touch_input, &windows, &camera_query)
    {
        transform.translation.x = world_pos.x;
    }
}

/// Moves the collector with Left/Right and resizes it with Up/Down.
/// Movement scales with the frame delta; resizing steps a fixed amount
/// per tick.
pub fn handle_keyboard_input(
    time: Res<Time>,
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut collector_query: Query<(&mut Transform, &mut Collector)>,
) {
    let Ok((mut transform, mut collector)) = collector_query.get_single_mut() else {
        return;
    };

    let dt = frame_delta(&time);

    if keyboard_input.pressed(KeyCode::ArrowLeft) {
        transform.translation.x -= COLLECTOR_SPEED * dt;
    }
    if keyboard_input.pressed(KeyCode::ArrowRight) {
        transform.translation.x += COLLECTOR_SPEED * dt;
    }
    if keyboard_input.pressed(KeyCode::ArrowUp) {
        collector.resize_by(RESIZE_STEP);
    }
    if keyboard_input.pressed(KeyCode::ArrowDown) {
        collector.resize_by(-RESIZE_STEP);
    }
}

/// Walks an out-of-band collector size back toward the size band, one
/// step per tick rather than snapping to the boundary. Both checks run
/// every tick and can compound with the key resize.
pub fn correct_collector_size(mut collector_query: Query<&mut Collector>) {
    let Ok(mut collector) = collector_query.get_single_mut() else {
        return;
    };

    if collector.width < MIN_COLLECTOR_SIZE || collector.height < MIN_COLLECTOR_SIZE {
        collector.resize_by(RESIZE_STEP);
    }
    if collector.width > MAX_COLLECTOR_SIZE || collector.height > MAX_COLLECTOR_SIZE {
        collector.resize_by(-RESIZE_STEP);
    }
}

/// Re-derives the collector sprite size and bottom-anchored height from
/// the logical dimensions
pub fn sync_collector_sprite(
    area: Res<PlayArea>,
    mut collector_query: Query<(&Collector, &mut Sprite, &mut Transform)>,
) {
    let Ok((collector, mut sprite, mut transform)) = collector_query.get_single_mut() else {
        return;
    };

    sprite.custom_size = Some(Vec2::new(collector.width, collector.height));
    transform.translation.y = area.bottom() + COLLECTOR_BOTTOM_MARGIN + collector.height / 2.0;
}

/// Hard-clamps the collector into the horizontal play bounds
pub fn clamp_collector(
    area: Res<PlayArea>,
    mut collector_query: Query<(&mut Transform, &Collector)>,
) {
    let Ok((mut transform, collector)) = collector_query.get_single_mut() else {
        return;
    };

    let min_x = area.left() + collector.width / 2.0;
    let max_x = area.right() - collector.width / 2.0;
    if transform.translation.x < min_x {
        transform.translation.x = min_x;
    }
    if transform.translation.x > max_x {
        transform.translation.x = max_x;
    }
}

/// Spawns a new drop once the accumulated time strictly exceeds the
/// rolled interval, then re-rolls
pub fn spawn_raindrops(
    mut commands: Commands,
    time: Res<Time>,
    area: Res<PlayArea>,
    mut spawn_timer: ResMut<SpawnTimer>,
) {
    spawn_timer.elapsed += frame_delta(&time);

    if spawn_timer.elapsed > spawn_timer.interval {
        let x = fastrand::f32().mul_add(area.width - DROP_SIZE, area.left() + DROP_SIZE / 2.0);
        commands.spawn((
            Sprite::from_color(
                Color::srgb(0.25, 0.45, 1.0), // Blue
                Vec2::splat(DROP_SIZE),
            ),
            Transform::from_xyz(x, area.top() + DROP_SIZE / 2.0, 0.0),
            Raindrop,
        ));
        spawn_timer.reroll();
    }
}

/// Advances every drop and resolves removals. The bottom-exit check runs
/// before the overlap check, so a drop already past the bottom cannot
/// score.
pub fn move_raindrops(
    mut commands: Commands,
    time: Res<Time>,
    area: Res<PlayArea>,
    mut score: ResMut<Score>,
    mut caught_events: EventWriter<DropCaughtEvent>,
    mut drop_query: Query<(Entity, &mut Transform), With<Raindrop>>,
    collector_query: Query<(&Transform, &Collector), Without<Raindrop>>,
) {
    let Ok((collector_transform, collector)) = collector_query.get_single() else {
        return;
    };

    let dt = frame_delta(&time);
    let collector_pos = collector_transform.translation.truncate();
    let collector_size = Vec2::new(collector.width, collector.height);

    for (entity, mut transform) in &mut drop_query {
        transform.translation.y -= DROP_FALL_SPEED * dt;

        let drop_pos = transform.translation.truncate();
        if drop_pos.y < area.bottom() - DROP_SIZE / 2.0 {
            commands.entity(entity).despawn();
        } else if rects_overlap(drop_pos, Vec2::splat(DROP_SIZE), collector_pos, collector_size) {
            score.0 += 1;
            caught_events.send(DropCaughtEvent);
            commands.entity(entity).despawn();
        }
    }
}

/// Inclusive axis-aligned overlap test between two centered rectangles
pub fn rects_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let reach = (a_size + b_size) / 2.0;
    let delta = a_pos - b_pos;
    delta.x.abs() <= reach.x && delta.y.abs() <= reach.y
}
