use bevy::prelude::*;
use bevy_asset_loader::prelude::*;
use bevy_kira_audio::prelude::*;

use crate::core::GameState;
use crate::gameplay::DropCaughtEvent;

#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
enum AssetState {
    #[default]
    Loading,
    Loaded,
}

#[derive(AssetCollection, Resource)]
struct AudioAssets {
    #[asset(path = "audio/drop.ogg")]
    catch: Handle<bevy_kira_audio::prelude::AudioSource>,
    #[asset(path = "audio/notturno.ogg")]
    music: Handle<bevy_kira_audio::prelude::AudioSource>,
}

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AudioPlugin)
            .init_state::<AssetState>()
            .add_loading_state(
                LoadingState::new(AssetState::Loading)
                    .continue_to_state(AssetState::Loaded)
                    .load_collection::<AudioAssets>(),
            )
            .add_systems(
                Update,
                catch_audio
                    .run_if(in_state(AssetState::Loaded))
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                OnEnter(GameState::Playing),
                start_music.run_if(in_state(AssetState::Loaded)),
            );
    }
}

/// Starts the looping background track. Playback is fire-and-forget; if
/// decoding has not finished when the game starts, the track is skipped.
fn start_music(audio_assets: Res<AudioAssets>, audio: Res<Audio>) {
    audio.play(audio_assets.music.clone_weak()).looped();
}

/// Plays the one-shot catch sound, once per caught drop
fn catch_audio(
    audio_assets: Res<AudioAssets>,
    audio: Res<Audio>,
    mut caught_events: EventReader<DropCaughtEvent>,
) {
    for _ in caught_events.read() {
        audio.play(audio_assets.catch.clone_weak());
    }
}
