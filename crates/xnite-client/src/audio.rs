use bevy::prelude::*;

use xnite_core::audio::{AudioEvent, AudioEventQueue};

/// Queue the simulation fills during update, drained into playback here.
#[derive(Resource, Default)]
pub struct SoundQueue(pub AudioEventQueue);

/// Handles to the two sound effects.
#[derive(Resource)]
struct SoundBank {
    jump: Handle<AudioSource>,
    coin: Handle<AudioSource>,
}

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundQueue>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, play_queued);
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundBank {
        jump: asset_server.load("sounds/Jump.wav"),
        coin: asset_server.load("sounds/Item.wav"),
    });
}

/// Fire-and-forget playback: each queued event becomes a one-shot audio
/// entity that despawns when the clip ends.
fn play_queued(mut commands: Commands, mut queue: ResMut<SoundQueue>, bank: Res<SoundBank>) {
    for event in queue.0.drain() {
        let source = match event {
            AudioEvent::Jump => bank.jump.clone(),
            AudioEvent::CoinPickup => bank.coin.clone(),
        };
        commands.spawn((AudioPlayer::new(source), PlaybackSettings::DESPAWN));
    }
}
