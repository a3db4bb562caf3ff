mod audio;
mod plugin;
mod window;

use bevy::prelude::*;

use xnite_core::game_trait::XniteGame;
use xnite_platformer::config::GameConfig;

fn main() {
    let game = plugin::Game::new(GameConfig::load());
    let window = game.0.config().window.clone();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: game.0.name().to_string(),
                resolution: (window.width as u32, window.height as u32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(plugin::SKY_BLUE))
        .insert_resource(game)
        .add_plugins((
            plugin::PlatformerPlugin,
            audio::GameAudioPlugin,
            window::WindowIconPlugin,
        ))
        .run();
}
