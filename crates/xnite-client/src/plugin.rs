use bevy::prelude::*;

use xnite_core::game_trait::XniteGame;
use xnite_core::input::GameKey;
use xnite_platformer::Platformer;
use xnite_platformer::config::GameConfig;
use xnite_platformer::hud::letterbox_bar_width;

use crate::audio::SoundQueue;

pub const SKY_BLUE: Color = Color::srgb(0.53, 0.81, 0.92);
const TILE_BROWN: Color = Color::srgb(0.55, 0.41, 0.25);
const COIN_GOLD: Color = Color::srgb(1.0, 0.84, 0.0);
const PLAYER_GREEN: Color = Color::srgb(0.18, 0.65, 0.35);

/// The headless simulation hosted as a resource.
#[derive(Resource)]
pub struct Game(pub Platformer);

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self(Platformer::with_config(config))
    }
}

pub struct PlatformerPlugin;

impl Plugin for PlatformerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_world).add_systems(
            Update,
            (
                keyboard_input,
                advance_game,
                sync_sprites,
                follow_camera,
                refresh_hud,
            )
                .chain(),
        );
    }
}

/// Marker for the player sprite.
#[derive(Component)]
struct PlayerSprite;

/// Marker for coin sprites, carrying the coin's index in the game state.
#[derive(Component)]
struct CoinSprite(usize);

/// Marker for the world camera; the HUD renders in UI space instead.
#[derive(Component)]
struct WorldCamera;

/// Marker for the HUD score text.
#[derive(Component)]
struct ScoreText;

/// Physical keys mapped to the game's logical keys.
const KEY_MAP: [(KeyCode, GameKey); 5] = [
    (KeyCode::ArrowLeft, GameKey::Left),
    (KeyCode::ArrowRight, GameKey::Right),
    (KeyCode::ArrowUp, GameKey::Up),
    (KeyCode::ArrowDown, GameKey::Down),
    (KeyCode::Escape, GameKey::Reset),
];

fn setup_world(mut commands: Commands, game: Res<Game>) {
    let state = game.0.state();
    let config = game.0.config();

    commands.spawn((WorldCamera, Camera2d));

    // Walls first, then coins, then the player on top.
    for wall in &game.0.level().walls {
        commands.spawn((
            Sprite::from_color(TILE_BROWN, Vec2::new(wall.w, wall.h)),
            Transform::from_xyz(wall.x, wall.y, 0.0),
        ));
    }
    for (i, coin) in state.coins.iter().enumerate() {
        commands.spawn((
            CoinSprite(i),
            Sprite::from_color(COIN_GOLD, Vec2::new(coin.body.w, coin.body.h)),
            Transform::from_xyz(coin.body.x, coin.body.y, 1.0),
        ));
    }
    commands.spawn((
        PlayerSprite,
        Sprite::from_color(
            PLAYER_GREEN,
            Vec2::new(config.physics.player_width, config.physics.player_height),
        ),
        Transform::from_xyz(state.player.x, state.player.y, 2.0),
    ));

    // HUD: black letterbox bars squeeze the view to 4:3, score label on top.
    let bar = letterbox_bar_width(config.window.width, config.window.height);
    if bar > 0.0 {
        for (left, right) in [(Val::Px(0.0), Val::Auto), (Val::Auto, Val::Px(0.0))] {
            commands.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left,
                    right,
                    top: Val::Px(0.0),
                    width: Val::Px(bar),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(Color::BLACK),
            ));
        }
    }
    commands.spawn((
        ScoreText,
        Text::new(state.score_label.clone()),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            ..default()
        },
    ));
}

/// Forward key edges to the simulation. Held keys repeat at the OS level as
/// repeated downs, but `just_pressed` only reports the first edge, so the
/// game sees each press exactly once.
fn keyboard_input(keyboard: Res<ButtonInput<KeyCode>>, mut game: ResMut<Game>) {
    for (code, key) in KEY_MAP {
        if keyboard.just_pressed(code) {
            game.0.key_down(key);
        }
        if keyboard.just_released(code) {
            game.0.key_up(key);
        }
    }
}

/// One simulation update per rendered frame.
fn advance_game(time: Res<Time>, mut game: ResMut<Game>, mut sounds: ResMut<SoundQueue>) {
    game.0.update(time.delta_secs(), &mut sounds.0);
}

fn sync_sprites(
    game: Res<Game>,
    mut player: Query<&mut Transform, With<PlayerSprite>>,
    mut coins: Query<(&CoinSprite, &mut Visibility)>,
) {
    let state = game.0.state();
    if let Ok(mut transform) = player.single_mut() {
        transform.translation.x = state.player.x;
        transform.translation.y = state.player.y;
    }
    for (coin, mut visibility) in &mut coins {
        let collected = state.coins.get(coin.0).is_none_or(|c| c.collected);
        *visibility = if collected {
            Visibility::Hidden
        } else {
            Visibility::Visible
        };
    }
}

/// Pure follow: the camera centers on the player every frame.
fn follow_camera(game: Res<Game>, mut camera: Query<&mut Transform, With<WorldCamera>>) {
    let state = game.0.state();
    for mut transform in &mut camera {
        transform.translation.x = state.camera_x;
        transform.translation.y = state.camera_y;
    }
}

fn refresh_hud(game: Res<Game>, mut text: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = text.single_mut() {
        **text = game.0.state().score_label.clone();
    }
}
