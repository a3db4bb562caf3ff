pub mod config;
pub mod hud;
pub mod jump;
pub mod level;
pub mod physics;

use serde::{Deserialize, Serialize};

use xnite_core::audio::{AudioEvent, AudioEventQueue};
use xnite_core::game_trait::XniteGame;
use xnite_core::geometry::Aabb;
use xnite_core::input::{DirectionState, GameKey};

use config::GameConfig;
use jump::JumpGate;
use level::{Coin, Level};
use physics::{AabbPhysics, PhysicsEngine, PlayerState, SUPPORT_PROBE};

/// Everything the renderer reads and `update` mutates. No ambient globals:
/// the whole world lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub player: PlayerState,
    pub directions: DirectionState,
    pub jump_gate: JumpGate,
    pub coins: Vec<Coin>,
    pub score: u32,
    pub score_label: String,
    /// Camera center; tracks the player exactly, no smoothing or clamping.
    pub camera_x: f32,
    pub camera_y: f32,
}

/// The platformer simulation: one update call per rendered frame.
pub struct Platformer {
    config: GameConfig,
    level: Level,
    state: GameState,
    physics: Box<dyn PhysicsEngine>,
}

impl Platformer {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let level = level::build_level();
        let state = Self::fresh_state(&config, &level);
        Self {
            config,
            level,
            state,
            physics: Box::new(AabbPhysics),
        }
    }

    /// Swap the physics engine. Tests use scripted engines to pin down how
    /// the update loop consumes collision queries.
    pub fn with_physics(mut self, physics: Box<dyn PhysicsEngine>) -> Self {
        self.physics = physics;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn fresh_state(config: &GameConfig, level: &Level) -> GameState {
        GameState {
            player: PlayerState::new(
                level.spawn_x,
                level.spawn_y,
                config.physics.player_width,
                config.physics.player_height,
            ),
            directions: DirectionState::default(),
            jump_gate: JumpGate::new(),
            coins: level::build_coins(),
            score: 0,
            score_label: hud::score_label(0),
            camera_x: level.spawn_x,
            camera_y: level.spawn_y,
        }
    }
}

impl Default for Platformer {
    fn default() -> Self {
        Self::new()
    }
}

impl XniteGame for Platformer {
    fn name(&self) -> &str {
        &self.config.window.title
    }

    fn setup(&mut self) {
        self.level = level::build_level();
        self.state = Self::fresh_state(&self.config, &self.level);
    }

    fn key_down(&mut self, key: GameKey) {
        if let GameKey::Reset = key {
            self.setup();
            return;
        }
        self.state.directions.press(key);
    }

    fn key_up(&mut self, key: GameKey) {
        self.state.directions.release(key);
    }

    fn update(&mut self, dt: f32, audio: &mut AudioEventQueue) {
        let cfg = self.config.physics.clone();
        let dirs = self.state.directions;

        // Horizontal velocity from held keys; opposite inputs cancel to zero.
        self.state.player.vx = 0.0;
        if dirs.left && !dirs.right {
            self.state.player.vx = -cfg.move_speed;
        } else if dirs.right && !dirs.left {
            self.state.player.vx = cfg.move_speed;
        }

        self.state.jump_gate.tick(dt, dirs.up);

        let grounded = self.state.player.vy == 0.0
            && self
                .physics
                .can_support(&self.state.player.aabb(), &self.level.walls, SUPPORT_PROBE);

        if dirs.up && grounded && self.state.jump_gate.ready() {
            self.state.player.vy = cfg.jump_speed;
            self.state.jump_gate.fire(cfg.jump_cooldown);
            audio.push(AudioEvent::Jump);
        }

        // Fast drop goes in before the physics step so it shapes this frame's
        // collision resolution.
        if dirs.down && !dirs.up {
            self.state.player.vy -= cfg.drop_speed;
        }

        self.physics
            .step(&mut self.state.player, &self.level.walls, cfg.gravity);

        // Coin sweep after resolution; every coin overlapped this frame
        // counts, and a collected coin is never visited again.
        let body = self.state.player.aabb();
        let coin_boxes: Vec<Aabb> = self.state.coins.iter().map(|c| c.body).collect();
        for i in self.physics.hits(&body, &coin_boxes) {
            let coin = &mut self.state.coins[i];
            if coin.collected {
                continue;
            }
            coin.collected = true;
            self.state.score += 1;
            self.state.score_label = hud::score_label(self.state.score);
            audio.push(AudioEvent::CoinPickup);
        }

        // Camera follows the player exactly.
        self.state.camera_x = self.state.player.x;
        self.state.camera_y = self.state.player.y;
    }
}
