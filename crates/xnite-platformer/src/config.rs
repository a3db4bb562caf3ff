use serde::{Deserialize, Serialize};

use crate::physics::{
    DROP_SPEED, GRAVITY, JUMP_COOLDOWN, JUMP_SPEED, MOVE_SPEED, PLAYER_HEIGHT, PLAYER_WIDTH,
};

/// Physics tuning, loadable from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    pub drop_speed: f32,
    pub jump_cooldown: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            drop_speed: DROP_SPEED,
            jump_cooldown: JUMP_COOLDOWN,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
        }
    }
}

/// Window and asset settings for the shell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub icon_path: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Xnite".to_string(),
            icon_path: "assets/window_icon.png".to_string(),
        }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub physics: PhysicsConfig,
    pub window: WindowConfig,
}

impl GameConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is
    /// missing or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var("XNITE_CONFIG").unwrap_or_else(|_| "config/xnite.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<GameConfig>(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    GameConfig::default()
                },
            },
            Err(_) => GameConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuning_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.physics.gravity, GRAVITY);
        assert_eq!(cfg.physics.move_speed, MOVE_SPEED);
        assert_eq!(cfg.physics.jump_speed, JUMP_SPEED);
        assert_eq!(cfg.physics.jump_cooldown, JUMP_COOLDOWN);
        assert_eq!(cfg.window.width, 1280.0);
        assert_eq!(cfg.window.height, 720.0);
        assert_eq!(cfg.window.title, "Xnite");
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let cfg: GameConfig = toml::from_str(
            r#"
            [physics]
            move_speed = 9.0

            [window]
            title = "Custom"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.physics.move_speed, 9.0);
        assert_eq!(cfg.physics.jump_speed, JUMP_SPEED);
        assert_eq!(cfg.window.title, "Custom");
        assert_eq!(cfg.window.width, 1280.0);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let cfg = GameConfig::default();
        let text = toml::to_string(&cfg).unwrap();
        let back: GameConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.physics.player_width, cfg.physics.player_width);
        assert_eq!(back.window.icon_path, cfg.window.icon_path);
    }
}
