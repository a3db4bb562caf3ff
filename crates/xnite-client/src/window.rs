use bevy::ecs::system::NonSend;
use bevy::prelude::*;
use bevy::winit::WinitWindows;
use winit::window::Icon;

use crate::plugin::Game;

/// Sets the window icon from the configured path. A missing or undecodable
/// icon file is a notice, never a startup failure.
pub struct WindowIconPlugin;

impl Plugin for WindowIconPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_window_icon);
    }
}

fn set_window_icon(windows: NonSend<WinitWindows>, game: Res<Game>) {
    let path = &game.0.config().window.icon_path;

    let rgba = match image::open(path) {
        Ok(img) => img.into_rgba8(),
        Err(e) => {
            tracing::warn!("Window icon {path} not loaded: {e}");
            return;
        },
    };
    let (width, height) = rgba.dimensions();
    let icon = match Icon::from_rgba(rgba.into_raw(), width, height) {
        Ok(icon) => icon,
        Err(e) => {
            tracing::warn!("Window icon {path} not usable: {e}");
            return;
        },
    };

    for window in windows.windows.values() {
        window.set_window_icon(Some(icon.clone()));
    }
}
