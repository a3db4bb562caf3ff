use serde::{Deserialize, Serialize};

use xnite_core::geometry::Aabb;

/// Tile edge length in pixels (128 px art at half scale).
pub const TILE_SIZE: f32 = 64.0;
/// Player spawn point.
pub const SPAWN_X: f32 = 500.0;
pub const SPAWN_Y: f32 = 500.0;

/// A collectible coin. Collection is one-way: once `collected` flips, the
/// coin is skipped by every later sweep and hidden by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub body: Aabb,
    pub collected: bool,
}

/// Static level geometry. Walls never change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub walls: Vec<Aabb>,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

/// Build the fixed tutorial level: a horizontal grass run along the bottom
/// plus a vertical crate column the player has to jump over.
pub fn build_level() -> Level {
    let mut walls = Vec::new();

    // Ground run.
    for x in (322..1022).step_by(TILE_SIZE as usize) {
        walls.push(Aabb::new(x as f32, 224.0, TILE_SIZE, TILE_SIZE));
    }

    // Crate column at x = 768.
    for y in [224.0, 160.0, 96.0, 288.0, 352.0, 416.0, 480.0] {
        walls.push(Aabb::new(768.0, y, TILE_SIZE, TILE_SIZE));
    }

    Level {
        walls,
        spawn_x: SPAWN_X,
        spawn_y: SPAWN_Y,
    }
}

/// Build the coin row floating above the ground run.
pub fn build_coins() -> Vec<Coin> {
    (128..1250)
        .step_by(256)
        .map(|x| Coin {
            body: Aabb::new(x as f32, 424.0, TILE_SIZE, TILE_SIZE),
            collected: false,
        })
        .collect()
}
