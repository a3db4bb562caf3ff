use serde::{Deserialize, Serialize};

use xnite_core::geometry::Aabb;

/// Gravity per frame (pixels/frame^2, downward).
pub const GRAVITY: f32 = 1.0;
/// Horizontal move speed (pixels/frame).
pub const MOVE_SPEED: f32 = 7.0;
/// Jump initial velocity (pixels/frame).
pub const JUMP_SPEED: f32 = 20.0;
/// Extra downward velocity per frame while fast-dropping.
pub const DROP_SPEED: f32 = 1.0;
/// Seconds the jump gate cools down after a jump fires.
pub const JUMP_COOLDOWN: f32 = 0.75;
/// Player hitbox width in pixels.
pub const PLAYER_WIDTH: f32 = 64.0;
/// Player hitbox height in pixels.
pub const PLAYER_HEIGHT: f32 = 96.0;
/// Downward probe distance for ground contact.
pub const SUPPORT_PROBE: f32 = 1.0;

/// Position, velocity, and hitbox size of the player.
///
/// Velocities are in pixels per frame: the engine takes exactly one
/// integration step per update call, and `dt` never scales motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub w: f32,
    pub h: f32,
}

impl PlayerState {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            w,
            h,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.w, self.h)
    }
}

/// Collision and integration services the update loop consumes.
///
/// The default engine is [`AabbPhysics`]; tests substitute scripted
/// implementations to pin down gating behavior.
pub trait PhysicsEngine: Send + Sync {
    /// Strict AABB overlap test.
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool;

    /// Indices of every box in `boxes` overlapping `body`.
    fn hits(&self, body: &Aabb, boxes: &[Aabb]) -> Vec<usize> {
        boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| self.overlaps(body, b))
            .map(|(i, _)| i)
            .collect()
    }

    /// Apply gravity, integrate one frame of motion, and resolve the player
    /// against `walls`, zeroing the velocity component on contact.
    fn step(&self, player: &mut PlayerState, walls: &[Aabb], gravity: f32);

    /// Whether a downward probe of `probe` pixels from `body` touches a wall.
    fn can_support(&self, body: &Aabb, walls: &[Aabb], probe: f32) -> bool;
}

/// Dependency-free platformer physics: explicit gravity, one integration step
/// per frame, minimum-penetration push-out against static walls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbPhysics;

impl PhysicsEngine for AabbPhysics {
    fn overlaps(&self, a: &Aabb, b: &Aabb) -> bool {
        a.overlaps(b)
    }

    fn step(&self, player: &mut PlayerState, walls: &[Aabb], gravity: f32) {
        player.vy -= gravity;
        player.x += player.vx;
        player.y += player.vy;
        resolve_walls(player, walls);
    }

    fn can_support(&self, body: &Aabb, walls: &[Aabb], probe: f32) -> bool {
        let probe_box = body.translated(0.0, -probe);
        walls.iter().any(|w| probe_box.overlaps(w))
    }
}

/// Push the player out of every overlapped wall along the axis of minimum
/// penetration. Landing and head bumps zero vertical velocity; side contacts
/// zero horizontal velocity.
pub(crate) fn resolve_walls(player: &mut PlayerState, walls: &[Aabb]) {
    for wall in walls {
        let body = player.aabb();
        if !body.overlaps(wall) {
            continue;
        }

        let overlap_left = body.right() - wall.left();
        let overlap_right = wall.right() - body.left();
        let overlap_bottom = body.top() - wall.bottom();
        let overlap_top = wall.top() - body.bottom();

        let min_overlap = overlap_left
            .min(overlap_right)
            .min(overlap_bottom)
            .min(overlap_top);

        if min_overlap == overlap_bottom {
            // Head bump: push down, kill upward motion.
            player.y = wall.bottom() - player.h / 2.0;
            if player.vy > 0.0 {
                player.vy = 0.0;
            }
        } else if min_overlap == overlap_top {
            // Landed: push up, kill downward motion.
            player.y = wall.top() + player.h / 2.0;
            if player.vy < 0.0 {
                player.vy = 0.0;
            }
        } else if min_overlap == overlap_left {
            player.x = wall.left() - player.w / 2.0;
            player.vx = 0.0;
        } else {
            player.x = wall.right() + player.w / 2.0;
            player.vx = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A wide floor with its top edge at y = 0.
    fn floor() -> Vec<Aabb> {
        vec![Aabb::new(0.0, -32.0, 2000.0, 64.0)]
    }

    fn player_above_floor(y: f32) -> PlayerState {
        PlayerState::new(0.0, y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    #[test]
    fn gravity_pulls_down() {
        let physics = AabbPhysics;
        let mut player = player_above_floor(500.0);
        let y_before = player.y;
        physics.step(&mut player, &floor(), GRAVITY);
        assert!(player.y < y_before, "Gravity should pull the player down");
        assert_eq!(player.vy, -GRAVITY);
    }

    #[test]
    fn landing_zeroes_vertical_velocity() {
        let physics = AabbPhysics;
        let walls = floor();
        let mut player = player_above_floor(300.0);
        for _ in 0..60 {
            physics.step(&mut player, &walls, GRAVITY);
        }
        assert_eq!(player.vy, 0.0, "vy should be zeroed on landing");
        assert_eq!(
            player.y,
            PLAYER_HEIGHT / 2.0,
            "Player should rest with feet on the floor top"
        );
    }

    #[test]
    fn support_probe_positive_at_rest_negative_mid_air() {
        let physics = AabbPhysics;
        let walls = floor();
        let resting = player_above_floor(PLAYER_HEIGHT / 2.0);
        assert!(physics.can_support(&resting.aabb(), &walls, SUPPORT_PROBE));

        let airborne = player_above_floor(200.0);
        assert!(!physics.can_support(&airborne.aabb(), &walls, SUPPORT_PROBE));
    }

    #[test]
    fn wall_stops_horizontal_motion() {
        let physics = AabbPhysics;
        let mut walls = floor();
        // A block directly to the right of the starting position.
        walls.push(Aabb::new(100.0, 32.0, 64.0, 64.0));
        let mut player = player_above_floor(PLAYER_HEIGHT / 2.0);
        player.vx = MOVE_SPEED;
        for _ in 0..30 {
            physics.step(&mut player, &walls, GRAVITY);
        }
        assert!(
            player.x + PLAYER_WIDTH / 2.0 <= 100.0 - 32.0 + 1e-3,
            "Player should be stopped at the wall face, got x={}",
            player.x
        );
        assert_eq!(player.vx, 0.0, "vx should be zeroed on wall contact");
    }

    #[test]
    fn ceiling_stops_upward_motion() {
        let physics = AabbPhysics;
        let mut walls = floor();
        // A ceiling block two player-heights above the floor.
        walls.push(Aabb::new(0.0, 200.0, 256.0, 64.0));
        let mut player = player_above_floor(PLAYER_HEIGHT / 2.0);
        player.vy = JUMP_SPEED;
        // Rise until the head hits the ceiling (vy is zeroed on the bump,
        // well before the ballistic apex).
        while player.vy > 0.0 {
            physics.step(&mut player, &walls, GRAVITY);
        }
        assert_eq!(player.vy, 0.0, "Head bump should kill upward velocity");
        assert_eq!(
            player.y,
            200.0 - 32.0 - PLAYER_HEIGHT / 2.0,
            "Player should be pushed flush below the ceiling"
        );
    }

    #[test]
    fn resting_player_stays_put_under_gravity() {
        let physics = AabbPhysics;
        let walls = floor();
        let mut player = player_above_floor(PLAYER_HEIGHT / 2.0);
        for _ in 0..10 {
            physics.step(&mut player, &walls, GRAVITY);
            assert_eq!(player.y, PLAYER_HEIGHT / 2.0);
            assert_eq!(player.vy, 0.0);
        }
    }

    #[test]
    fn default_hits_routes_through_overlaps() {
        let physics = AabbPhysics;
        let body = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let boxes = [
            Aabb::new(4.0, 0.0, 10.0, 10.0),
            Aabb::new(40.0, 0.0, 10.0, 10.0),
        ];
        assert_eq!(physics.hits(&body, &boxes), vec![0]);
    }
}
