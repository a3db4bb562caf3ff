use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box, stored as a center point plus full extents.
///
/// This is the only collision primitive in the game: walls, coins, and the
/// player hitbox are all `Aabb`s.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Center X in pixels.
    pub x: f32,
    /// Center Y in pixels.
    pub y: f32,
    /// Full width in pixels.
    pub w: f32,
    /// Full height in pixels.
    pub h: f32,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x - self.w / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.h / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Copy of this box shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Aabb {
        Aabb::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Strict overlap test. Boxes that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.right() > other.left()
            && self.left() < other.right()
            && self.top() > other.bottom()
            && self.bottom() < other.top()
    }

    /// Indices of every box in `boxes` that overlaps `self`.
    pub fn hits(&self, boxes: &[Aabb]) -> Vec<usize> {
        boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| self.overlaps(b))
            .map(|(i, _)| i)
            .collect()
    }
}
