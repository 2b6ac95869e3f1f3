//! Collision detection between the player and obstacles
//!
//! Everything on the field is an axis-aligned box, so a hit is the classic
//! four half-plane test: overlap on x AND overlap on y.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned bounding box (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Strict overlap: boxes that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Index of the first obstacle overlapping the player, scanning oldest first.
///
/// Stops at the first hit; later obstacles are never tested.
pub fn first_hit(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let bounds = player.bounds();
    obstacles
        .iter()
        .position(|obstacle| bounds.overlaps(&obstacle.bounds()))
}
