//! Collision geometry for the room and its occupants
//!
//! Circle-against-circle tests for entity overlap, circle-against-rectangle
//! for the walls. Reflection is the standard mirror about the surface
//! normal.

use glam::Vec2;

/// Circular collision bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.radius
    }

    /// Whether two circles overlap (squared-distance test, no sqrt)
    pub fn intersects(&self, other: &Circle) -> bool {
        let radii = self.radius + other.radius;
        self.center.distance_squared(other.center) < radii * radii
    }
}

/// The rectangular playfield, inset one tile from the screen edge
#[derive(Debug, Clone, Copy)]
pub struct Room {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Room {
    /// Build the room for a screen of `columns` x `rows` tiles, leaving the
    /// outermost ring of tiles as wall.
    pub fn from_grid(columns: u32, rows: u32, tile_size: f32) -> Self {
        Self {
            left: tile_size,
            top: tile_size,
            right: (columns - 1) as f32 * tile_size,
            bottom: (rows - 1) as f32 * tile_size,
        }
    }

    /// Whether the circle lies entirely inside the room
    pub fn contains_circle(&self, bounds: &Circle) -> bool {
        bounds.left() >= self.left
            && bounds.right() <= self.right
            && bounds.top() >= self.top
            && bounds.bottom() <= self.bottom
    }

    /// Wall contact for a sprite of `size` anchored at `position`.
    ///
    /// Clamps the position back inside the room and returns the combined
    /// wall normal, or `None` when no wall was touched. A corner hit yields
    /// a diagonal normal, reflecting both axes at once.
    pub fn deflect(&self, position: &mut Vec2, size: f32) -> Option<Vec2> {
        let mut normal = Vec2::ZERO;

        if position.x < self.left {
            normal.x = 1.0;
            position.x = self.left;
        } else if position.x + size > self.right {
            normal.x = -1.0;
            position.x = self.right - size;
        }

        if position.y < self.top {
            normal.y = 1.0;
            position.y = self.top;
        } else if position.y + size > self.bottom {
            normal.y = -1.0;
            position.y = self.bottom - size;
        }

        (normal != Vec2::ZERO).then_some(normal)
    }
}

/// Reflect velocity off a surface: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}
