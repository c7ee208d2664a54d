//! The bouncing bat
//!
//! The collectible the slime chases. Unlike the grid-locked slime it moves
//! continuously, reflecting off the room walls, and relaunches in a fresh
//! random direction every time it is collected.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{Circle, reflect_velocity};

#[derive(Debug, Clone)]
pub struct Bat {
    /// Top-left sprite anchor
    pub position: Vec2,
    pub velocity: Vec2,
    sprite_size: f32,
    speed: f32,
}

impl Bat {
    pub fn new(position: Vec2, sprite_size: f32, speed: f32) -> Self {
        assert!(sprite_size > 0.0, "sprite size must be positive");

        Self {
            position,
            velocity: Vec2::ZERO,
            sprite_size,
            speed,
        }
    }

    /// Launch in a uniformly random direction at the fixed bat speed.
    ///
    /// Draws from the game's seeded RNG so runs replay identically.
    pub fn randomize_velocity(&mut self, rng: &mut Pcg32) {
        let angle = rng.random::<f32>() * std::f32::consts::TAU;
        self.velocity = Vec2::new(angle.cos(), angle.sin()) * self.speed;
    }

    /// Move along the current velocity.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Reflect off a wall with the given normal.
    ///
    /// The position is nudged a tenth of a sprite along the normal first so
    /// the bat cannot sit inside the wall across consecutive frames.
    pub fn bounce(&mut self, normal: Vec2) {
        if normal.x != 0.0 {
            self.position.x += normal.x * self.sprite_size * 0.1;
        }
        if normal.y != 0.0 {
            self.position.y += normal.y * self.sprite_size * 0.1;
        }
        self.velocity = reflect_velocity(self.velocity, normal);
    }

    /// Collision bounds: a circle tighter than the sprite (quarter width),
    /// so collection needs a visually convincing overlap.
    pub fn bounds(&self) -> Circle {
        Circle::new(
            self.position + Vec2::splat(self.sprite_size * 0.5),
            self.sprite_size * 0.25,
        )
    }

    /// Rendered sprite edge length
    pub fn sprite_size(&self) -> f32 {
        self.sprite_size
    }
}
