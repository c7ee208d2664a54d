//! Chain segment value type
//!
//! One link of the slime chain: the grid position it occupies at the start
//! of the current step (`at`), the position it is moving toward (`to`), and
//! the cardinal unit vector between them. Outside the middle of an advance,
//! `to == at + direction * stride` always holds.

use glam::Vec2;

/// One link of the slime chain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Position at the start of the current movement step
    pub at: Vec2,
    /// Position this segment reaches at the end of the step
    pub to: Vec2,
    /// Cardinal unit vector the segment is moving along
    pub direction: Vec2,
}

impl Segment {
    /// Unit vector opposite the movement direction; derived, never stored
    #[inline]
    pub fn reverse_direction(&self) -> Vec2 {
        -self.direction
    }

    /// Visual position between `at` and `to` for a progress fraction in [0, 1)
    #[inline]
    pub fn interpolated(&self, progress: f32) -> Vec2 {
        self.at.lerp(self.to, progress)
    }
}
