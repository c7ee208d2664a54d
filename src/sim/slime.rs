//! The player-controlled slime
//!
//! Owns the chain, the input buffer, and the movement clock, and wires them
//! in the order the rules need: intent is buffered as it arrives, one grid
//! step fires when the clock elapses, and every frame in between renders
//! from the interpolation fraction.

use glam::Vec2;

use super::chain::{SegmentChain, StepOutcome};
use super::clock::StepClock;
use super::collision::Circle;
use super::input::DirectionBuffer;

#[derive(Debug, Clone)]
pub struct Slime {
    chain: SegmentChain,
    buffer: DirectionBuffer,
    clock: StepClock,
    /// Direction applied at the next step when nothing is buffered
    next_direction: Vec2,
    sprite_size: f32,
}

impl Slime {
    /// Create a slime at `start`, heading right.
    ///
    /// `stride` is the tile width, `step_interval` the wall-clock seconds
    /// between grid steps, and `sprite_size` the rendered edge length the
    /// bounds radius derives from. Non-positive values are construction
    /// contract violations and panic.
    pub fn new(start: Vec2, stride: f32, step_interval: f32, sprite_size: f32) -> Self {
        assert!(sprite_size > 0.0, "sprite size must be positive");

        let chain = SegmentChain::new(start, Vec2::X, stride);
        let next_direction = chain.head().direction;

        Self {
            chain,
            buffer: DirectionBuffer::new(),
            clock: StepClock::new(step_interval),
            next_direction,
            sprite_size,
        }
    }

    /// Record the player's intent for an upcoming step.
    ///
    /// `intent` is the already-resolved directional input for this frame, or
    /// zero when none was pressed. Invalid intents drop silently.
    pub fn handle_input(&mut self, intent: Vec2) {
        self.buffer.try_enqueue(intent, self.chain.head().direction);
    }

    /// Advance the movement clock and perform at most one grid step.
    ///
    /// Returns `SelfCollided` when a step drove the head onto a body
    /// segment, `Continued` otherwise (including frames where no step was
    /// due).
    pub fn update(&mut self, dt: f32) -> StepOutcome {
        if !self.clock.advance(dt) {
            return StepOutcome::Continued;
        }

        if let Some(direction) = self.buffer.pop() {
            self.next_direction = direction;
        }
        self.chain.step(self.next_direction)
    }

    /// Append one tail segment. Called once per collect event, between
    /// steps.
    pub fn grow(&mut self) {
        self.chain.grow();
    }

    /// Circular collision bounds centered on the interpolated head
    pub fn bounds(&self) -> Circle {
        let half = self.sprite_size * 0.5;
        let position = self.chain.interpolated_head(self.clock.progress());
        Circle::new(position + Vec2::splat(half), half)
    }

    /// Interpolated head position (top-left sprite anchor)
    pub fn head_position(&self) -> Vec2 {
        self.chain.interpolated_head(self.clock.progress())
    }

    /// Interpolated segment positions in head-to-tail draw order
    pub fn segment_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.chain.positions(self.clock.progress())
    }

    /// Number of chain segments
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// The chain itself, for collision queries beyond the head
    pub fn chain(&self) -> &SegmentChain {
        &self.chain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_slime() -> Slime {
        Slime::new(Vec2::new(100.0, 100.0), 10.0, 0.2, 10.0)
    }

    #[test]
    fn test_no_step_until_interval_elapses() {
        let mut slime = test_slime();

        slime.update(0.1);
        assert_eq!(slime.chain().head().at, Vec2::new(100.0, 100.0));

        slime.update(0.1);
        assert_eq!(slime.chain().head().at, Vec2::new(110.0, 100.0));
        assert_eq!(slime.chain().head().to, Vec2::new(120.0, 100.0));
    }

    #[test]
    fn test_buffered_turn_applies_on_next_step() {
        let mut slime = test_slime();

        slime.handle_input(Vec2::NEG_Y);
        slime.update(0.2);

        assert_eq!(slime.chain().head().direction, Vec2::NEG_Y);
        assert_eq!(slime.chain().head().to, Vec2::new(110.0, 90.0));
    }

    #[test]
    fn test_chain_continues_straight_without_input() {
        let mut slime = test_slime();

        slime.handle_input(Vec2::NEG_Y);
        slime.update(0.2);
        slime.update(0.2);

        // No new input: the last applied direction repeats.
        assert_eq!(slime.chain().head().direction, Vec2::NEG_Y);
        assert_eq!(slime.chain().head().at, Vec2::new(110.0, 90.0));
    }

    #[test]
    fn test_double_tap_lands_on_consecutive_steps() {
        let mut slime = test_slime();

        // Both turns arrive within one step interval.
        slime.handle_input(Vec2::NEG_Y);
        slime.handle_input(Vec2::NEG_X);

        slime.update(0.2);
        assert_eq!(slime.chain().head().direction, Vec2::NEG_Y);

        slime.update(0.2);
        assert_eq!(slime.chain().head().direction, Vec2::NEG_X);
    }

    #[test]
    fn test_bounds_follow_interpolated_head() {
        let mut slime = test_slime();

        // Mid-interval: head is halfway between at and to.
        slime.update(0.2);
        slime.update(0.1);

        let bounds = slime.bounds();
        assert_eq!(bounds.center, Vec2::new(115.0, 100.0) + Vec2::splat(5.0));
        assert_eq!(bounds.radius, 5.0);
    }

    #[test]
    fn test_grow_extends_render_hook_output() {
        let mut slime = test_slime();
        assert_eq!(slime.len(), 1);

        slime.grow();

        assert_eq!(slime.len(), 2);
        assert_eq!(slime.segment_positions().count(), 2);
    }
}
