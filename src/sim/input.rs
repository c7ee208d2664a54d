//! Buffered directional input
//!
//! Player turns are queued ahead of the fixed movement steps so a quick
//! double-tap lands on two consecutive steps instead of the second press
//! overwriting the first. The buffer rejects direct reversals; the chain can
//! never be steered back into its own neck.

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::INPUT_BUFFER_CAP;

/// Bounded FIFO of pending direction changes
#[derive(Debug, Clone, Default)]
pub struct DirectionBuffer {
    pending: VecDeque<Vec2>,
}

impl DirectionBuffer {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(INPUT_BUFFER_CAP),
        }
    }

    /// Queue a direction change if it is valid.
    ///
    /// The candidate is dropped when the buffer is full, when it is the zero
    /// vector, or when it reverses the reference direction (the last queued
    /// entry, or `head_direction` when the buffer is empty). A 90 degree turn
    /// and continuing straight both pass the dot-product check; only a 180
    /// degree reversal fails it. Drops are silent: a rejected turn is normal
    /// play, not an error.
    pub fn try_enqueue(&mut self, candidate: Vec2, head_direction: Vec2) {
        if self.pending.len() >= INPUT_BUFFER_CAP || candidate == Vec2::ZERO {
            return;
        }

        let reference = self.pending.back().copied().unwrap_or(head_direction);
        if candidate.dot(reference) >= 0.0 {
            self.pending.push_back(candidate);
        }
    }

    /// Remove and return the oldest queued direction
    pub fn pop(&mut self) -> Option<Vec2> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_perpendicular_turn_accepted_reversal_rejected() {
        let mut buffer = DirectionBuffer::new();

        // Up against a chain heading right: dot == 0, accepted.
        buffer.try_enqueue(Vec2::NEG_Y, Vec2::X);
        assert_eq!(buffer.len(), 1);

        // Down now validates against the buffered Up: dot == -1, rejected.
        buffer.try_enqueue(Vec2::Y, Vec2::X);
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.pop(), Some(Vec2::NEG_Y));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_zero_vector_rejected() {
        let mut buffer = DirectionBuffer::new();
        buffer.try_enqueue(Vec2::ZERO, Vec2::X);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_full_buffer_drops_candidate() {
        let mut buffer = DirectionBuffer::new();
        buffer.try_enqueue(Vec2::NEG_Y, Vec2::X);
        buffer.try_enqueue(Vec2::NEG_X, Vec2::X);
        assert_eq!(buffer.len(), 2);

        // Third entry is dropped even though it would otherwise validate.
        buffer.try_enqueue(Vec2::Y, Vec2::X);
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn test_fifo_order() {
        let mut buffer = DirectionBuffer::new();
        buffer.try_enqueue(Vec2::NEG_Y, Vec2::X);
        buffer.try_enqueue(Vec2::NEG_X, Vec2::X);
        assert_eq!(buffer.pop(), Some(Vec2::NEG_Y));
        assert_eq!(buffer.pop(), Some(Vec2::NEG_X));
        assert_eq!(buffer.pop(), None);
    }

    proptest! {
        /// Whatever sequence of cardinal inputs arrives, the accepted queue
        /// never contains a reversal relative to its reference direction.
        #[test]
        fn prop_accepted_directions_never_reverse(
            candidates in proptest::collection::vec(0..4usize, 0..16)
        ) {
            let dirs = [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y];
            let head = Vec2::X;

            let mut buffer = DirectionBuffer::new();
            for c in candidates {
                buffer.try_enqueue(dirs[c], head);
            }

            let mut reference = head;
            while let Some(direction) = buffer.pop() {
                prop_assert!(direction.dot(reference) >= 0.0);
                reference = direction;
            }
        }
    }
}
