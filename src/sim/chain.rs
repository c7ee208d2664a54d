//! Segment chain locomotion
//!
//! The whole chain advances one grid cell at a time: the head is recomputed
//! and pushed onto the front while the tail is popped off the back, so every
//! intermediate segment keeps its geometry and only shifts one slot down the
//! chain. Push-front/pop-back on a `VecDeque` keeps a step O(1) at any
//! length.

use std::collections::VecDeque;

use glam::Vec2;

use super::segment::Segment;

/// Result of one grid step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The chain advanced without touching itself
    Continued,
    /// The new head landed on a body segment
    SelfCollided,
}

/// Ordered chain of segments, head first
#[derive(Debug, Clone)]
pub struct SegmentChain {
    segments: VecDeque<Segment>,
    stride: f32,
}

impl SegmentChain {
    /// Create a single-segment chain at `start`, heading along `direction`.
    ///
    /// A non-positive stride is a construction contract violation and
    /// panics.
    pub fn new(start: Vec2, direction: Vec2, stride: f32) -> Self {
        assert!(stride > 0.0, "stride must be positive");

        let head = Segment {
            at: start,
            to: start + direction * stride,
            direction,
        };
        let mut segments = VecDeque::new();
        segments.push_front(head);

        Self { segments, stride }
    }

    /// The head segment. The chain never shrinks below one segment: `step`
    /// shifts and `grow` appends, so the front always exists.
    pub fn head(&self) -> &Segment {
        self.segments
            .front()
            .expect("chain always holds at least one segment")
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Pixels travelled per grid step
    pub fn stride(&self) -> f32 {
        self.stride
    }

    /// Advance every segment one grid cell.
    ///
    /// The caller resolves `direction` beforehand (a buffered turn, or the
    /// previous heading when none is queued); passing it in keeps the step a
    /// pure function of chain state and input. The head moves into its `to`
    /// cell and targets the next cell along `direction`; the rest of the
    /// chain inherits its geometry by shifting.
    pub fn step(&mut self, direction: Vec2) -> StepOutcome {
        let mut head = *self.head();
        head.direction = direction;
        head.at = head.to;
        head.to = head.at + direction * self.stride;

        self.segments.push_front(head);
        self.segments.pop_back();

        // First matching cell wins; later overlaps are the same collision.
        for segment in self.segments.iter().skip(1) {
            if segment.at == head.at {
                return StepOutcome::SelfCollided;
            }
        }

        StepOutcome::Continued
    }

    /// Append a tail segment one stride behind the current tail.
    ///
    /// The new tail moves into the cell the old tail currently occupies, so
    /// its direction matches the old tail's. Callers invoke this between
    /// steps (on a collect event), never from inside `step`.
    pub fn grow(&mut self) {
        let tail = *self
            .segments
            .back()
            .expect("chain always holds at least one segment");

        let at = tail.at + tail.reverse_direction() * self.stride;
        let new_tail = Segment {
            at,
            to: tail.at,
            direction: (tail.at - at).normalize_or_zero(),
        };

        self.segments.push_back(new_tail);
    }

    /// Interpolated head position for a progress fraction in [0, 1)
    pub fn interpolated_head(&self, progress: f32) -> Vec2 {
        self.head().interpolated(progress)
    }

    /// Interpolated segment positions in head-to-tail draw order
    pub fn positions(&self, progress: f32) -> impl Iterator<Item = Vec2> + '_ {
        self.segments
            .iter()
            .map(move |segment| segment.interpolated(progress))
    }

    /// Segments in head-to-tail order
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }
}
