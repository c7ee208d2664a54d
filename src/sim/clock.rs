//! Fixed-interval movement clock
//!
//! Decouples real frame time from discrete grid steps. The accumulator keeps
//! whatever time is left after a step fires, and its quotient over the
//! interval doubles as the interpolation fraction for rendering.

/// Accumulator clock gating grid steps
#[derive(Debug, Clone)]
pub struct StepClock {
    interval: f32,
    accumulator: f32,
}

impl StepClock {
    /// Create a clock that fires every `interval` seconds.
    ///
    /// A non-positive interval is a construction contract violation and
    /// panics.
    pub fn new(interval: f32) -> Self {
        assert!(interval > 0.0, "step interval must be positive");
        Self {
            interval,
            accumulator: 0.0,
        }
    }

    /// Accumulate `dt` and report whether a grid step is due.
    ///
    /// At most one step fires per call. When more than one interval has
    /// accumulated (a frame hitch), the excess carries over to later frames
    /// instead of triggering catch-up steps, so a hitch slows the game down
    /// rather than fast-forwarding it.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulator += dt;
        if self.accumulator >= self.interval {
            self.accumulator -= self.interval;
            true
        } else {
            false
        }
    }

    /// Fraction of the current interval already elapsed.
    ///
    /// Consumed only by rendering and bounds interpolation; it has no effect
    /// on simulation state. Exceeds 1.0 while carried-over hitch time drains.
    pub fn progress(&self) -> f32 {
        self.accumulator / self.interval
    }

    /// Seconds between grid steps
    pub fn interval(&self) -> f32 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_step_before_interval() {
        let mut clock = StepClock::new(0.2);
        assert!(!clock.advance(0.1));
        assert!(clock.advance(0.1));
    }

    #[test]
    fn test_excess_time_carries_over() {
        let mut clock = StepClock::new(0.2);

        // A 0.5s hitch yields exactly one step; 0.3s stays banked.
        assert!(clock.advance(0.5));
        assert!(clock.progress() > 1.0);

        // The banked time drains one step per call, even with no new time.
        assert!(clock.advance(0.0));
        assert!(!clock.advance(0.0));
    }

    #[test]
    fn test_progress_fraction() {
        let mut clock = StepClock::new(0.2);
        clock.advance(0.05);
        assert!((clock.progress() - 0.25).abs() < 1e-6);

        clock.advance(0.1);
        assert!((clock.progress() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_progress_resets_after_step() {
        let mut clock = StepClock::new(0.2);
        assert!(clock.advance(0.2));
        assert!(clock.progress() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "step interval must be positive")]
    fn test_zero_interval_panics() {
        StepClock::new(0.0);
    }
}
