//! Frame-driven game rules
//!
//! One `tick` call per rendered frame. Intent is buffered before the
//! movement clock decides whether a grid step fires, so a turn is never more
//! than one step interval away from taking effect.

use glam::Vec2;

use crate::consts::COLLECT_SCORE;

use super::chain::StepOutcome;
use super::state::{GameEvent, GameOverReason, GamePhase, GameState};

/// Resolved input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Intended movement direction, already resolved to "just pressed"
    /// semantics by the host; zero when no direction was pressed
    pub direction: Vec2,
    /// Pause toggle
    pub pause: bool,
}

/// Advance the game by one frame of `dt` seconds.
///
/// Returns the events the frame produced; the host maps them onto audio and
/// UI. The sim never reaches out to platform services itself.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return events;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return events;
    }

    state.time_ticks += 1;

    // Capture intent before the clock decides whether this frame steps.
    state.slime.handle_input(input.direction);

    if state.slime.update(dt) == StepOutcome::SelfCollided {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver {
            reason: GameOverReason::SelfCollision,
        });
        return events;
    }

    let slime_bounds = state.slime.bounds();
    if !state.room.contains_circle(&slime_bounds) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver {
            reason: GameOverReason::WallExit,
        });
        return events;
    }

    state.bat.update(dt);
    let bat_size = state.bat.sprite_size();
    if let Some(normal) = state.room.deflect(&mut state.bat.position, bat_size) {
        state.bat.bounce(normal);
        events.push(GameEvent::BatBounced);
    }

    if slime_bounds.intersects(&state.bat.bounds()) {
        state.score += COLLECT_SCORE;
        state.slime.grow();
        state.respawn_bat();
        events.push(GameEvent::BatCollected { score: state.score });
    }

    events
}
