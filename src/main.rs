//! Slime Chase entry point
//!
//! Runs the simulation headless: rendering, audio, and input devices are
//! host integrations, so the native binary drives a scripted demo run and
//! reports what happened through the log.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use slime_chase::consts::FRAME_DT;
use slime_chase::settings::Settings;
use slime_chase::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("settings.json"));
    let seed = seed_from_env();
    log::info!("Slime Chase starting (seed {seed})");

    let mut state = GameState::new(seed, &settings);

    // Attract-mode script: turn counter-clockwise every three grid steps,
    // tracing a loop through the middle of the room. Collecting the bat
    // grows the chain until the loop no longer fits it.
    let turns = [Vec2::NEG_Y, Vec2::NEG_X, Vec2::Y, Vec2::X];
    let frames_per_turn = ((settings.step_interval_secs() * 3.0) / FRAME_DT).round() as usize;
    let max_frames: usize = 60 * 60 * 5;

    for frame in 0..max_frames {
        let direction = if frame > 0 && frame % frames_per_turn == 0 {
            turns[(frame / frames_per_turn - 1) % turns.len()]
        } else {
            Vec2::ZERO
        };

        let input = TickInput {
            direction,
            pause: false,
        };
        for event in tick(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::BatBounced => log::debug!("bat bounced off a wall"),
                GameEvent::BatCollected { score } => {
                    log::info!("bat collected, score {score}, chain {}", state.slime.len());
                }
                GameEvent::GameOver { reason } => log::info!("game over: {reason:?}"),
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "final score {} with a {}-segment chain after {} frames (seed {seed})",
        state.score,
        state.slime.len(),
        state.time_ticks
    );
}

/// Seed from `SLIME_CHASE_SEED`, or the wall clock when unset. The sim only
/// ever sees the resulting number; replays just need the same seed.
fn seed_from_env() -> u64 {
    std::env::var("SLIME_CHASE_SEED")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        })
}
