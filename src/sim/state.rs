//! Game state and rules data
//!
//! Everything the tick mutates lives here. A state is built from a run seed
//! plus tuning settings; equal seeds give equal runs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::grid_to_world;
use crate::settings::Settings;

use super::bat::Bat;
use super::collision::Room;
use super::slime::Slime;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen by the player
    Paused,
    /// Run ended
    GameOver,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The head stepped onto a body segment
    SelfCollision,
    /// The head left the room
    WallExit,
}

/// Observable outcome of a tick, for the host to map onto audio and UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The bat reflected off a room wall
    BatBounced,
    /// The slime collected the bat; carries the updated score
    BatCollected { score: u32 },
    /// The run ended
    GameOver { reason: GameOverReason },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source in the sim
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u32,
    /// Frame counter
    pub time_ticks: u64,
    /// Playfield bounds
    pub room: Room,
    /// Player entity
    pub slime: Slime,
    /// Collectible entity
    pub bat: Bat,
    tile_size: f32,
    columns: u32,
    rows: u32,
}

impl GameState {
    /// Build a fresh run.
    ///
    /// A scene reset constructs a new state; nothing carries over. The room
    /// must be at least 3x3 tiles so an interior respawn cell exists.
    pub fn new(seed: u64, settings: &Settings) -> Self {
        assert!(
            settings.room_columns >= 3 && settings.room_rows >= 3,
            "room must be at least 3x3 tiles"
        );

        let tile = settings.tile_size;
        let room = Room::from_grid(settings.room_columns, settings.room_rows, tile);

        // The slime starts on the center tile, the bat in the top-left
        // corner of the room.
        let start = grid_to_world(settings.room_columns / 2, settings.room_rows / 2, tile);
        let slime = Slime::new(
            start,
            tile,
            settings.step_interval_secs(),
            settings.slime_sprite_size,
        );

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut bat = Bat::new(
            Vec2::new(room.left, room.top),
            settings.bat_sprite_size,
            settings.bat_speed,
        );
        bat.randomize_velocity(&mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            score: 0,
            time_ticks: 0,
            room,
            slime,
            bat,
            tile_size: tile,
            columns: settings.room_columns,
            rows: settings.room_rows,
        }
    }

    /// Drop the bat on a random interior tile and relaunch it.
    pub(crate) fn respawn_bat(&mut self) {
        let column = self.rng.random_range(1..self.columns - 1);
        let row = self.rng.random_range(1..self.rows - 1);
        self.bat.position = grid_to_world(column, row, self.tile_size);
        self.bat.randomize_velocity(&mut self.rng);
    }
}
