//! Slime Chase - a grid-locked chain-chase arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (chain locomotion, collision, game rules)
//! - `settings`: Data-driven game tuning
//!
//! Rendering, audio, and input-device polling are host concerns: the sim
//! consumes a resolved `TickInput` each frame and hands back events and
//! interpolated positions for the host to draw and sonify.

pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Wall-clock milliseconds between grid steps
    pub const STEP_INTERVAL_MS: u64 = 200;
    /// Frame cadence of the headless demo loop (seconds)
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Square tile edge length in pixels; also the chain stride
    pub const TILE_SIZE: f32 = 80.0;
    /// Playfield size in tiles, outer wall ring included
    pub const ROOM_COLUMNS: u32 = 16;
    pub const ROOM_ROWS: u32 = 9;

    /// Rendered sprite edge lengths (one tile each)
    pub const SLIME_SPRITE_SIZE: f32 = 80.0;
    pub const BAT_SPRITE_SIZE: f32 = 80.0;

    /// Bat speed in pixels per second
    pub const BAT_SPEED: f32 = 300.0;

    /// Pending direction changes kept per chain
    pub const INPUT_BUFFER_CAP: usize = 2;

    /// Points per collected bat
    pub const COLLECT_SCORE: u32 = 100;
}

/// Convert a (column, row) grid cell to its top-left world position
#[inline]
pub fn grid_to_world(column: u32, row: u32, tile_size: f32) -> Vec2 {
    Vec2::new(column as f32 * tile_size, row as f32 * tile_size)
}
