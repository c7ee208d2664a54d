//! Game tuning settings
//!
//! Data-driven knobs for the sim, loadable from a JSON file so tuning does
//! not require a rebuild. A missing or malformed file falls back to the
//! built-in defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable game parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wall-clock milliseconds between grid steps
    pub step_interval_ms: u64,
    /// Tile edge length in pixels; also the chain stride
    pub tile_size: f32,
    /// Playfield size in tiles, outer wall ring included
    pub room_columns: u32,
    pub room_rows: u32,
    /// Rendered sprite edge lengths
    pub slime_sprite_size: f32,
    pub bat_sprite_size: f32,
    /// Bat speed in pixels per second
    pub bat_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            step_interval_ms: consts::STEP_INTERVAL_MS,
            tile_size: consts::TILE_SIZE,
            room_columns: consts::ROOM_COLUMNS,
            room_rows: consts::ROOM_ROWS,
            slime_sprite_size: consts::SLIME_SPRITE_SIZE,
            bat_sprite_size: consts::BAT_SPRITE_SIZE,
            bat_speed: consts::BAT_SPEED,
        }
    }
}

impl Settings {
    /// Step interval in seconds, as the sim consumes it
    pub fn step_interval_secs(&self) -> f32 {
        self.step_interval_ms as f32 / 1000.0
    }

    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(err) => {
                log::warn!("Could not read settings file {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interval_in_seconds() {
        let settings = Settings::default();
        assert!((settings.step_interval_secs() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_the_rest() {
        let settings: Settings = serde_json::from_str(r#"{"step_interval_ms": 120}"#).unwrap();

        assert_eq!(settings.step_interval_ms, 120);
        assert_eq!(settings.tile_size, Settings::default().tile_size);
        assert_eq!(settings.room_columns, Settings::default().room_columns);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load(Path::new("definitely-not-here.json"));
        assert_eq!(settings.step_interval_ms, Settings::default().step_interval_ms);
    }
}
