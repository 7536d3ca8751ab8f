//! Game settings.
//!
//! Every field has a default, so a settings file only needs to name what it
//! changes.  Nothing here is persisted back; the file is read once at startup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::entities::PLAYER_SIZE;
use crate::error::{GameError, Result};

/// Environment variable naming an explicit settings file.
pub const CONFIG_ENV: &str = "BIRD_SURVIVOR_CONFIG";

/// Settings file looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "bird_survivor.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// World width in world units.
    pub width: u32,
    /// World height in world units.
    pub height: u32,
    /// Ticks per second.
    pub tick_rate: u32,
    /// Ticks between enemy spawns.
    pub enemy_interval: u64,
    /// Ticks between boss spawns.
    pub boss_interval: u64,
    /// Ticks between flames, per boss.
    pub flame_interval: u64,
    /// Beams fired by the spread attack.
    pub spread_count: usize,
    /// When false a boss only spawns if none is alive.
    pub allow_multiple_bosses: bool,
    /// Pause on the final frame after the player is hit, in milliseconds.
    pub defeat_pause_ms: u64,
    /// Player centre at session start.
    pub player_start: (f32, f32),
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 900,
            tick_rate: 50,
            enemy_interval: 200,
            boss_interval: 300,
            flame_interval: 50,
            spread_count: 5,
            allow_multiple_bosses: false,
            defeat_pause_ms: 2000,
            player_start: (900.0, 400.0),
        }
    }
}

impl Settings {
    /// Parse settings from JSON text.  Missing fields take their defaults.
    pub fn from_json(path: &Path, text: &str) -> Result<Self> {
        let settings: Settings =
            serde_json::from_str(text).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(path, &text)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Resolve the settings for this run.
    ///
    /// `BIRD_SURVIVOR_CONFIG` must point at a readable file if set; the
    /// working-directory file is optional.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load_from(&PathBuf::from(path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load_from(local);
        }
        log::warn!("No {} found, using default settings", DEFAULT_CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            return Err(GameError::InvalidSetting("tick_rate must be positive".into()));
        }
        for (name, value) in [
            ("enemy_interval", self.enemy_interval),
            ("boss_interval", self.boss_interval),
            ("flame_interval", self.flame_interval),
        ] {
            if value == 0 {
                return Err(GameError::InvalidSetting(format!("{name} must be positive")));
            }
        }
        if self.spread_count < 2 {
            return Err(GameError::InvalidSetting(format!(
                "spread_count must be at least 2, got {}",
                self.spread_count
            )));
        }
        if (self.width as f32) < PLAYER_SIZE.0 || (self.height as f32) < PLAYER_SIZE.1 {
            return Err(GameError::InvalidSetting(format!(
                "world {}x{} is smaller than the player sprite",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Length of one tick.
    pub fn tick_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(1000 / u64::from(self.tick_rate.max(1)))
    }
}
