//! Runtime settings for the simulation front-end.

use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Side length of a cell in pixels
pub const CELL_EXTENT: u32 = 16;

/// Largest accepted cell extent
pub const MAX_CELL_EXTENT: u32 = 4096;

pub const FRAMERATE: u32 = 60;

/// Time between two generations while running
pub const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub cell_extent: u32,
    pub tick: Duration,
    pub framerate: u32,
    /// Start with the simulation paused
    pub start_paused: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_extent: CELL_EXTENT,
            tick: TICK,
            framerate: FRAMERATE,
            start_paused: false,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cell extent must be between 1 and 4096")]
    InvalidCellExtent,

    #[error("Framerate must be non-zero")]
    InvalidFramerate,

    #[error("Tick interval must be non-zero")]
    InvalidTick,

    #[error("Invalid value \"{value}\" for {key}")]
    InvalidValue { key: &'static str, value: String },
}

impl Config {
    /// Defaults, overridden by `LIFEGRID_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, overridden by whatever `lookup` returns for each `LIFEGRID_*` key.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(extent) = parse(&lookup, "LIFEGRID_CELL_EXTENT")? {
            config.cell_extent = extent;
        }

        if let Some(ms) = parse(&lookup, "LIFEGRID_TICK_MS")? {
            config.tick = Duration::from_millis(ms);
        }

        if let Some(fps) = parse(&lookup, "LIFEGRID_FRAMERATE")? {
            config.framerate = fps;
        }

        if let Some(paused) = parse(&lookup, "LIFEGRID_PAUSED")? {
            config.start_paused = paused;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_extent == 0 || self.cell_extent > MAX_CELL_EXTENT {
            return Err(ConfigError::InvalidCellExtent);
        }
        if self.framerate == 0 {
            return Err(ConfigError::InvalidFramerate);
        }
        if self.tick.is_zero() {
            return Err(ConfigError::InvalidTick);
        }
        Ok(())
    }

    /// Time budget of a single frame
    pub fn frametime(&self) -> Duration {
        Duration::from_secs(1) / self.framerate
    }
}

fn parse<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let Some(value) = lookup(key) else {
        return Ok(None);
    };

    match value.trim().parse() {
        Ok(v) => {
            info!("{key} set to {value}");
            Ok(Some(v))
        }
        Err(_) => Err(ConfigError::InvalidValue { key, value }),
    }
}
