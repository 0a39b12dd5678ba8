//! core/config.rs
//! Caller-facing configuration (TOML file + CLI overrides).
//!
//! ```toml
//! log_level = "info"
//! poll_interval_ms = 200
//!
//! [[players]]
//! source = "audio.webm"
//! title = "No Fear No More"
//! playing = false
//! volume = 0.7
//! ```

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use super::error::ConfigError;
use super::poll::DEFAULT_POLL_INTERVAL;

pub const DEFAULT_VOLUME: f32 = 0.7;
pub const MAX_POLL_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub poll_interval_ms: u64,
    pub players: Vec<PlayerConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            players: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlayerConfig {
    /// Path or `file://` URI.
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub playing: bool,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

impl PlayerConfig {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            title: None,
            playing: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

impl AppConfig {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_POLL_INTERVAL_MS).contains(&self.poll_interval_ms) {
            return Err(ConfigError::InvalidInterval {
                ms: self.poll_interval_ms,
                max_ms: MAX_POLL_INTERVAL_MS,
            });
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        for p in &self.players {
            if !(0.0..=1.0).contains(&p.volume) {
                return Err(ConfigError::InvalidVolume {
                    player: p.source.clone(),
                    volume: p.volume,
                });
            }
        }
        Ok(())
    }
}
