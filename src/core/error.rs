//! core/error.rs
//! Error taxonomy.
//!
//! A missing media handle is not an error: controls render disabled until one is attached.

use thiserror::Error;

/// Wiring mistakes. These are programming errors and surface at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControlError {
    #[error("`{consumer}` must be used within `{provider}`")]
    OutsideProvider {
        consumer: &'static str,
        provider: &'static str,
    },

    #[error("`{consumer}` was given a scope token with no live `{provider}`")]
    UnknownScope {
        consumer: &'static str,
        provider: &'static str,
    },
}

#[derive(Error, Debug, Clone)]
pub enum MediaError {
    #[error("Unsupported media scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Media not found: {0}")]
    NotFound(String),

    #[error("Failed to open media: {0}")]
    Open(String),

    #[error("Format probe failed: {0}")]
    Probe(String),

    #[error("Decode failed: {0}")]
    Decode(String),

    #[error("Audio output unavailable: {0}")]
    Output(String),
}

impl From<std::io::Error> for MediaError {
    fn from(error: std::io::Error) -> Self {
        MediaError::Open(error.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Volume for `{player}` must be within 0..=1, got {volume}")]
    InvalidVolume { player: String, volume: f32 },

    #[error("Poll interval must be within 1..={max_ms} ms, got {ms}")]
    InvalidInterval { ms: u64, max_ms: u64 },

    #[error("No players configured (pass at least one source)")]
    NoPlayers,
}

/// Top-level error for `main`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Logger initialization error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("GUI error: {0}")]
    Gui(#[from] iced::Error),
}
