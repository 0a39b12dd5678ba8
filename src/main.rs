//! Sonora Player
//!
//! # What this program is
//! A small desktop page of audio players (built with `iced`). Each player is a
//! set of independent controls (play toggle, scrubber, volume slider, mute
//! toggle) bound to one shared player state, plus a rodio-backed media handle
//! kept in sync with that state.
//!
//! # How it fits together
//! - `core` owns the state, the scope lookup, the binding wrapper and the
//!   controls. No GUI imports.
//! - `gui` renders control props and turns widget input into `Message`s.
//!
//! **Message happens -> update mutates state -> sync pushes to media -> view redraws**
//!
//! # Concurrency model
//! - Everything that touches player state runs on the UI event loop.
//! - Decoding/output runs on one engine thread per player; it talks to the UI
//!   only through channels drained on the poll tick.

mod core;
mod gui;

use std::path::{Path, PathBuf};

use clap::Parser;
use flexi_logger::{
    Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
};
use log::info;

use crate::core::config::{AppConfig, PlayerConfig};
use crate::core::error::{AppError, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "sonora-player", about = "Composable audio player controls.", version)]
struct Cli {
    /// Media sources (paths or file:// URIs). Replace the players from --config.
    sources: Vec<String>,

    /// TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial volume for every player (0..=1).
    #[arg(long)]
    volume: Option<f32>,

    /// Start every player in the playing state.
    #[arg(long)]
    autoplay: bool,

    /// Playhead sampling interval while playing.
    #[arg(long)]
    poll_interval_ms: Option<u64>,

    /// Log filter, e.g. "info" or "sonora_player=debug".
    #[arg(long)]
    log_level: Option<String>,

    /// Also write rotating log files into this directory.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Config file first, then CLI overrides, then validation.
    fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if !self.sources.is_empty() {
            config.players = self
                .sources
                .iter()
                .map(|s| PlayerConfig::new(s.as_str()))
                .collect();
        }
        if let Some(volume) = self.volume {
            for p in &mut config.players {
                p.volume = volume;
            }
        }
        if self.autoplay {
            for p in &mut config.players {
                p.playing = true;
            }
        }
        if let Some(ms) = self.poll_interval_ms {
            config.poll_interval_ms = ms;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_logger(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;

    let logger = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .rotate(
                Criterion::Size(1_000_000),
                Naming::Timestamps,
                Cleanup::KeepLogFiles(3),
            )
            .duplicate_to_stderr(Duplicate::Warn),
        None => logger.log_to_stderr(),
    };

    logger.start()
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Keep the handle alive for the whole run.
    let _logger = init_logger(&config.log_level, cli.log_dir.as_deref())?;
    info!(
        "starting with {} player(s), poll interval {:?}",
        config.players.len(),
        config.poll_interval()
    );

    iced::application(move || gui::Sonora::boot(&config), gui::update, gui::view)
        .subscription(gui::subscription)
        .title("Sonora Player")
        .run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_sources_replace_config_players() {
        let cli = Cli::parse_from(["sonora-player", "a.webm", "b.mp3", "--volume", "0.3", "--autoplay"]);
        let config = cli.resolve_config().expect("config");

        assert_eq!(config.players.len(), 2);
        assert_eq!(config.players[1].source, "b.mp3");
        assert!(config.players.iter().all(|p| p.playing && p.volume == 0.3));
        assert_eq!(config.poll_interval_ms, 200);
    }

    #[test]
    fn cli_without_sources_or_config_is_rejected() {
        let cli = Cli::parse_from(["sonora-player"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::NoPlayers)));
    }

    #[test]
    fn cli_volume_is_validated() {
        let cli = Cli::parse_from(["sonora-player", "a.webm", "--volume", "2"]);
        assert!(matches!(
            cli.resolve_config(),
            Err(ConfigError::InvalidVolume { .. })
        ));
    }

    #[test]
    fn cli_interval_override() {
        let cli = Cli::parse_from(["sonora-player", "a.webm", "--poll-interval-ms", "0"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::InvalidInterval { .. })));

        let cli = Cli::parse_from(["sonora-player", "a.webm", "--poll-interval-ms", "18446744073709551615"]);
        assert!(matches!(cli.resolve_config(), Err(ConfigError::InvalidInterval { .. })));
    }
}
