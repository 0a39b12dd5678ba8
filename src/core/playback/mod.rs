//! core/playback/mod.rs
//! Desktop media handle: a rodio engine thread behind the `MediaHandle` contract.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};

use super::media::{MediaEvent, MediaHandle};

mod engine;
mod probe;
mod source;

use engine::PlaybackEngine;
pub use source::resolve_source;

#[derive(Clone)]
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
}

impl PlaybackController {
    /// Best-effort send. If the engine died, the command is dropped.
    pub fn send(&self, cmd: PlayerCommand) {
        if self.command_tx.send(cmd).is_err() {
            debug!("playback engine gone; command dropped");
        }
    }
}

#[derive(Debug)]
pub enum PlayerCommand {
    Load(PathBuf),
    Play,
    Pause,
    Seek(u64),      // ms
    SetVolume(f32), // 0.0..=1.0
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Loaded {
        path: PathBuf,
        duration_ms: Option<u64>,
    },
    Position {
        position_ms: u64,
    },
    TrackEnded,
    Error(String),
}

/// Spawns playback thread and returns:
/// - PlaybackController (command side)
/// - Receiver<PlayerEvent> (drained by `RodioMedia::poll_events`)
pub fn start_playback() -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone()) {
            Ok(e) => e,
            Err(err) => {
                let _ = event_tx.send(PlayerEvent::Error(err.to_string()));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController { command_tx }, event_rx)
}

/// `MediaHandle` over the engine thread. Reads are served from values cached
/// off the event stream, so they never block the UI.
pub struct RodioMedia {
    controller: PlaybackController,
    events: Receiver<PlayerEvent>,
    position: f64,
    volume: f32,
}

impl RodioMedia {
    pub fn open(path: PathBuf) -> Self {
        let (controller, events) = start_playback();
        controller.send(PlayerCommand::Load(path));
        Self::from_parts(controller, events)
    }

    fn from_parts(controller: PlaybackController, events: Receiver<PlayerEvent>) -> Self {
        Self {
            controller,
            events,
            position: 0.0,
            volume: 1.0,
        }
    }

    fn translate(&mut self, event: PlayerEvent) -> MediaEvent {
        match event {
            PlayerEvent::Loaded { path, duration_ms } => {
                debug!("engine loaded {}", path.display());
                self.position = 0.0;
                MediaEvent::MetadataReady {
                    duration: duration_ms.map(ms_to_secs).unwrap_or(0.0),
                    volume: self.volume,
                }
            }
            PlayerEvent::Position { position_ms } => {
                self.position = ms_to_secs(position_ms);
                MediaEvent::TimeAdvanced(self.position)
            }
            PlayerEvent::TrackEnded => MediaEvent::Ended,
            PlayerEvent::Error(err) => {
                warn!("playback engine: {err}");
                MediaEvent::Error(err)
            }
        }
    }
}

fn ms_to_secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

impl MediaHandle for RodioMedia {
    fn play(&mut self) {
        self.controller.send(PlayerCommand::Play);
    }

    fn pause(&mut self) {
        self.controller.send(PlayerCommand::Pause);
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        let seconds = seconds.max(0.0);
        self.position = seconds;
        self.controller
            .send(PlayerCommand::Seek((seconds * 1000.0).round() as u64));
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.controller.send(PlayerCommand::SetVolume(self.volume));
    }

    fn poll_events(&mut self) -> Vec<MediaEvent> {
        let drained: Vec<PlayerEvent> = self.events.try_iter().collect();
        drained.into_iter().map(|ev| self.translate(ev)).collect()
    }
}

impl Drop for RodioMedia {
    fn drop(&mut self) {
        self.controller.send(PlayerCommand::Shutdown);
    }
}
