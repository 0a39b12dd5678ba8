//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - Sink (per loaded source)
//! - command loop + periodic position ticks
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use log::{debug, warn};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::probe::probe_duration_ms;
use super::{PlayerCommand, PlayerEvent};
use crate::core::error::MediaError;

const TICK_MS: u64 = 200;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    sink: Option<Sink>,
    current_path: Option<PathBuf>,
    volume: f32,
    /// Set once `TrackEnded` went out for the current sink.
    ended: bool,

    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>) -> Result<Self, MediaError> {
        // rodio 0.21.x: build/open the default output stream via OutputStreamBuilder
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| MediaError::Output(e.to_string()))?;

        Ok(Self {
            stream,
            sink: None,
            current_path: None,
            volume: 1.0,
            ended: false,
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        let tick = Duration::from_millis(TICK_MS);

        loop {
            match command_rx.recv_timeout(tick) {
                Ok(cmd) => {
                    if self.handle_command(cmd) {
                        break;
                    }
                    while let Ok(cmd) = command_rx.try_recv() {
                        if self.handle_command(cmd) {
                            self.stop_internal();
                            return;
                        }
                    }
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            self.tick();
        }

        self.stop_internal();
    }

    fn emit(&self, event: PlayerEvent) {
        let _ = self.event_tx.send(event);
    }

    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Load(path) => match self.load(&path) {
                Ok(duration_ms) => self.emit(PlayerEvent::Loaded { path, duration_ms }),
                Err(e) => self.emit(PlayerEvent::Error(e.to_string())),
            },
            PlayerCommand::Play => {
                if let Err(e) = self.rewind_if_ended() {
                    self.emit(PlayerEvent::Error(e.to_string()));
                    return false;
                }
                if let Some(sink) = &self.sink {
                    sink.play();
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                }
            }
            PlayerCommand::Seek(ms) => {
                if let Err(e) = self.rewind_if_ended() {
                    self.emit(PlayerEvent::Error(e.to_string()));
                    return false;
                }
                if let Some(sink) = &self.sink {
                    if sink.try_seek(Duration::from_millis(ms)).is_err() {
                        self.emit(PlayerEvent::Error(
                            "Seek failed (decoder may not support it)".into(),
                        ));
                    }
                }
            }
            PlayerCommand::SetVolume(v) => {
                self.volume = v.clamp(0.0, 1.0);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    fn tick(&mut self) {
        let Some(sink) = &self.sink else {
            return;
        };

        if !sink.is_paused() {
            let position_ms = sink.get_pos().as_millis() as u64;
            self.emit(PlayerEvent::Position { position_ms });
        }

        if sink.empty() && !self.ended {
            self.ended = true;
            self.emit(PlayerEvent::TrackEnded);
        }
    }

    /// Open `path` into a fresh, paused sink.
    fn load(&mut self, path: &Path) -> Result<Option<u64>, MediaError> {
        self.stop_internal();

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let decoder = Decoder::new(reader).map_err(|e| MediaError::Decode(e.to_string()))?;

        let duration_ms = match probe_duration_ms(path) {
            Ok(Some(ms)) => Some(ms),
            Ok(None) => decoder.total_duration().map(|d| d.as_millis() as u64),
            Err(e) => {
                warn!("probe failed for {}: {e}", path.display());
                decoder.total_duration().map(|d| d.as_millis() as u64)
            }
        };

        sink.pause();
        sink.set_volume(self.volume);
        sink.append(decoder);

        debug!("loaded {} (duration_ms={duration_ms:?})", path.display());

        self.current_path = Some(path.to_path_buf());
        self.sink = Some(sink);
        self.ended = false;

        Ok(duration_ms)
    }

    /// After the end, the sink is drained; reopen the same file from the start.
    fn rewind_if_ended(&mut self) -> Result<(), MediaError> {
        if !self.ended {
            return Ok(());
        }
        let Some(path) = self.current_path.clone() else {
            return Ok(());
        };
        self.load(&path)?;
        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.current_path = None;
        self.ended = false;
    }
}
