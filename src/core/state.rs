//! core/state.rs
//! Shared player state + the mutation protocol every control goes through.
//!
//! Mutations apply immediately against the current value, so updater closures
//! issued back-to-back in one event-loop turn compose instead of racing a stale copy.
//! No Iced imports, no media IO.

use log::{debug, warn};

pub const MIN_VOLUME: f32 = 0.0;
pub const MAX_VOLUME: f32 = 1.0;

/// Either an absolute value or a pure function of the previous value.
pub enum Update<T> {
    Set(T),
    With(Box<dyn FnOnce(T) -> T>),
}

impl<T> Update<T> {
    pub fn with(f: impl FnOnce(T) -> T + 'static) -> Self {
        Update::With(Box::new(f))
    }

    fn apply(self, prev: T) -> T {
        match self {
            Update::Set(next) => next,
            Update::With(f) => f(prev),
        }
    }
}

impl<T> From<T> for Update<T> {
    fn from(value: T) -> Self {
        Update::Set(value)
    }
}

/// Copyable view of the state for one render pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    is_playing: bool,
    current_time: f64,
    duration: f64,
    volume: f32,
    last_nonzero_volume: f32,
}

impl PlayerState {
    /// Seeded from caller config; `duration`/`current_time` start at 0.
    pub fn new(is_playing: bool, volume: f32) -> Self {
        let volume = if volume.is_finite() {
            volume.clamp(MIN_VOLUME, MAX_VOLUME)
        } else {
            MAX_VOLUME
        };

        Self {
            is_playing,
            current_time: 0.0,
            duration: 0.0,
            volume,
            last_nonzero_volume: volume,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn last_nonzero_volume(&self) -> f32 {
        self.last_nonzero_volume
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            is_playing: self.is_playing,
            current_time: self.current_time,
            duration: self.duration,
            volume: self.volume,
        }
    }

    pub fn toggle_play(&mut self) {
        self.set_play(Update::with(|p: bool| !p));
    }

    pub fn set_play(&mut self, next: impl Into<Update<bool>>) {
        let next = next.into().apply(self.is_playing);
        if next != self.is_playing {
            debug!("is_playing {} -> {}", self.is_playing, next);
        }
        self.is_playing = next;
    }

    /// Moves the playhead in state only; the media handle is commanded elsewhere.
    pub fn seek(&mut self, to_time: f64) {
        self.record_current_time(to_time);
    }

    pub fn record_current_time(&mut self, next: f64) {
        if !next.is_finite() {
            warn!("ignoring non-finite current time {next}");
            return;
        }
        self.current_time = self.clamp_time(next);
    }

    pub fn set_duration(&mut self, next: f64) {
        if !next.is_finite() {
            warn!("ignoring non-finite duration {next}");
            return;
        }
        self.duration = next.max(0.0);
        self.current_time = self.clamp_time(self.current_time);
    }

    /// Clamped to [0, 1] after the update is applied.
    pub fn set_volume(&mut self, next: impl Into<Update<f32>>) {
        let next = next.into().apply(self.volume);
        if !next.is_finite() {
            warn!("ignoring non-finite volume {next}");
            return;
        }

        self.volume = next.clamp(MIN_VOLUME, MAX_VOLUME);
        self.remember_volume(self.volume);
    }

    /// Records `volume` for unmute restoration. Zero is never remembered.
    pub fn remember_volume(&mut self, volume: f32) {
        if volume.is_finite() && volume > MIN_VOLUME {
            self.last_nonzero_volume = volume.min(MAX_VOLUME);
        }
    }

    fn clamp_time(&self, t: f64) -> f64 {
        let t = t.max(0.0);
        if self.duration > 0.0 {
            t.min(self.duration)
        } else {
            t
        }
    }
}
