//! Progress bar / scrubber.
//!
//! Idle -> press: remember `is_playing`, pause.
//! Dragging: every change seeks state and moves the media playhead directly.
//! Release: restore the remembered play intent.
//! A change with no press (keyboard, wheel) seeks and leaves play intent alone.
//!
//! Writing the media position here (instead of via the binding wrapper)
//! keeps drag feedback immediate.

use crate::core::context::PlayerHandle;

use super::RangeProps;

pub const PROGRESS_BAR_NAME: &str = "ProgressBar";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Dragging { resume_playing: bool },
}

#[derive(Debug, Clone)]
pub struct Scrubber {
    player: PlayerHandle,
    phase: Phase,
}

impl Scrubber {
    pub fn new(player: PlayerHandle) -> Self {
        Self {
            player,
            phase: Phase::Idle,
        }
    }

    pub fn props(&self) -> RangeProps {
        let snap = self.player.snapshot();
        let max = snap.duration.max(0.0);
        RangeProps {
            min: 0.0,
            max,
            value: snap.current_time.clamp(0.0, max),
            step: 1.0,
            disabled: !self.player.is_bound(),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn press(&mut self) {
        if !self.player.is_bound() || self.is_dragging() {
            return;
        }
        let resume_playing = self.player.snapshot().is_playing;
        self.phase = Phase::Dragging { resume_playing };
        self.player.set_play(false);
    }

    pub fn drag_to(&mut self, time: f64) {
        if !self.player.is_bound() || !time.is_finite() {
            return;
        }
        let max = self.player.snapshot().duration;
        if max <= 0.0 {
            return;
        }

        let time = time.clamp(0.0, max);
        self.player.with_media(|m| m.set_current_time(time));
        self.player.seek(time);
    }

    pub fn release(&mut self) {
        if let Phase::Dragging { resume_playing } = self.phase {
            self.phase = Phase::Idle;
            self.player.set_play(resume_playing);
        }
    }
}
