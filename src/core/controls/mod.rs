//! core/controls/mod.rs
//! Headless player controls.
//!
//! Each control is built from a `PlayerHandle` resolved at wiring time and exposes:
//! - `props()`: what to render (no widget types here)
//! - input methods that go through the mutation protocol
//!
//! Every control renders disabled while no media handle is bound.

mod mute;
mod play;
mod scrubber;
mod volume;

pub use mute::{MUTE_BUTTON_NAME, MuteToggle, UNMUTE_FALLBACK_VOLUME};
pub use play::{PLAY_BUTTON_NAME, PlayToggle};
pub use scrubber::{PROGRESS_BAR_NAME, Scrubber};
pub use volume::{StepDirection, VOLUME_SLIDER_NAME, VolumeSlider};

/// Render model for a button-like control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerProps {
    pub disabled: bool,
    /// Play: currently playing. Mute: currently muted.
    pub active: bool,
}

/// Render model for a bounded numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeProps {
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub step: f64,
    pub disabled: bool,
}
