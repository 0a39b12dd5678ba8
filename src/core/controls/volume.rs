//! Volume slider.
//!
//! Drag sets an absolute value. Arrow keys step by `VOLUME_STEP_KEYBOARD`
//! through the updater form, so repeated presses accumulate.
//! `sync()` pushes the state volume onto the media handle whenever it differs
//! from the last pushed value.

use log::debug;

use crate::core::context::PlayerHandle;
use crate::core::state::{MAX_VOLUME, MIN_VOLUME, Update};

use super::RangeProps;

pub const VOLUME_SLIDER_NAME: &str = "VolumeSlider";
pub const VOLUME_STEP_KEYBOARD: f32 = 0.2;
pub const VOLUME_STEP_DRAG: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Down,
    Up,
}

#[derive(Debug, Clone)]
pub struct VolumeSlider {
    player: PlayerHandle,
    pushed: Option<f32>,
}

impl VolumeSlider {
    pub fn new(player: PlayerHandle) -> Self {
        Self {
            player,
            pushed: None,
        }
    }

    pub fn props(&self) -> RangeProps {
        RangeProps {
            min: f64::from(MIN_VOLUME),
            max: f64::from(MAX_VOLUME),
            value: f64::from(self.player.snapshot().volume),
            step: VOLUME_STEP_DRAG,
            disabled: !self.player.is_bound(),
        }
    }

    pub fn drag_to(&mut self, volume: f32) {
        if !self.player.is_bound() || !volume.is_finite() {
            return;
        }
        let volume = volume.clamp(MIN_VOLUME, MAX_VOLUME);
        self.player.remember_volume(volume);
        self.player.set_volume(volume);
    }

    pub fn step(&mut self, direction: StepDirection) {
        if !self.player.is_bound() {
            return;
        }
        let delta = match direction {
            StepDirection::Down => -VOLUME_STEP_KEYBOARD,
            StepDirection::Up => VOLUME_STEP_KEYBOARD,
        };
        self.player.set_volume(Update::with(move |prev: f32| {
            (prev + delta).clamp(MIN_VOLUME, MAX_VOLUME)
        }));
    }

    pub fn sync(&mut self) {
        if !self.player.is_bound() {
            self.pushed = None;
            return;
        }

        let volume = self.player.snapshot().volume;
        if self.pushed == Some(volume) {
            return;
        }

        debug!("media: volume {volume:.3}");
        self.player.with_media(|m| m.set_volume(volume));
        self.pushed = Some(volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::media::fake::{Command, FakeMedia};
    use crate::core::state::PlayerState;

    fn bound(volume: f32) -> (VolumeSlider, PlayerHandle, FakeMedia) {
        let player = PlayerHandle::new(PlayerState::new(false, volume));
        let media = FakeMedia::new();
        player.bind_media(media.boxed());
        (VolumeSlider::new(player.clone()), player, media)
    }

    #[test]
    fn key_right_twice_clamps_at_one() {
        let (mut slider, player, _media) = bound(0.9);
        slider.step(StepDirection::Up);
        slider.step(StepDirection::Up);
        assert_eq!(player.snapshot().volume, 1.0);
    }

    #[test]
    fn key_left_clamps_at_zero() {
        let (mut slider, player, _media) = bound(0.1);
        slider.step(StepDirection::Down);
        assert_eq!(player.snapshot().volume, 0.0);
        assert!((player.last_nonzero_volume() - 0.1).abs() < 1e-6);
    }

    #[test]
    fn drag_sets_volume_and_zero_is_not_remembered() {
        let (mut slider, player, _media) = bound(0.5);
        slider.drag_to(0.25);
        assert_eq!(player.snapshot().volume, 0.25);
        slider.drag_to(0.0);
        assert_eq!(player.snapshot().volume, 0.0);
        assert_eq!(player.last_nonzero_volume(), 0.25);
    }

    #[test]
    fn sync_pushes_only_changes() {
        let (mut slider, _player, media) = bound(0.5);
        slider.sync();
        slider.sync();
        slider.drag_to(0.3);
        slider.sync();
        assert_eq!(media.commands(), vec![Command::Volume(0.5), Command::Volume(0.3)]);
    }

    #[test]
    fn unbound_slider_is_disabled_and_inert() {
        let player = PlayerHandle::new(PlayerState::new(false, 0.5));
        let mut slider = VolumeSlider::new(player.clone());
        assert!(slider.props().disabled);
        slider.step(StepDirection::Up);
        slider.drag_to(0.9);
        assert_eq!(player.snapshot().volume, 0.5);
    }
}
