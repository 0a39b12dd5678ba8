//! Mute toggle.

use crate::core::context::PlayerHandle;

use super::TriggerProps;

pub const MUTE_BUTTON_NAME: &str = "MuteButton";

/// Used when unmuting with no nonzero volume ever recorded.
pub const UNMUTE_FALLBACK_VOLUME: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct MuteToggle {
    player: PlayerHandle,
}

impl MuteToggle {
    pub fn new(player: PlayerHandle) -> Self {
        Self { player }
    }

    pub fn props(&self) -> TriggerProps {
        TriggerProps {
            disabled: !self.player.is_bound(),
            active: self.player.snapshot().volume == 0.0,
        }
    }

    pub fn activate(&self) {
        if !self.player.is_bound() {
            return;
        }

        let volume = self.player.snapshot().volume;
        if volume != 0.0 {
            self.player.remember_volume(volume);
            self.player.set_volume(0.0f32);
        } else {
            let last = self.player.last_nonzero_volume();
            let next = if last == 0.0 { UNMUTE_FALLBACK_VOLUME } else { last };
            self.player.set_volume(next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::media::fake::FakeMedia;
    use crate::core::state::PlayerState;

    fn bound(volume: f32) -> (MuteToggle, PlayerHandle) {
        let player = PlayerHandle::new(PlayerState::new(false, volume));
        player.bind_media(FakeMedia::new().boxed());
        (MuteToggle::new(player.clone()), player)
    }

    #[test]
    fn mute_then_unmute_restores() {
        let (mute, player) = bound(0.6);
        mute.activate();
        assert_eq!(player.snapshot().volume, 0.0);
        assert!(mute.props().active);
        mute.activate();
        assert_eq!(player.snapshot().volume, 0.6);
    }

    #[test]
    fn set_volume_then_zero_then_toggle_round_trips() {
        for x in [0.35f32, 1.0, 0.0] {
            let (mute, player) = bound(0.0);
            player.set_volume(x);
            player.set_volume(0.0f32);
            mute.activate();
            let expected = if x == 0.0 { UNMUTE_FALLBACK_VOLUME } else { x };
            assert_eq!(player.snapshot().volume, expected);
        }
    }

    #[test]
    fn unmute_with_nothing_recorded_uses_fallback() {
        let (mute, player) = bound(0.0);
        mute.activate();
        assert_eq!(player.snapshot().volume, UNMUTE_FALLBACK_VOLUME);
    }

    #[test]
    fn unbound_mute_is_inert() {
        let player = PlayerHandle::new(PlayerState::new(false, 0.4));
        let mute = MuteToggle::new(player.clone());
        assert!(mute.props().disabled);
        mute.activate();
        assert_eq!(player.snapshot().volume, 0.4);
    }
}
