//! Play/pause trigger.

use crate::core::context::PlayerHandle;

use super::TriggerProps;

pub const PLAY_BUTTON_NAME: &str = "PlayButton";

#[derive(Debug, Clone)]
pub struct PlayToggle {
    player: PlayerHandle,
}

impl PlayToggle {
    pub fn new(player: PlayerHandle) -> Self {
        Self { player }
    }

    pub fn props(&self) -> TriggerProps {
        TriggerProps {
            disabled: !self.player.is_bound(),
            active: self.player.snapshot().is_playing,
        }
    }

    pub fn activate(&self) {
        if self.player.is_bound() {
            self.player.toggle_play();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::media::fake::FakeMedia;
    use crate::core::state::PlayerState;

    #[test]
    fn disabled_until_bound() {
        let player = PlayerHandle::new(PlayerState::new(false, 0.5));
        let toggle = PlayToggle::new(player.clone());
        assert!(toggle.props().disabled);

        toggle.activate();
        assert!(!player.snapshot().is_playing);

        player.bind_media(FakeMedia::new().boxed());
        assert!(!toggle.props().disabled);
        toggle.activate();
        assert!(toggle.props().active);
        toggle.activate();
        assert!(!toggle.props().active);
    }
}
