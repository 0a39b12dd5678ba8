//! core/root.rs
//! Player root: mounts one player instance.
//!
//! Mount creates the shared state from caller values and provides it under a
//! scope token. Controls are wired afterwards through the lookup side of the
//! same scope. Dropping the root detaches the media handle, cancels polling
//! and removes the scope frame.

use std::time::{Duration, Instant};

use log::info;

use super::binding::AudioBinding;
use super::context::PlayerHandle;
use super::controls::{
    MUTE_BUTTON_NAME, MuteToggle, PLAY_BUTTON_NAME, PROGRESS_BAR_NAME, PlayToggle, Scrubber,
    VOLUME_SLIDER_NAME, VolumeSlider,
};
use super::error::ControlError;
use super::media::MediaHandle;
use super::scope::{Lookup, ProvideGuard, Provider, ScopeToken, create_scope};
use super::state::PlayerState;

pub const AUDIO_PLAYER_NAME: &str = "AudioPlayer";

/// Provider/lookup pair for player bundles.
pub fn create_player_scope() -> (Provider<PlayerHandle>, Lookup<PlayerHandle>) {
    create_scope(AUDIO_PLAYER_NAME)
}

pub struct PlayerRoot {
    token: ScopeToken,
    binding: AudioBinding,
    _guard: ProvideGuard<PlayerHandle>,
}

impl PlayerRoot {
    pub fn mount(
        provider: &Provider<PlayerHandle>,
        token: ScopeToken,
        playing: bool,
        volume: f32,
        poll_interval: Duration,
    ) -> Self {
        let player = PlayerHandle::new(PlayerState::new(playing, volume));
        let guard = provider.provide(token, player.clone());
        info!("player {token:?} mounted (playing={playing}, volume={volume:.2})");

        Self {
            token,
            binding: AudioBinding::new(player, poll_interval),
            _guard: guard,
        }
    }

    pub fn token(&self) -> ScopeToken {
        self.token
    }

    pub fn player(&self) -> &PlayerHandle {
        self.binding.player()
    }

    pub fn is_polling(&self) -> bool {
        self.binding.is_polling()
    }

    /// Error reported by the attached media handle, if any.
    pub fn media_error(&self) -> Option<&str> {
        self.binding.media_error()
    }

    pub fn attach(&mut self, media: Box<dyn MediaHandle>) {
        self.binding.attach(media);
    }

    pub fn sync(&mut self, now: Instant) {
        self.binding.sync(now);
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        self.binding.tick(now)
    }
}

impl Drop for PlayerRoot {
    fn drop(&mut self) {
        self.binding.detach();
        info!("player {:?} unmounted", self.token);
    }
}

/// The four interactive controls of one player.
#[derive(Debug, Clone)]
pub struct PlayerControls {
    pub play: PlayToggle,
    pub scrubber: Scrubber,
    pub volume: VolumeSlider,
    pub mute: MuteToggle,
}

impl PlayerControls {
    /// Resolve every control against the scope; `None` means nearest enclosing player.
    pub fn wire(lookup: &Lookup<PlayerHandle>, token: Option<ScopeToken>) -> Result<Self, ControlError> {
        Ok(Self {
            play: PlayToggle::new(lookup.lookup(PLAY_BUTTON_NAME, token)?),
            scrubber: Scrubber::new(lookup.lookup(PROGRESS_BAR_NAME, token)?),
            volume: VolumeSlider::new(lookup.lookup(VOLUME_SLIDER_NAME, token)?),
            mute: MuteToggle::new(lookup.lookup(MUTE_BUTTON_NAME, token)?),
        })
    }

    /// Post-update side effects owned by controls.
    pub fn sync(&mut self) {
        self.volume.sync();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::media::fake::{Command, FakeMedia};

    #[test]
    fn wiring_outside_a_player_fails_loudly() {
        let (_provider, lookup) = create_player_scope();
        let err = PlayerControls::wire(&lookup, None).unwrap_err();
        assert_eq!(
            err,
            ControlError::OutsideProvider {
                consumer: PLAY_BUTTON_NAME,
                provider: AUDIO_PLAYER_NAME
            }
        );
    }

    #[test]
    fn sibling_players_stay_isolated() {
        let (provider, lookup) = create_player_scope();
        let a = PlayerRoot::mount(&provider, ScopeToken::new(), false, 0.2, Duration::from_millis(200));
        let b = PlayerRoot::mount(&provider, ScopeToken::new(), false, 0.8, Duration::from_millis(200));

        let ca = PlayerControls::wire(&lookup, Some(a.token())).expect("wire a");
        let cb = PlayerControls::wire(&lookup, Some(b.token())).expect("wire b");

        a.player().set_volume(0.5f32);
        assert_eq!(ca.volume.props().value, 0.5_f32 as f64);
        assert_eq!(cb.volume.props().value, 0.8_f32 as f64);
        assert!(!a.player().same_player(b.player()));
    }

    #[test]
    fn unmount_detaches_media_and_ends_scope() {
        let (provider, lookup) = create_player_scope();
        let media = FakeMedia::new();
        let token = ScopeToken::new();
        {
            let mut root = PlayerRoot::mount(&provider, token, true, 0.5, Duration::from_millis(200));
            root.attach(media.boxed());
            root.sync(Instant::now());
            assert!(root.is_polling());
            assert_eq!(media.commands(), vec![Command::Play]);
        }
        assert!(PlayerControls::wire(&lookup, Some(token)).is_err());
    }

    #[test]
    fn controls_observe_one_snapshot() {
        let (provider, lookup) = create_player_scope();
        let mut root = PlayerRoot::mount(&provider, ScopeToken::new(), false, 0.7, Duration::from_millis(200));
        let mut controls = PlayerControls::wire(&lookup, None).expect("wire");
        let media = FakeMedia::new();
        root.attach(media.boxed());

        controls.play.activate();
        root.sync(Instant::now());
        controls.sync();

        assert!(controls.play.props().active);
        assert!(root.player().snapshot().is_playing);
        assert_eq!(media.commands(), vec![Command::Play, Command::Volume(0.7)]);
    }
}
