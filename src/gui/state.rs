//! GUI state + messages.
//! Pure data definitions used by update + view.

use std::time::{Duration, Instant};

use log::warn;

use crate::core::config::AppConfig;
use crate::core::controls::StepDirection;
use crate::core::error::ControlError;
use crate::core::playback::{RodioMedia, resolve_source};
use crate::core::root::{PlayerControls, PlayerRoot, create_player_scope};
use crate::core::scope::ScopeToken;
use crate::core::title::display_title;

/// One mounted player and the controls wired to it.
pub(crate) struct PlayerRow {
    pub title: String,
    /// Why the player is unbound or stopped by a media error, if it is.
    pub status: Option<String>,
    pub root: PlayerRoot,
    pub controls: PlayerControls,
}

/// App state
pub(crate) struct Sonora {
    pub status: String,
    pub players: Vec<PlayerRow>,
    /// Player whose volume slider receives arrow keys.
    pub keyboard_target: Option<ScopeToken>,
    /// Left mouse button held. Only a held pointer turns scrubber changes into a drag.
    pub pointer_down: bool,
    pub poll_interval: Duration,
}

impl Sonora {
    /// Mount every configured player, attach its media if the source resolves,
    /// then wire controls against each player's scope token.
    pub fn new(config: &AppConfig) -> Result<Self, ControlError> {
        let (provider, lookup) = create_player_scope();
        let poll_interval = config.poll_interval();
        let mut players = Vec::with_capacity(config.players.len());

        for pc in &config.players {
            let token = ScopeToken::new();
            let mut root = PlayerRoot::mount(&provider, token, pc.playing, pc.volume, poll_interval);

            let (path, status) = match resolve_source(&pc.source) {
                Ok(path) => {
                    root.attach(Box::new(RodioMedia::open(path.clone())));
                    (Some(path), None)
                }
                Err(e) => {
                    warn!("player `{}` left unbound: {e}", pc.source);
                    (None, Some(e.to_string()))
                }
            };

            let controls = PlayerControls::wire(&lookup, Some(token))?;
            let title = display_title(pc.title.as_deref(), &pc.source, path.as_deref());

            players.push(PlayerRow {
                title,
                status,
                root,
                controls,
            });
        }

        let mut state = Self {
            status: format!("{} player(s) loaded.", players.len()),
            keyboard_target: players.first().map(|p| p.root.token()),
            players,
            pointer_down: false,
            poll_interval,
        };
        state.sync_all(Instant::now());
        Ok(state)
    }

    /// Shown instead of players when wiring failed.
    pub fn failed(err: ControlError) -> Self {
        Self {
            status: format!("Configuration error: {err}"),
            players: Vec::new(),
            keyboard_target: None,
            pointer_down: false,
            poll_interval: AppConfig::default().poll_interval(),
        }
    }

    pub fn boot(config: &AppConfig) -> Self {
        match Self::new(config) {
            Ok(state) => state,
            Err(e) => {
                log::error!("{e}");
                Self::failed(e)
            }
        }
    }

    pub fn player_mut(&mut self, token: ScopeToken) -> Option<&mut PlayerRow> {
        self.players.iter_mut().find(|p| p.root.token() == token)
    }

    pub fn any_bound(&self) -> bool {
        self.players.iter().any(|p| p.root.player().is_bound())
    }

    /// Post-update effects: binding wrappers react to play intent,
    /// volume sliders push volume.
    pub fn sync_all(&mut self, now: Instant) {
        for p in &mut self.players {
            p.root.sync(now);
            p.controls.sync();
        }
    }
}

/// Input from one control of one player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ControlMessage {
    PlayToggled,
    ScrubTo(f64),
    ScrubReleased,
    VolumeTo(f32),
    VolumeStep(StepDirection),
    MuteToggled,
}

/// Message = “something happened”.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Message {
    Noop,
    /// Timer fired: drain media events, sample playheads.
    Tick(Instant),
    Control(ScopeToken, ControlMessage),
    /// Arrow key, routed to the keyboard target's volume slider.
    VolumeKey(StepDirection),
    PointerPressed,
    PointerReleased,
}
