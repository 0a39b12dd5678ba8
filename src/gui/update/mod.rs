//! gui/update/mod.rs
//! Update logic (router).
//! Mutates state in response to `Message` events, then runs post-update sync
//! so media handles follow the new state before the next render.

use std::time::Instant;

use iced::Task;

use super::state::{Message, Sonora};

mod player;

pub(crate) fn update(state: &mut Sonora, message: Message) -> Task<Message> {
    match message {
        Message::Noop => {}

        Message::Tick(at) => player::tick(state, at),

        Message::Control(token, msg) => player::apply(state, token, msg),
        Message::VolumeKey(direction) => player::volume_key(state, direction),

        Message::PointerPressed => state.pointer_down = true,
        Message::PointerReleased => player::pointer_released(state),
    }

    state.sync_all(Instant::now());
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, PlayerConfig};
    use crate::core::controls::StepDirection;
    use crate::core::media::MediaEvent;
    use crate::core::media::fake::{Command, FakeMedia};
    use crate::gui::state::ControlMessage;

    /// Two players with missing sources (unbound), then fake media attached.
    fn app(volumes: [f32; 2]) -> (Sonora, [FakeMedia; 2]) {
        let mut config = AppConfig::default();
        for v in volumes {
            let mut p = PlayerConfig::new("missing/nothing-here.webm");
            p.volume = v;
            config.players.push(p);
        }

        let mut state = Sonora::new(&config).expect("wire");
        let fakes = [FakeMedia::new(), FakeMedia::new()];
        for (row, fake) in state.players.iter_mut().zip(fakes.iter()) {
            assert!(row.status.is_some());
            row.root.attach(fake.boxed());
        }
        state.sync_all(Instant::now());
        (state, fakes)
    }

    #[test]
    fn play_toggle_reaches_only_its_player() {
        let (mut state, fakes) = app([0.7, 0.7]);
        let token = state.players[0].root.token();

        let _ = update(&mut state, Message::Control(token, ControlMessage::PlayToggled));

        assert!(state.players[0].root.player().snapshot().is_playing);
        assert!(!state.players[1].root.player().snapshot().is_playing);
        assert_eq!(fakes[0].count(&Command::Play), 1);
        assert_eq!(fakes[1].count(&Command::Play), 0);
    }

    /// First player playing a 60s track.
    fn playing_app() -> (Sonora, [FakeMedia; 2]) {
        let (mut state, fakes) = app([0.7, 0.7]);
        let token = state.players[0].root.token();
        fakes[0].push_event(MediaEvent::MetadataReady {
            duration: 60.0,
            volume: 0.7,
        });
        let _ = update(&mut state, Message::Tick(Instant::now()));
        let _ = update(&mut state, Message::Control(token, ControlMessage::PlayToggled));
        (state, fakes)
    }

    #[test]
    fn scrub_change_without_pointer_keeps_playing() {
        let (mut state, fakes) = playing_app();
        let token = state.players[0].root.token();

        // Arrow key / ctrl+wheel over the slider: change, never a release.
        let _ = update(&mut state, Message::Control(token, ControlMessage::ScrubTo(21.0)));
        let _ = update(&mut state, Message::Tick(Instant::now()));

        let row = &state.players[0];
        assert!(!row.controls.scrubber.is_dragging());
        assert!(row.root.player().snapshot().is_playing);
        assert_eq!(row.root.player().snapshot().current_time, 21.0);
        assert_eq!(fakes[0].count(&Command::Pause), 1);
        assert_eq!(fakes[0].count(&Command::Play), 1);
    }

    #[test]
    fn pointer_release_ends_a_drag_without_slider_release() {
        let (mut state, _fakes) = playing_app();
        let token = state.players[0].root.token();

        let _ = update(&mut state, Message::PointerPressed);
        let _ = update(&mut state, Message::Control(token, ControlMessage::ScrubTo(10.0)));
        assert!(!state.players[0].root.player().snapshot().is_playing);

        let _ = update(&mut state, Message::PointerReleased);
        assert!(!state.players[0].controls.scrubber.is_dragging());
        assert!(state.players[0].root.player().snapshot().is_playing);
    }

    #[test]
    fn scrub_change_with_pointer_held_acts_as_press() {
        let (mut state, fakes) = playing_app();
        let token = state.players[0].root.token();

        let _ = update(&mut state, Message::PointerPressed);
        let _ = update(&mut state, Message::Control(token, ControlMessage::ScrubTo(20.0)));
        assert!(state.players[0].controls.scrubber.is_dragging());
        assert!(!state.players[0].root.player().snapshot().is_playing);

        let _ = update(&mut state, Message::Control(token, ControlMessage::ScrubReleased));
        let _ = update(&mut state, Message::PointerReleased);
        let snap = state.players[0].root.player().snapshot();
        assert!(snap.is_playing);
        assert_eq!(snap.current_time, 20.0);
        assert_eq!(fakes[0].count(&Command::Play), 2);
        assert_eq!(fakes[0].count(&Command::Seek(20.0)), 1);
    }

    #[test]
    fn engine_error_shows_on_the_player_row() {
        let (mut state, fakes) = playing_app();
        fakes[0].push_event(MediaEvent::Error("no output device".into()));

        let _ = update(&mut state, Message::Tick(Instant::now()));

        let row = &state.players[0];
        assert_eq!(row.status.as_deref(), Some("no output device"));
        assert!(!row.root.player().snapshot().is_playing);
        assert_ne!(state.players[1].status.as_deref(), Some("no output device"));
    }

    #[test]
    fn arrow_keys_follow_last_touched_volume_slider() {
        let (mut state, _fakes) = app([0.5, 0.5]);
        let second = state.players[1].root.token();

        let _ = update(&mut state, Message::VolumeKey(StepDirection::Up));
        assert!((state.players[0].root.player().snapshot().volume - 0.7).abs() < 1e-6);

        let _ = update(&mut state, Message::Control(second, ControlMessage::VolumeTo(0.3)));
        let _ = update(&mut state, Message::VolumeKey(StepDirection::Down));
        assert!((state.players[1].root.player().snapshot().volume - 0.1).abs() < 1e-6);
        assert!((state.players[0].root.player().snapshot().volume - 0.7).abs() < 1e-6);
    }

    #[test]
    fn mute_round_trip_pushes_volume_to_media() {
        let (mut state, fakes) = app([0.4, 0.4]);
        let token = state.players[0].root.token();

        let _ = update(&mut state, Message::Control(token, ControlMessage::MuteToggled));
        let _ = update(&mut state, Message::Control(token, ControlMessage::MuteToggled));

        assert_eq!(
            fakes[0].commands(),
            vec![
                Command::Pause,
                Command::Volume(0.4),
                Command::Volume(0.0),
                Command::Volume(0.4)
            ]
        );
    }
}
