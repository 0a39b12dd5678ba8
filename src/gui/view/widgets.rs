//! Control widgets.
//!
//! Each builder returns the concrete iced widget, so the caller can keep
//! chaining presentation settings (width, style, padding) before placing it.
//! Disabled controls still render; their input maps to `Message::Noop`.

use iced::widget::{Button, Container, Slider, button, column, container, row, slider, text};
use iced::{Alignment, Length};

use super::super::state::{ControlMessage, Message, PlayerRow};
use super::super::util::fmt_time;
use super::constants::{BUTTON_W, SMALL_TEXT, TIME_W, TITLE_TEXT, VOLUME_W};
use crate::core::controls::{MuteToggle, PlayToggle, Scrubber, VolumeSlider};
use crate::core::scope::ScopeToken;

fn control(token: ScopeToken, enabled: bool, msg: ControlMessage) -> Message {
    if enabled {
        Message::Control(token, msg)
    } else {
        Message::Noop
    }
}

pub(crate) fn play_button(token: ScopeToken, play: &PlayToggle) -> Button<'static, Message> {
    let props = play.props();
    let label = if props.active { "pause" } else { "play" };

    button(text(label))
        .on_press_maybe((!props.disabled).then_some(Message::Control(token, ControlMessage::PlayToggled)))
}

pub(crate) fn mute_button(token: ScopeToken, mute: &MuteToggle) -> Button<'static, Message> {
    let props = mute.props();
    let label = if props.active { "unmute" } else { "mute" };

    button(text(label))
        .on_press_maybe((!props.disabled).then_some(Message::Control(token, ControlMessage::MuteToggled)))
}

/// Progress bar. With no known duration the range is frozen at 0..=1 and inert.
pub(crate) fn scrubber(token: ScopeToken, scrubber: &Scrubber) -> Slider<'static, f64, Message> {
    let props = scrubber.props();
    let enabled = !props.disabled && props.max > 0.0;

    let (max, value) = if props.max > 0.0 {
        (props.max, props.value)
    } else {
        (1.0, 0.0)
    };

    slider(props.min..=max, value, move |t| {
        control(token, enabled, ControlMessage::ScrubTo(t))
    })
    .step(props.step)
    .on_release(control(token, enabled, ControlMessage::ScrubReleased))
}

pub(crate) fn volume_slider(token: ScopeToken, volume: &VolumeSlider) -> Slider<'static, f32, Message> {
    let props = volume.props();
    let enabled = !props.disabled;

    slider(
        props.min as f32..=props.max as f32,
        props.value as f32,
        move |v| control(token, enabled, ControlMessage::VolumeTo(v)),
    )
    .step(props.step as f32)
}

/// Page composition for one player: title, transport, time, scrubber, volume, mute.
pub(crate) fn player_row(player: &PlayerRow) -> Container<'_, Message> {
    let token = player.root.token();
    let snap = player.root.player().snapshot();
    let controls = &player.controls;

    let time_text = if snap.duration > 0.0 {
        format!("{} / {}", fmt_time(snap.current_time), fmt_time(snap.duration))
    } else {
        format!("{} / -:--", fmt_time(snap.current_time))
    };

    let mut header = column![text(player.title.as_str()).size(TITLE_TEXT)].spacing(4);
    if let Some(status) = &player.status {
        header = header.push(text(status.as_str()).size(SMALL_TEXT));
    }

    let bar = row![
        play_button(token, &controls.play).width(Length::Fixed(BUTTON_W)),
        text(time_text).size(SMALL_TEXT).width(Length::Fixed(TIME_W)),
        scrubber(token, &controls.scrubber).width(Length::Fill),
        text("volume").size(SMALL_TEXT),
        volume_slider(token, &controls.volume).width(Length::Fixed(VOLUME_W)),
        mute_button(token, &controls.mute).width(Length::Fixed(BUTTON_W)),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(column![header, bar].spacing(6)).padding(12)
}
