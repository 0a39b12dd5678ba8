//! gui/subscription.rs
//! - periodic `Tick` while any player has a media handle (drains media events,
//!   samples the playhead of players that are polling)
//! - arrow keys for the volume slider
//! - left mouse button state (captured or not), so scrubber changes can tell
//!   a pointer drag from a keyboard/wheel nudge

use iced::keyboard::{self, Key, key::Named};
use iced::mouse;
use iced::{Event, Subscription, event, time, window};

use super::state::{Message, Sonora};
use crate::core::controls::StepDirection;

pub(crate) fn subscription(state: &Sonora) -> Subscription<Message> {
    let keys = event::listen_with(input_events);

    if !state.any_bound() {
        return keys;
    }

    let tick = time::every(state.poll_interval).map(Message::Tick);
    Subscription::batch([tick, keys])
}

fn input_events(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match key {
            Key::Named(Named::ArrowLeft) => Some(Message::VolumeKey(StepDirection::Down)),
            Key::Named(Named::ArrowRight) => Some(Message::VolumeKey(StepDirection::Up)),
            _ => None,
        },
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => Some(Message::PointerPressed),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Message::PointerReleased),
        _ => None,
    }
}
