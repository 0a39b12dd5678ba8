//! gui/update/player.rs
//! Routes control input to the control wired for that player.
//!
//! Iced sliders report change + release only. A scrubber change while the
//! pointer is held starts a drag; any other change (arrow keys, ctrl+wheel)
//! just seeks. Releasing the pointer ends every drag.

use std::time::Instant;

use log::warn;

use super::super::state::{ControlMessage, Sonora};
use crate::core::controls::StepDirection;
use crate::core::scope::ScopeToken;

pub(crate) fn apply(state: &mut Sonora, token: ScopeToken, msg: ControlMessage) {
    if matches!(msg, ControlMessage::VolumeTo(_)) {
        state.keyboard_target = Some(token);
    }

    let pointer_down = state.pointer_down;
    let Some(row) = state.player_mut(token) else {
        warn!("input for unknown player {token:?} dropped");
        return;
    };
    let controls = &mut row.controls;

    match msg {
        ControlMessage::PlayToggled => controls.play.activate(),
        ControlMessage::ScrubTo(time) => {
            if pointer_down && !controls.scrubber.is_dragging() {
                controls.scrubber.press();
            }
            controls.scrubber.drag_to(time);
        }
        ControlMessage::ScrubReleased => controls.scrubber.release(),
        ControlMessage::VolumeTo(volume) => controls.volume.drag_to(volume),
        ControlMessage::VolumeStep(direction) => controls.volume.step(direction),
        ControlMessage::MuteToggled => controls.mute.activate(),
    }
}

pub(crate) fn volume_key(state: &mut Sonora, direction: StepDirection) {
    let target = state
        .keyboard_target
        .or_else(|| state.players.first().map(|p| p.root.token()));

    if let Some(token) = target {
        apply(state, token, ControlMessage::VolumeStep(direction));
    }
}

pub(crate) fn pointer_released(state: &mut Sonora) {
    state.pointer_down = false;
    for row in &mut state.players {
        row.controls.scrubber.release();
    }
}

pub(crate) fn tick(state: &mut Sonora, at: Instant) {
    for row in &mut state.players {
        if !row.root.player().is_bound() {
            continue;
        }
        row.root.tick(at);
        if let Some(err) = row.root.media_error() {
            row.status = Some(err.to_string());
        }
    }
}
