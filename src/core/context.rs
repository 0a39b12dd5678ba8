//! core/context.rs
//! `PlayerHandle`: what a scope hands to each control.
//!
//! - one shared `PlayerState` per player (all clones see the same values)
//! - a non-owning slot for the media handle (bound or not)
//!
//! Single-threaded on purpose: every mutation runs on the UI event loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::media::{MediaEvent, MediaHandle};
use super::state::{PlayerSnapshot, PlayerState, Update};

type MediaSlot = Rc<RefCell<Option<Box<dyn MediaHandle>>>>;

#[derive(Clone)]
pub struct PlayerHandle {
    state: Rc<RefCell<PlayerState>>,
    media: MediaSlot,
}

impl fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerHandle")
            .field("state", &*self.state.borrow())
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl PlayerHandle {
    pub fn new(state: PlayerState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            media: Rc::new(RefCell::new(None)),
        }
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.state.borrow().snapshot()
    }

    pub fn last_nonzero_volume(&self) -> f32 {
        self.state.borrow().last_nonzero_volume()
    }

    /// True when both handles point at the same player.
    pub fn same_player(&self, other: &PlayerHandle) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    // Mutation protocol

    pub fn toggle_play(&self) {
        self.state.borrow_mut().toggle_play();
    }

    pub fn set_play(&self, next: impl Into<Update<bool>>) {
        self.state.borrow_mut().set_play(next);
    }

    pub fn seek(&self, to_time: f64) {
        self.state.borrow_mut().seek(to_time);
    }

    pub fn set_volume(&self, next: impl Into<Update<f32>>) {
        self.state.borrow_mut().set_volume(next);
    }

    pub fn set_duration(&self, next: f64) {
        self.state.borrow_mut().set_duration(next);
    }

    pub fn record_current_time(&self, next: f64) {
        self.state.borrow_mut().record_current_time(next);
    }

    pub fn remember_volume(&self, volume: f32) {
        self.state.borrow_mut().remember_volume(volume);
    }

    // Media slot

    pub fn is_bound(&self) -> bool {
        self.media.borrow().is_some()
    }

    pub(crate) fn bind_media(&self, media: Box<dyn MediaHandle>) -> Option<Box<dyn MediaHandle>> {
        self.media.borrow_mut().replace(media)
    }

    pub(crate) fn unbind_media(&self) -> Option<Box<dyn MediaHandle>> {
        self.media.borrow_mut().take()
    }

    /// Run `f` against the bound media handle, if any.
    pub(crate) fn with_media<R>(&self, f: impl FnOnce(&mut dyn MediaHandle) -> R) -> Option<R> {
        let mut slot = self.media.borrow_mut();
        match slot.as_mut() {
            Some(media) => Some(f(media.as_mut())),
            None => None,
        }
    }

    pub(crate) fn drain_media_events(&self) -> Vec<MediaEvent> {
        self.with_media(|m| m.poll_events()).unwrap_or_default()
    }
}
