//! core/scope.rs
//! Binding layer: isolated lookup scopes for player bundles.
//!
//! `create_scope` returns a (Provider, Lookup) pair over one shared frame stack.
//! - `Provider::provide` pushes a frame and returns a guard; dropping the guard
//!   (player root torn down) removes the frame.
//! - `Lookup::lookup` resolves the nearest enclosing frame, or the frame for an
//!   explicit `ScopeToken` when controls are not nested under their player.
//!
//! Lookups fail with `ControlError` at wiring time, never silently.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;

use super::error::ControlError;

static NEXT_TOKEN: AtomicU64 = AtomicU64::new(1);

/// Opaque key for one logical player instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeToken(u64);

impl ScopeToken {
    pub fn new() -> Self {
        Self(NEXT_TOKEN.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ScopeToken {
    fn default() -> Self {
        Self::new()
    }
}

struct Frame<T> {
    id: u64,
    token: ScopeToken,
    value: T,
}

struct Frames<T> {
    name: &'static str,
    next_id: u64,
    stack: Vec<Frame<T>>,
}

pub fn create_scope<T: Clone>(name: &'static str) -> (Provider<T>, Lookup<T>) {
    let frames = Rc::new(RefCell::new(Frames {
        name,
        next_id: 0,
        stack: Vec::new(),
    }));

    (
        Provider {
            frames: frames.clone(),
        },
        Lookup { frames },
    )
}

pub struct Provider<T> {
    frames: Rc<RefCell<Frames<T>>>,
}

impl<T> Clone for Provider<T> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
        }
    }
}

impl<T> Provider<T> {
    /// Make `value` visible to lookups until the guard is dropped.
    pub fn provide(&self, token: ScopeToken, value: T) -> ProvideGuard<T> {
        let mut frames = self.frames.borrow_mut();
        let id = frames.next_id;
        frames.next_id += 1;
        frames.stack.push(Frame { id, token, value });

        debug!("{}: provided scope {:?}", frames.name, token);

        ProvideGuard {
            frames: self.frames.clone(),
            id,
        }
    }
}

/// Ends a provided frame on drop.
pub struct ProvideGuard<T> {
    frames: Rc<RefCell<Frames<T>>>,
    id: u64,
}

impl<T> Drop for ProvideGuard<T> {
    fn drop(&mut self) {
        let mut frames = self.frames.borrow_mut();
        let id = self.id;
        frames.stack.retain(|f| f.id != id);
    }
}

pub struct Lookup<T> {
    frames: Rc<RefCell<Frames<T>>>,
}

impl<T> Clone for Lookup<T> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
        }
    }
}

impl<T: Clone> Lookup<T> {
    pub fn lookup(&self, consumer: &'static str, token: Option<ScopeToken>) -> Result<T, ControlError> {
        let frames = self.frames.borrow();
        let provider = frames.name;

        match token {
            Some(token) => frames
                .stack
                .iter()
                .rev()
                .find(|f| f.token == token)
                .map(|f| f.value.clone())
                .ok_or(ControlError::UnknownScope { consumer, provider }),
            None => frames
                .stack
                .last()
                .map(|f| f.value.clone())
                .ok_or(ControlError::OutsideProvider { consumer, provider }),
        }
    }
}
