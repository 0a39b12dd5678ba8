//! core/mod.rs
//!
//! The player core, with no GUI imports:
//! - shared player state + mutation protocol (`state`, `context`)
//! - scoped lookup so several players can share one page (`scope`, `root`)
//! - the media handle contract and the wrapper that keeps it in sync (`media`, `binding`, `poll`)
//! - headless controls (`controls`)
//! - the desktop media backend (`playback`)
//!
//! The GUI renders control props and feeds user input back into the controls.

pub mod binding;
pub mod config;
pub mod context;
pub mod controls;
pub mod error;
pub mod media;
pub mod playback;
pub mod poll;
pub mod root;
pub mod scope;
pub mod state;
pub mod title;
