//! core/binding.rs
//! Media-handle binding wrapper.
//!
//! Owns the conversation with the media handle:
//! - state `is_playing` changes -> play()/pause() + start/stop time polling
//! - media events -> state (metadata, ended)
//! - poll ticks -> `record_current_time(round(t))`
//!
//! The only other writers are the scrubber (position, while dragging)
//! and the volume slider (volume property).

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::context::PlayerHandle;
use super::media::{MediaEvent, MediaHandle};
use super::poll::PollTask;

#[derive(Debug)]
pub struct AudioBinding {
    player: PlayerHandle,
    /// Last play intent pushed to the media handle. `None` until first sync after attach.
    applied_playing: Option<bool>,
    poll: PollTask,
    /// Last error the media handle reported since it was attached.
    media_error: Option<String>,
}

impl AudioBinding {
    pub fn new(player: PlayerHandle, poll_interval: Duration) -> Self {
        Self {
            player,
            applied_playing: None,
            poll: PollTask::new(poll_interval),
            media_error: None,
        }
    }

    pub fn player(&self) -> &PlayerHandle {
        &self.player
    }

    pub fn is_polling(&self) -> bool {
        self.poll.is_running()
    }

    pub fn media_error(&self) -> Option<&str> {
        self.media_error.as_deref()
    }

    pub fn attach(&mut self, media: Box<dyn MediaHandle>) {
        if self.player.bind_media(media).is_some() {
            debug!("replaced previously bound media handle");
        }
        self.applied_playing = None;
        self.media_error = None;
        self.poll.cancel();
        info!("media handle attached");
    }

    pub fn detach(&mut self) -> Option<Box<dyn MediaHandle>> {
        self.poll.cancel();
        self.applied_playing = None;
        let media = self.player.unbind_media();
        if media.is_some() {
            info!("media handle detached");
        }
        media
    }

    /// React to the current play intent. Only transitions reach the media handle.
    pub fn sync(&mut self, now: Instant) {
        if !self.player.is_bound() {
            self.poll.cancel();
            self.applied_playing = None;
            return;
        }

        let playing = self.player.snapshot().is_playing;
        if self.applied_playing == Some(playing) {
            return;
        }

        if playing {
            debug!("media: play");
            self.player.with_media(|m| m.play());
            self.poll.start(now);
        } else {
            debug!("media: pause");
            self.player.with_media(|m| m.pause());
            self.poll.cancel();
        }
        self.applied_playing = Some(playing);
    }

    /// Drain media events, then sample the playhead if the poll task is due.
    /// Returns true when a time sample was recorded.
    pub fn tick(&mut self, now: Instant) -> bool {
        for ev in self.player.drain_media_events() {
            self.handle_event(ev);
        }
        self.sync(now);

        if !self.poll.due(now) {
            return false;
        }

        match self.player.with_media(|m| m.current_time()) {
            Some(t) => {
                self.player.record_current_time(t.round());
                true
            }
            None => false,
        }
    }

    pub fn handle_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::MetadataReady { duration, volume } => {
                info!("metadata ready: duration={duration:.1}s volume={volume:.2}");
                self.player.set_volume(volume);
                self.player.set_duration(duration);
            }
            MediaEvent::Ended => {
                debug!("media ended");
                self.player.set_play(false);
            }
            MediaEvent::TimeAdvanced(_) => {}
            MediaEvent::Error(err) => {
                warn!("media error: {err}");
                self.player.set_play(false);
                self.media_error = Some(err);
            }
        }
    }
}

impl Drop for AudioBinding {
    fn drop(&mut self) {
        self.poll.cancel();
        debug!("binding torn down, polling cancelled");
    }
}
