//! core/media.rs
//! The media handle contract: the narrow surface the player core commands and observes.
//!
//! Implementations own the actual decode/output; the core never does.

/// Something the media resource reports back.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Metadata is known: total duration (seconds) and the resource's own volume.
    MetadataReady { duration: f64, volume: f32 },
    /// Native playhead moved (seconds).
    TimeAdvanced(f64),
    Ended,
    Error(String),
}

/// A playable media resource.
///
/// Commands are best-effort: a handle whose backend died simply drops them.
pub trait MediaHandle {
    fn play(&mut self);
    fn pause(&mut self);

    /// Playhead, seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);

    fn set_volume(&mut self, volume: f32);

    /// Drain everything reported since the last call.
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}

#[cfg(test)]
pub(crate) mod fake {
    //! Recording media handle for tests.

    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{MediaEvent, MediaHandle};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum Command {
        Play,
        Pause,
        Seek(f64),
        Volume(f32),
    }

    #[derive(Debug, Default)]
    pub(crate) struct Shared {
        pub commands: Vec<Command>,
        pub pending: Vec<MediaEvent>,
        pub time: f64,
        pub volume: f32,
        pub playing: bool,
    }

    /// Clone one into the player; keep the other to script and inspect.
    #[derive(Debug, Clone, Default)]
    pub(crate) struct FakeMedia {
        pub shared: Rc<RefCell<Shared>>,
    }

    impl FakeMedia {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn commands(&self) -> Vec<Command> {
            self.shared.borrow().commands.clone()
        }

        pub fn count(&self, cmd: &Command) -> usize {
            self.shared
                .borrow()
                .commands
                .iter()
                .filter(|c| *c == cmd)
                .count()
        }

        pub fn push_event(&self, ev: MediaEvent) {
            self.shared.borrow_mut().pending.push(ev);
        }

        /// Simulate native advancement while playing.
        pub fn advance(&self, seconds: f64) {
            let mut s = self.shared.borrow_mut();
            if s.playing {
                s.time += seconds;
            }
        }

        pub fn boxed(&self) -> Box<dyn MediaHandle> {
            Box::new(self.clone())
        }
    }

    impl MediaHandle for FakeMedia {
        fn play(&mut self) {
            let mut s = self.shared.borrow_mut();
            s.playing = true;
            s.commands.push(Command::Play);
        }

        fn pause(&mut self) {
            let mut s = self.shared.borrow_mut();
            s.playing = false;
            s.commands.push(Command::Pause);
        }

        fn current_time(&self) -> f64 {
            self.shared.borrow().time
        }

        fn set_current_time(&mut self, seconds: f64) {
            let mut s = self.shared.borrow_mut();
            s.time = seconds;
            s.commands.push(Command::Seek(seconds));
        }

        fn set_volume(&mut self, volume: f32) {
            let mut s = self.shared.borrow_mut();
            s.volume = volume;
            s.commands.push(Command::Volume(volume));
        }

        fn poll_events(&mut self) -> Vec<MediaEvent> {
            std::mem::take(&mut self.shared.borrow_mut().pending)
        }
    }
}
