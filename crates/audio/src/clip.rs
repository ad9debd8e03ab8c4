//! Playable clip handles.

use serde::{Deserialize, Serialize};

/// Observable playback state of a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClipState {
    /// Not started, or finished.
    #[default]
    Idle,
    /// Playback requested.
    Playing,
    /// Paused with its position retained.
    Paused,
}

/// A loaded, playable audio resource with a fixed source.
///
/// Implementations forward to the host's media facility and return
/// immediately. Failures inside `play` are not reported to the caller.
pub trait Clip {
    /// Move the playback position back to the start.
    fn rewind(&mut self);

    /// Request playback from the current position.
    fn play(&mut self);

    /// Pause playback, keeping the current position.
    fn pause(&mut self);

    /// Current playback state.
    fn state(&self) -> ClipState;
}

/// Clip that tracks state without producing sound.
///
/// Used when no audio backend is compiled in, and for headless runs.
#[derive(Debug, Clone, Default)]
pub struct SilentClip {
    state: ClipState,
}

impl SilentClip {
    /// Create an idle silent clip.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clip for SilentClip {
    fn rewind(&mut self) {}

    fn play(&mut self) {
        self.state = ClipState::Playing;
    }

    fn pause(&mut self) {
        self.state = ClipState::Paused;
    }

    fn state(&self) -> ClipState {
        self.state
    }
}
