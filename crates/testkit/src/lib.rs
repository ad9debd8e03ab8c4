#![warn(missing_docs)]
//! Test doubles for sound board tests (recording clips + event log plumbing).

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tetris_sfx_audio::{Clip, ClipState, SoundBoard, SoundEffect};

/// A call made on a clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClipEvent {
    /// Position reset to zero.
    Rewind,
    /// Playback requested.
    Play,
    /// Playback paused.
    Pause,
}

/// Fake playable resource that records every call it receives.
///
/// Position only moves when the test calls [`RecordingClip::advance`] while
/// the clip is playing.
#[derive(Debug, Clone, Default)]
pub struct RecordingClip {
    events: Vec<ClipEvent>,
    position: Duration,
    state: ClipState,
}

impl RecordingClip {
    /// Create an idle clip at position zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls received so far, oldest first.
    pub fn events(&self) -> &[ClipEvent] {
        &self.events
    }

    /// Number of times `event` was received.
    pub fn count(&self, event: ClipEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }

    /// Forget recorded calls, keeping position and state.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// Simulated playback position.
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Whether playback is currently requested.
    pub fn is_playing(&self) -> bool {
        self.state == ClipState::Playing
    }

    /// Let `elapsed` pass; moves the position only while playing.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.is_playing() {
            self.position += elapsed;
        }
    }
}

impl Clip for RecordingClip {
    fn rewind(&mut self) {
        self.events.push(ClipEvent::Rewind);
        self.position = Duration::ZERO;
    }

    fn play(&mut self) {
        self.events.push(ClipEvent::Play);
        self.state = ClipState::Playing;
    }

    fn pause(&mut self) {
        self.events.push(ClipEvent::Pause);
        self.state = ClipState::Paused;
    }

    fn state(&self) -> ClipState {
        self.state
    }
}

/// Build a board whose three clips are fresh [`RecordingClip`]s.
pub fn recording_board() -> SoundBoard<RecordingClip> {
    SoundBoard::new(
        RecordingClip::new(),
        RecordingClip::new(),
        RecordingClip::new(),
    )
}

/// Let `elapsed` pass on every clip of a recording board.
pub fn advance_all(board: &mut SoundBoard<RecordingClip>, elapsed: Duration) {
    for effect in SoundEffect::ALL {
        board.clip_mut(effect).advance(elapsed);
    }
}

/// One clip call captured for a trace log.
#[derive(Debug, Serialize)]
pub struct EventRecord {
    /// Sequence number within the trace.
    pub step: u64,
    /// Effect whose clip received the call.
    pub effect: SoundEffect,
    /// The call itself.
    pub event: ClipEvent,
}

/// Collect every recorded call on `board` into trace records, grouped by effect.
pub fn board_trace(board: &SoundBoard<RecordingClip>) -> Vec<EventRecord> {
    let mut step = 0;
    let mut records = Vec::new();
    for effect in SoundEffect::ALL {
        for event in board.clip(effect).events() {
            records.push(EventRecord {
                step,
                effect,
                event: *event,
            });
            step += 1;
        }
    }
    records
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write(&mut self, event: &EventRecord) -> Result<()> {
        let line = serde_json::to_string(event)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_clip_tracks_position_only_while_playing() {
        let mut clip = RecordingClip::new();
        clip.advance(Duration::from_millis(100));
        assert_eq!(clip.position(), Duration::ZERO);

        clip.play();
        clip.advance(Duration::from_millis(100));
        assert_eq!(clip.position(), Duration::from_millis(100));

        clip.pause();
        clip.advance(Duration::from_millis(100));
        assert_eq!(clip.position(), Duration::from_millis(100));
        assert_eq!(clip.events(), &[ClipEvent::Play, ClipEvent::Pause]);
    }

    #[test]
    fn clear_events_keeps_playback() {
        let mut clip = RecordingClip::new();
        clip.play();
        clip.advance(Duration::from_millis(50));
        clip.clear_events();

        assert!(clip.events().is_empty());
        assert!(clip.is_playing());
        assert_eq!(clip.position(), Duration::from_millis(50));
    }
}
