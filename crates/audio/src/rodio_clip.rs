//! Native playback through rodio.

use crate::{AudioError, Clip, ClipState, SoundBoard, SoundEffect, SoundSettings};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Audio output device shared by all clips.
pub struct RodioOutput {
    /// Output stream (must be kept alive)
    _stream: OutputStream,
    /// Stream handle for creating sinks
    stream_handle: OutputStreamHandle,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn try_default() -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::Output(e.to_string()))?;
        debug!("Audio output stream opened");
        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }

    /// Read and validate a clip file.
    pub fn load_clip(&self, path: &Path) -> Result<RodioClip, AudioError> {
        let bytes = fs::read(path).map_err(|source| AudioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data: Arc<[u8]> = bytes.into();

        Decoder::new(Cursor::new(data.clone())).map_err(|e| AudioError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let sink = Sink::try_new(&self.stream_handle)
            .map_err(|e| AudioError::Output(e.to_string()))?;

        debug!("Loaded clip: {}", path.display());
        Ok(RodioClip {
            data,
            stream_handle: self.stream_handle.clone(),
            sink,
        })
    }

    /// Load all three effect clips from a local copy of the site.
    pub fn load_board(
        &self,
        web_root: &Path,
        settings: &SoundSettings,
    ) -> Result<SoundBoard<RodioClip>, AudioError> {
        SoundBoard::load(|effect: SoundEffect| self.load_clip(&settings.file_for(web_root, effect)))
    }
}

/// A clip played through its own rodio sink.
pub struct RodioClip {
    /// Encoded clip bytes
    data: Arc<[u8]>,
    /// Handle for creating replacement sinks
    stream_handle: OutputStreamHandle,
    /// Current playback sink
    sink: Sink,
}

impl Clip for RodioClip {
    fn rewind(&mut self) {
        // Dropping the old sink stops whatever it was playing.
        match Sink::try_new(&self.stream_handle) {
            Ok(sink) => self.sink = sink,
            Err(e) => {
                debug!("Failed to create audio sink: {}", e);
                self.sink.clear();
            }
        }
    }

    fn play(&mut self) {
        if self.sink.empty() {
            match Decoder::new(Cursor::new(self.data.clone())) {
                Ok(source) => self.sink.append(source),
                Err(e) => {
                    debug!("Failed to decode audio: {}", e);
                    return;
                }
            }
        }
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn state(&self) -> ClipState {
        if self.sink.is_paused() {
            ClipState::Paused
        } else if self.sink.empty() {
            ClipState::Idle
        } else {
            ClipState::Playing
        }
    }
}
