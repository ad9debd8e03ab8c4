//! Browser playback through `HTMLAudioElement`.

use crate::{AudioError, Clip, ClipState, SoundBoard, SoundEffect, SoundSettings};
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::HtmlAudioElement;

/// A clip backed by a page audio element.
pub struct WebClip {
    element: HtmlAudioElement,
}

impl WebClip {
    /// Create an audio element loading from `src`.
    pub fn new(src: &str) -> Result<Self, AudioError> {
        let element = HtmlAudioElement::new_with_src(src)
            .map_err(|e| AudioError::Output(format!("{:?}", e)))?;
        Ok(Self { element })
    }
}

impl Clip for WebClip {
    fn rewind(&mut self) {
        self.element.set_current_time(0.0);
    }

    fn play(&mut self) {
        // The returned promise is left unawaited.
        if let Err(e) = self.element.play() {
            debug!("Audio play rejected: {:?}", e);
        }
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            debug!("Audio pause rejected: {:?}", e);
        }
    }

    fn state(&self) -> ClipState {
        if !self.element.paused() {
            ClipState::Playing
        } else if self.element.ended() || self.element.current_time() == 0.0 {
            ClipState::Idle
        } else {
            ClipState::Paused
        }
    }
}

/// Sound board exported to the game's JavaScript.
#[wasm_bindgen(js_name = TetrisSounds)]
pub struct WebSoundBoard {
    board: SoundBoard<WebClip>,
}

#[wasm_bindgen(js_class = TetrisSounds)]
impl WebSoundBoard {
    /// Load the clips from the default `/static/sound` path.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebSoundBoard, JsValue> {
        Self::with_base_path(&SoundSettings::default().base_path)
    }

    /// Load the clips from a custom sound directory URL.
    #[wasm_bindgen(js_name = withBasePath)]
    pub fn with_base_path(base_path: &str) -> Result<WebSoundBoard, JsValue> {
        let settings = SoundSettings::with_base_path(base_path);
        let board = SoundBoard::load(|effect: SoundEffect| WebClip::new(&settings.url_for(effect)))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { board })
    }

    #[wasm_bindgen(js_name = playChange)]
    pub fn play_change(&mut self) {
        self.board.play_change();
    }

    #[wasm_bindgen(js_name = playDrop)]
    pub fn play_drop(&mut self) {
        self.board.play_drop();
    }

    #[wasm_bindgen(js_name = playBreak)]
    pub fn play_break(&mut self) {
        self.board.play_break();
    }

    /// Pause an effect by name without rewinding it.
    pub fn stop(&mut self, effect: &str) -> Result<(), JsValue> {
        let effect: SoundEffect = effect
            .parse()
            .map_err(|e: AudioError| JsValue::from_str(&e.to_string()))?;
        self.board.stop(effect);
        Ok(())
    }
}
