//! Sound board holding one clip per effect.

use crate::{Clip, ClipState, SilentClip, SoundEffect};
use tracing::{debug, trace};

/// Owns the three effect clips and fires them on request.
///
/// Built once by the host and handed by reference to whatever needs to
/// trigger sounds. Each trigger touches only its own clip; a repeat trigger
/// restarts the clip from zero instead of layering a second playback.
pub struct SoundBoard<C> {
    /// Clips indexed by effect slot
    clips: [C; 3],
}

impl<C: Clip> SoundBoard<C> {
    /// Create a board from already loaded clips.
    pub fn new(change: C, drop: C, brk: C) -> Self {
        Self {
            clips: [change, drop, brk],
        }
    }

    /// Create a board by loading each effect's clip.
    ///
    /// Stops at the first clip that fails to load.
    pub fn load<E, F>(mut load: F) -> Result<Self, E>
    where
        F: FnMut(SoundEffect) -> Result<C, E>,
    {
        let change = load(SoundEffect::Change)?;
        let drop = load(SoundEffect::Drop)?;
        let brk = load(SoundEffect::Break)?;
        debug!("Sound board loaded");
        Ok(Self::new(change, drop, brk))
    }

    /// Restart the rotate sound.
    pub fn play_change(&mut self) {
        self.trigger(SoundEffect::Change);
    }

    /// Restart the landing sound.
    pub fn play_drop(&mut self) {
        self.trigger(SoundEffect::Drop);
    }

    /// Restart the line clear sound.
    pub fn play_break(&mut self) {
        self.trigger(SoundEffect::Break);
    }

    /// Rewind `effect` to the start and request playback.
    pub fn trigger(&mut self, effect: SoundEffect) {
        trace!("Trigger {}", effect);
        let clip = &mut self.clips[effect.slot()];
        clip.rewind();
        clip.play();
    }

    /// Pause `effect` without rewinding it.
    pub fn stop(&mut self, effect: SoundEffect) {
        trace!("Stop {}", effect);
        self.clips[effect.slot()].pause();
    }

    /// Clip bound to `effect`.
    pub fn clip(&self, effect: SoundEffect) -> &C {
        &self.clips[effect.slot()]
    }

    /// Mutable access to the clip bound to `effect`.
    pub fn clip_mut(&mut self, effect: SoundEffect) -> &mut C {
        &mut self.clips[effect.slot()]
    }

    /// Playback state of `effect`.
    pub fn state(&self, effect: SoundEffect) -> ClipState {
        self.clip(effect).state()
    }
}

impl SoundBoard<SilentClip> {
    /// Create a board that tracks state but plays nothing.
    pub fn silent() -> Self {
        Self::new(SilentClip::new(), SilentClip::new(), SilentClip::new())
    }
}

impl Default for SoundBoard<SilentClip> {
    fn default() -> Self {
        Self::silent()
    }
}
