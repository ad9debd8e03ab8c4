//! Sound effect triggers for the tetris minigame.
//!
//! Three preloaded clips (change, drop, break) are restarted from zero each
//! time their trigger fires. Playback is fire-and-forget.
//!
//! # Architecture
//!
//! - [`SoundBoard`] - Owns one clip per effect and exposes the triggers
//! - [`Clip`] - Playable resource seam implemented by each backend
//! - [`SoundEffect`] - Identifier for the three effects
//! - [`SoundSettings`] - Where the clip files are served from
//!
//! # Example
//!
//! ```ignore
//! let output = RodioOutput::try_default()?;
//! let mut sounds = output.load_board(Path::new("."), &SoundSettings::default())?;
//! sounds.play_drop();
//! ```

mod board;
mod clip;
mod error;
mod settings;
mod sounds;

#[cfg(feature = "rodio_backend")]
mod rodio_clip;
#[cfg(all(feature = "web_backend", target_arch = "wasm32"))]
mod web_clip;

pub use board::SoundBoard;
pub use clip::{Clip, ClipState, SilentClip};
pub use error::AudioError;
pub use settings::SoundSettings;
pub use sounds::SoundEffect;

#[cfg(feature = "rodio_backend")]
pub use rodio_clip::{RodioClip, RodioOutput};
#[cfg(all(feature = "web_backend", target_arch = "wasm32"))]
pub use web_clip::{WebClip, WebSoundBoard};
