//! Clip source locations.

use crate::SoundEffect;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default URL path the game serves its sound files from.
pub const DEFAULT_BASE_PATH: &str = "/static/sound";

/// Where the effect clips live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    /// URL path of the sound directory, e.g. `/static/sound`
    pub base_path: String,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl SoundSettings {
    /// Create settings pointing at a custom sound directory.
    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// URL the browser loads `effect` from.
    pub fn url_for(&self, effect: SoundEffect) -> String {
        let base = self.base_path.trim_end_matches('/');
        format!("{}/{}", base, effect.file_name())
    }

    /// Local file for `effect` when the site is served from `web_root`.
    pub fn file_for(&self, web_root: &Path, effect: SoundEffect) -> PathBuf {
        let mut path = web_root.to_path_buf();
        for part in self.base_path.split('/').filter(|p| !p.is_empty()) {
            path.push(part);
        }
        path.push(effect.file_name());
        path
    }
}
