use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tetris_sfx_audio::SoundSettings;
use tracing::warn;

pub const DEFAULT_CONFIG_PATH: &str = "config/sfx.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SfxConfig {
    /// Directory the site is served from; clip paths resolve beneath it.
    pub web_root: PathBuf,
    /// Delay between consecutive triggers, in milliseconds.
    pub gap_ms: u64,
    /// How long to keep the process alive after the last trigger.
    pub linger_ms: u64,
    pub sounds: SoundSettings,
}

impl Default for SfxConfig {
    fn default() -> Self {
        Self {
            web_root: PathBuf::from("."),
            gap_ms: 120,
            linger_ms: 1500,
            sounds: SoundSettings::default(),
        }
    }
}

impl SfxConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<SfxConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    SfxConfig::default()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!("Sound config not found at {}. Using defaults", path.display());
                }
                SfxConfig::default()
            }
        }
    }

    /// Save configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "sfx-config-{}-{}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos(),
            name
        ))
    }

    #[test]
    fn missing_file_uses_defaults() {
        let cfg = SfxConfig::load_from_path(&temp_path("absent.toml"));
        assert_eq!(cfg, SfxConfig::default());
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let path = temp_path("bad.toml");
        fs::write(&path, "gap_ms = \"soon\"").unwrap();
        let cfg = SfxConfig::load_from_path(&path);
        assert_eq!(cfg, SfxConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let path = temp_path("partial.toml");
        fs::write(&path, "[sounds]\nbase_path = \"/assets/sfx\"\n").unwrap();
        let cfg = SfxConfig::load_from_path(&path);
        assert_eq!(cfg.sounds.base_path, "/assets/sfx");
        assert_eq!(cfg.gap_ms, 120);
        assert_eq!(cfg.web_root, PathBuf::from("."));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("nested").join("sfx.toml");
        let cfg = SfxConfig {
            gap_ms: 40,
            ..Default::default()
        };
        cfg.save_to_path(&path).expect("save succeeds");
        assert_eq!(SfxConfig::load_from_path(&path), cfg);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
