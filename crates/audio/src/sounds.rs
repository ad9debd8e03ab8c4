//! Sound effect definitions.

use crate::AudioError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifiers for the minigame sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundEffect {
    /// Piece rotated
    Change,
    /// Piece landed
    Drop,
    /// Lines cleared
    Break,
}

impl SoundEffect {
    /// Every effect, in board slot order.
    pub const ALL: [SoundEffect; 3] = [SoundEffect::Change, SoundEffect::Drop, SoundEffect::Break];

    /// Short lowercase name used on the command line and in JavaScript.
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Change => "change",
            SoundEffect::Drop => "drop",
            SoundEffect::Break => "break",
        }
    }

    /// File name of the clip under the sound directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Change => "change.mp3",
            SoundEffect::Drop => "drop.mp3",
            SoundEffect::Break => "break.mp3",
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            SoundEffect::Change => 0,
            SoundEffect::Drop => 1,
            SoundEffect::Break => 2,
        }
    }
}

impl fmt::Display for SoundEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoundEffect {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoundEffect::ALL
            .into_iter()
            .find(|effect| effect.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AudioError::UnknownEffect(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_follow_all_order() {
        for (i, effect) in SoundEffect::ALL.iter().enumerate() {
            assert_eq!(effect.slot(), i);
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(SoundEffect::Change.file_name(), "change.mp3");
        assert_eq!(SoundEffect::Drop.file_name(), "drop.mp3");
        assert_eq!(SoundEffect::Break.file_name(), "break.mp3");
    }

    #[test]
    fn test_parse() {
        assert_eq!("drop".parse::<SoundEffect>().unwrap(), SoundEffect::Drop);
        assert_eq!(" BREAK ".parse::<SoundEffect>().unwrap(), SoundEffect::Break);
        assert!(matches!(
            "rotate".parse::<SoundEffect>(),
            Err(AudioError::UnknownEffect(name)) if name == "rotate"
        ));
    }

    #[test]
    fn test_display_matches_name() {
        for effect in SoundEffect::ALL {
            assert_eq!(effect.to_string(), effect.name());
        }
    }
}
