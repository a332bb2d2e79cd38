use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;

/// Identifies one sound in the catalog. The string forms are stable and safe to
/// store in preferences or pass on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AudioAssetId {
    Water,
    Rainstorm,
    Thunderstorm,
    Rain,
}

impl AudioAssetId {
    /// Every id, in catalog declaration order.
    pub const ALL: [AudioAssetId; 4] = [
        AudioAssetId::Water,
        AudioAssetId::Rainstorm,
        AudioAssetId::Thunderstorm,
        AudioAssetId::Rain,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            AudioAssetId::Water => "water",
            AudioAssetId::Rainstorm => "rainstorm",
            AudioAssetId::Thunderstorm => "thunderstorm",
            AudioAssetId::Rain => "rain",
        }
    }
}

impl fmt::Display for AudioAssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioAssetId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AudioAssetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown audio asset id: {s:?}"))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

impl PlaybackState {
    pub fn toggled(self) -> Self {
        match self {
            PlaybackState::Paused => PlaybackState::Playing,
            PlaybackState::Playing => PlaybackState::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }
}

/// Container/encoding of an audio file.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AudioAssetType {
    AudioOgg,
}

impl AudioAssetType {
    pub const fn mime_type(self) -> &'static str {
        match self {
            AudioAssetType::AudioOgg => "audio/ogg",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct AudioAssetFile {
    pub url: &'static str,
    pub kind: AudioAssetType,
}

impl AudioAssetFile {
    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct AudioAssetIcons {
    /// Emoji shown inline next to the name.
    pub glyph: &'static str,
    pub svg_url: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct AudioAsset {
    pub id: AudioAssetId,
    pub name: &'static str,
    pub icons: AudioAssetIcons,
    /// Alternate recordings of the same sound. Never empty.
    pub files: &'static [AudioAssetFile],
    /// Always `Paused` in the static catalog; live state is owned by the UI.
    pub playback_state: PlaybackState,
}
