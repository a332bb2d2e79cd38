use anyhow::{Result, bail, ensure};
use log::debug;

use super::types::{
    AudioAsset, AudioAssetFile, AudioAssetIcons, AudioAssetId, AudioAssetType, PlaybackState,
};

const fn ogg(url: &'static str) -> AudioAssetFile {
    AudioAssetFile {
        url,
        kind: AudioAssetType::AudioOgg,
    }
}

const WATER_A: AudioAssetFile = ogg("assets/audio/water-a.ogg");
const WATER_B: AudioAssetFile = ogg("assets/audio/water-b.ogg");
const RAINSTORM_A: AudioAssetFile = ogg("assets/audio/rainstorm-a.ogg");
const RAINSTORM_B: AudioAssetFile = ogg("assets/audio/rainstorm-b.ogg");
const THUNDERSTORM_A: AudioAssetFile = ogg("assets/audio/thunderstorm-a.ogg");
const THUNDERSTORM_B: AudioAssetFile = ogg("assets/audio/thunderstorm-b.ogg");
const RAIN_A: AudioAssetFile = ogg("assets/audio/rain-a.ogg");
const RAIN_B: AudioAssetFile = ogg("assets/audio/rain-b.ogg");
const LIGHT_RAIN_A: AudioAssetFile = ogg("assets/audio/light-rain-a.ogg");
const LIGHT_RAIN_B: AudioAssetFile = ogg("assets/audio/light-rain-b.ogg");
const HEAVY_RAIN_A: AudioAssetFile = ogg("assets/audio/heavy-rain-a.ogg");
const HEAVY_RAIN_B: AudioAssetFile = ogg("assets/audio/heavy-rain-b.ogg");

static AUDIO_ASSETS: [AudioAsset; 4] = [
    AudioAsset {
        id: AudioAssetId::Water,
        name: "Water",
        icons: AudioAssetIcons {
            glyph: "💧",
            svg_url: "assets/icons/water.svg",
        },
        files: &[WATER_A, WATER_B],
        playback_state: PlaybackState::Paused,
    },
    AudioAsset {
        id: AudioAssetId::Rainstorm,
        name: "Rainstorm",
        icons: AudioAssetIcons {
            glyph: "🌧️",
            svg_url: "assets/icons/rainstorm.svg",
        },
        files: &[RAINSTORM_A, RAINSTORM_B],
        playback_state: PlaybackState::Paused,
    },
    AudioAsset {
        id: AudioAssetId::Thunderstorm,
        name: "Thunderstorm",
        icons: AudioAssetIcons {
            glyph: "⛈️",
            svg_url: "assets/icons/thunderstorm.svg",
        },
        files: &[THUNDERSTORM_A, THUNDERSTORM_B],
        playback_state: PlaybackState::Paused,
    },
    AudioAsset {
        id: AudioAssetId::Rain,
        name: "Rain",
        icons: AudioAssetIcons {
            glyph: "🌦️",
            svg_url: "assets/icons/rain.svg",
        },
        files: &[
            RAIN_A,
            RAIN_B,
            HEAVY_RAIN_A,
            HEAVY_RAIN_B,
            LIGHT_RAIN_A,
            LIGHT_RAIN_B,
        ],
        playback_state: PlaybackState::Paused,
    },
];

/// Returns the catalog entry for `id`.
///
/// Panics if the catalog has no entry for `id`; that can only happen if
/// `AudioAssetId` and the catalog drift apart, which `verify_catalog` catches
/// at startup.
pub fn get_audio_asset(id: AudioAssetId) -> &'static AudioAsset {
    AUDIO_ASSETS
        .iter()
        .find(|asset| asset.id == id)
        .unwrap_or_else(|| panic!("No audio asset registered for id {id}"))
}

/// The full catalog in declaration order.
pub fn get_audio_assets() -> &'static [AudioAsset] {
    &AUDIO_ASSETS
}

/// Startup self-check: each id appears exactly once and every asset has files.
pub fn verify_catalog() -> Result<()> {
    verify_assets(get_audio_assets())
}

fn verify_assets(assets: &[AudioAsset]) -> Result<()> {
    for id in AudioAssetId::ALL {
        let count = assets.iter().filter(|asset| asset.id == id).count();
        ensure!(count == 1, "Audio asset {id} registered {count} times");
    }

    for asset in assets {
        if asset.files.is_empty() {
            bail!("Audio asset {} has no files", asset.id);
        }
    }

    debug!("Audio catalog verified: {} assets", assets.len());
    Ok(())
}
