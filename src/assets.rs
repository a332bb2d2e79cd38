pub mod catalog;
pub mod types;

pub use catalog::{get_audio_asset, get_audio_assets, verify_catalog};
pub use types::{AudioAsset, AudioAssetId, PlaybackState};
