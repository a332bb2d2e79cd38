use std::collections::HashMap;

use log::debug;

use crate::assets::{AudioAsset, AudioAssetId, PlaybackState, get_audio_assets};

/// Per-asset playback state owned by the UI. Seeded from the catalog defaults;
/// the catalog itself is never touched.
#[derive(Clone, Debug)]
pub struct SessionState {
    states: HashMap<AudioAssetId, PlaybackState>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_assets(get_audio_assets())
    }
}

impl SessionState {
    pub fn from_assets(assets: &[AudioAsset]) -> Self {
        let states = assets
            .iter()
            .map(|asset| (asset.id, asset.playback_state))
            .collect();
        Self { states }
    }

    pub fn state(&self, id: AudioAssetId) -> PlaybackState {
        self.states.get(&id).copied().unwrap_or_default()
    }

    /// Flips `id` between paused and playing and returns the new state.
    pub fn toggle(&mut self, id: AudioAssetId) -> PlaybackState {
        let state = self.states.entry(id).or_default();
        *state = state.toggled();
        debug!("Asset {id} is now {state:?}");
        *state
    }

    pub fn pause_all(&mut self) {
        for state in self.states.values_mut() {
            *state = PlaybackState::Paused;
        }
    }

    pub fn playing_count(&self) -> usize {
        self.states.values().filter(|state| state.is_playing()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::get_audio_asset;

    #[test]
    fn test_starts_paused() {
        let session = SessionState::default();
        for id in AudioAssetId::ALL {
            assert_eq!(session.state(id), PlaybackState::Paused);
        }
        assert_eq!(session.playing_count(), 0);
    }

    #[test]
    fn test_toggle_leaves_catalog_untouched() {
        let mut session = SessionState::default();
        assert_eq!(session.toggle(AudioAssetId::Rain), PlaybackState::Playing);
        assert_eq!(session.state(AudioAssetId::Rain), PlaybackState::Playing);
        assert_eq!(session.state(AudioAssetId::Water), PlaybackState::Paused);
        assert_eq!(
            get_audio_asset(AudioAssetId::Rain).playback_state,
            PlaybackState::Paused
        );

        assert_eq!(session.toggle(AudioAssetId::Rain), PlaybackState::Paused);
    }

    #[test]
    fn test_pause_all() {
        let mut session = SessionState::default();
        session.toggle(AudioAssetId::Water);
        session.toggle(AudioAssetId::Thunderstorm);
        assert_eq!(session.playing_count(), 2);

        session.pause_all();
        assert_eq!(session.playing_count(), 0);
    }

    #[test]
    fn test_partial_session_defaults_to_paused() {
        let mut session = SessionState::from_assets(&get_audio_assets()[..1]);
        assert_eq!(session.state(AudioAssetId::Rain), PlaybackState::Paused);
        assert_eq!(session.toggle(AudioAssetId::Rain), PlaybackState::Playing);
    }
}
