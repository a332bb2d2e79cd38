use std::str::FromStr;

use anyhow::{Context, anyhow};

use crate::assets::AudioAssetId;

pub const APP_VERSION: &str = "v0.1.0";

/// Environment variable overriding the compiled-in build mode.
pub const MODE_ENV_VAR: &str = "AMBIENT_MODE";

/// Comma-separated asset ids to start playing, e.g. `rain,thunderstorm`.
pub const AUTOPLAY_ENV_VAR: &str = "AMBIENT_AUTOPLAY";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BuildMode {
    Development,
    /// Console output is silenced.
    Production,
}

impl BuildMode {
    /// Mode implied by the compiler profile: release builds are production.
    pub const fn compiled() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    pub fn is_production(self) -> bool {
        self == BuildMode::Production
    }
}

impl FromStr for BuildMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            other => Err(anyhow!("Unknown build mode: {other:?}")),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct PlayerConfig {
    pub mode: BuildMode,

    /// Initial window size in logical points.
    pub window_size: [f32; 2],

    pub title: String,

    /// Assets marked as playing when the window opens.
    pub autoplay: Vec<AudioAssetId>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::compiled(),
            window_size: [420.0, 520.0],
            title: "Ambience".to_string(),
            autoplay: Vec::new(),
        }
    }
}

impl PlayerConfig {
    /// Defaults, overridden by `AMBIENT_MODE` and `AMBIENT_AUTOPLAY` when set.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var(MODE_ENV_VAR).ok().as_deref(),
            std::env::var(AUTOPLAY_ENV_VAR).ok().as_deref(),
        )
    }

    fn from_vars(mode: Option<&str>, autoplay: Option<&str>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(mode) = mode {
            config.mode = mode
                .parse()
                .with_context(|| format!("Invalid {MODE_ENV_VAR}"))?;
        }
        if let Some(autoplay) = autoplay {
            config.autoplay = parse_autoplay(autoplay)
                .with_context(|| format!("Invalid {AUTOPLAY_ENV_VAR}"))?;
        }
        Ok(config)
    }
}

fn parse_autoplay(value: &str) -> anyhow::Result<Vec<AudioAssetId>> {
    let mut ids = Vec::new();
    for part in value.split(',').map(str::trim).filter(|part| !part.is_empty()) {
        let id: AudioAssetId = part.parse()?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_mode() {
        assert_eq!("production".parse::<BuildMode>().unwrap(), BuildMode::Production);
        assert_eq!(" Dev ".parse::<BuildMode>().unwrap(), BuildMode::Development);
        assert!("staging".parse::<BuildMode>().is_err());
    }

    #[test]
    fn test_mode_var_overrides_default() {
        let config = PlayerConfig::from_vars(Some("production"), None).unwrap();
        assert!(config.mode.is_production());

        let config = PlayerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.mode, BuildMode::compiled());
        assert!(config.autoplay.is_empty());
    }

    #[test]
    fn test_invalid_mode_var_is_an_error() {
        let err = PlayerConfig::from_vars(Some("loud"), None).unwrap_err();
        assert!(format!("{err:#}").contains("AMBIENT_MODE"));
    }

    #[test]
    fn test_autoplay_ids() {
        let config = PlayerConfig::from_vars(None, Some(" rain, water,,rain ")).unwrap();
        assert_eq!(config.autoplay, [AudioAssetId::Rain, AudioAssetId::Water]);
    }

    #[test]
    fn test_autoplay_rejects_unknown_id() {
        let err = PlayerConfig::from_vars(None, Some("rain,snow")).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("AMBIENT_AUTOPLAY"));
        assert!(message.contains("snow"));
    }
}
