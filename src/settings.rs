//! Game settings and preferences
//!
//! Gameplay tuning is compiled in (`crate::consts`); these are the few runtime
//! knobs, with defaults overridable from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default high score file, relative to the working directory
pub const DEFAULT_HIGH_SCORE_PATH: &str = "recycle_sorter_highscore.json";

pub const ENV_HIGH_SCORE_PATH: &str = "RECYCLE_SORTER_HISCORE";
pub const ENV_MUTE: &str = "RECYCLE_SORTER_MUTE";
pub const ENV_NO_AUDIO: &str = "RECYCLE_SORTER_NO_AUDIO";
pub const ENV_SEED: &str = "RECYCLE_SORTER_SEED";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where the high score is kept
    pub high_score_path: PathBuf,
    /// Start with sound muted
    pub muted: bool,
    /// Skip audio entirely
    pub audio: bool,
    /// Fixed RNG seed (random per launch when unset)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_path: PathBuf::from(DEFAULT_HIGH_SCORE_PATH),
            muted: false,
            audio: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`; unparseable values are ignored
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();

        if let Some(path) = lookup(ENV_HIGH_SCORE_PATH).filter(|p| !p.is_empty()) {
            settings.high_score_path = PathBuf::from(path);
        }
        if let Some(muted) = lookup(ENV_MUTE).and_then(|v| parse_flag(&v)) {
            settings.muted = muted;
        }
        if let Some(no_audio) = lookup(ENV_NO_AUDIO).and_then(|v| parse_flag(&v)) {
            settings.audio = !no_audio;
        }
        if let Some(raw) = lookup(ENV_SEED) {
            match raw.trim().parse() {
                Ok(seed) => settings.seed = Some(seed),
                Err(_) => log::warn!("Ignoring {}={:?}: not a number", ENV_SEED, raw),
            }
        }

        log::debug!("Settings: {:?}", settings);
        settings
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
