//! Client-local player preferences.
//!
//! Read from local storage at startup, written back on every change. The
//! backend never sees these; the JSON shape is the storage contract.

use serde::{Deserialize, Serialize};

pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSettings {
    pub music_enabled: bool,
    pub sfx_enabled: bool,
    /// Master volume, 0-100.
    pub volume: u8,
    /// Display language code ("en", "es", "fr").
    pub language: String,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            sfx_enabled: true,
            volume: 80,
            language: "en".to_string(),
        }
    }
}

impl PlayerSettings {
    /// Set the volume, clamped to the valid range.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_VOLUME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_settings() {
        let settings = PlayerSettings::default();
        assert!(settings.music_enabled);
        assert!(settings.sfx_enabled);
        assert_eq!(settings.volume, 80);
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn volume_is_clamped() {
        let mut settings = PlayerSettings::default();
        settings.set_volume(250);
        assert_eq!(settings.volume, MAX_VOLUME);
    }

    #[test]
    fn storage_shape_is_stable() {
        let json = serde_json::to_value(PlayerSettings::default()).expect("serialize");
        assert_eq!(json["volume"], 80);
        assert_eq!(json["language"], "en");
        assert_eq!(json["music_enabled"], true);
    }
}
