//! Client-local player settings, persisted through the storage provider.
//!
//! Loaded once at startup; every change is written back immediately and
//! published so the rendering layer can reflect it.

use std::sync::Arc;

use tracing::warn;

use escapade_domain::PlayerSettings;

use crate::application::dto::GameEvent;
use crate::infrastructure::EventBus;
use crate::ports::outbound::{storage_keys, StorageProvider};

pub struct SettingsService {
    bus: EventBus,
    storage: Arc<dyn StorageProvider>,
    settings: PlayerSettings,
}

impl SettingsService {
    pub fn new(bus: EventBus, storage: Arc<dyn StorageProvider>) -> Self {
        let settings = Self::load(storage.as_ref());
        Self {
            bus,
            storage,
            settings,
        }
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub async fn set_music_enabled(&mut self, enabled: bool) {
        self.settings.music_enabled = enabled;
        self.persist().await;
    }

    pub async fn set_sfx_enabled(&mut self, enabled: bool) {
        self.settings.sfx_enabled = enabled;
        self.persist().await;
    }

    pub async fn set_volume(&mut self, volume: u8) {
        self.settings.set_volume(volume);
        self.persist().await;
    }

    pub async fn set_language(&mut self, language: String) {
        self.settings.language = language;
        self.persist().await;
    }

    fn load(storage: &dyn StorageProvider) -> PlayerSettings {
        let Some(raw) = storage.load(storage_keys::SETTINGS) else {
            return PlayerSettings::default();
        };
        match serde_json::from_str(&raw) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, "stored settings unreadable, using defaults");
                PlayerSettings::default()
            }
        }
    }

    async fn persist(&self) {
        match serde_json::to_string(&self.settings) {
            Ok(raw) => self.storage.save(storage_keys::SETTINGS, &raw),
            Err(err) => warn!(%err, "failed to serialize settings"),
        }
        self.bus
            .dispatch(GameEvent::SettingsChanged(self.settings.clone()))
            .await;
    }
}
