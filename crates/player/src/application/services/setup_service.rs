//! Setup selector - holds the in-progress wizard configuration.
//!
//! Thin stateful wrapper over [`SetupConfig`]: applies selections, publishes
//! the resulting snapshot, and gates session creation on completeness.

use tracing::debug;

use escapade_domain::{catalog, CompleteSetup, DomainError, SetupConfig};

use crate::application::dto::GameEvent;
use crate::infrastructure::EventBus;

pub struct SetupService {
    bus: EventBus,
    config: SetupConfig,
}

impl SetupService {
    pub fn new(bus: EventBus) -> Self {
        Self {
            bus,
            config: SetupConfig::default(),
        }
    }

    pub fn config(&self) -> &SetupConfig {
        &self.config
    }

    pub async fn select_ambiance(&mut self, theme_id: &str) {
        match self.config.select_ambiance(theme_id) {
            Ok(()) => self.publish().await,
            Err(err) => debug!(%err, theme_id, "ignoring unknown ambiance"),
        }
    }

    pub async fn select_location(&mut self, location_id: &str) {
        match self.config.select_location(location_id) {
            Ok(()) => self.publish().await,
            Err(err) => debug!(%err, location_id, "ignoring unknown location"),
        }
    }

    pub async fn select_difficulty(&mut self, value: &str) {
        self.config.select_difficulty(value);
        self.publish().await;
    }

    /// Re-apply the current default ambiance. Used on design-page entry so
    /// the wizard always starts from a consistent default selection.
    pub async fn reapply_default_ambiance(&mut self) {
        let theme_id = self
            .config
            .theme_id
            .clone()
            .or_else(|| catalog::THEMES.first().map(|t| t.id.to_string()));
        if let Some(theme_id) = theme_id {
            self.select_ambiance(&theme_id).await;
        }
    }

    /// Gate before a session is requested.
    pub fn validate_complete(&self) -> Result<CompleteSetup, DomainError> {
        self.config.validate_complete()
    }

    async fn publish(&self) {
        self.bus
            .dispatch(GameEvent::SetupChanged(self.config.clone()))
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapade_domain::Difficulty;

    #[tokio::test]
    async fn unknown_ids_leave_the_configuration_untouched() {
        let mut setup = SetupService::new(EventBus::new());
        setup.select_ambiance("mysterious").await;
        let before = setup.config().clone();
        setup.select_ambiance("cyberpunk").await;
        setup.select_location("the_moon").await;
        assert_eq!(setup.config(), &before);
    }

    #[tokio::test]
    async fn reapply_starts_from_the_first_theme_when_nothing_is_chosen() {
        let mut setup = SetupService::new(EventBus::new());
        setup.reapply_default_ambiance().await;
        assert_eq!(setup.config().theme_id.as_deref(), Some("mysterious"));
        assert_eq!(
            setup.config().location_id.as_deref(),
            Some("abandoned_mansion")
        );
    }

    #[tokio::test]
    async fn reapply_resets_the_location_to_the_theme_default() {
        let mut setup = SetupService::new(EventBus::new());
        setup.select_ambiance("mysterious").await;
        setup.select_location("ancient_library").await;
        setup.reapply_default_ambiance().await;
        assert_eq!(
            setup.config().location_id.as_deref(),
            Some("abandoned_mansion")
        );
    }

    #[tokio::test]
    async fn wizard_choices_survive_into_the_validated_setup() {
        let mut setup = SetupService::new(EventBus::new());
        setup.select_ambiance("mysterious").await;
        setup.select_difficulty("hard").await;
        let complete = setup.validate_complete().expect("complete");
        assert_eq!(complete.theme_id, "mysterious");
        assert_eq!(complete.location_id, "abandoned_mansion");
        assert_eq!(complete.difficulty, Difficulty::Hard);
    }
}
