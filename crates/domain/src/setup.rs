//! In-progress game configuration built up across the design wizard.
//!
//! The wizard mutates one [`SetupConfig`] instance; [`SetupConfig::validate_complete`]
//! gates session creation and yields the consumed-once [`CompleteSetup`].

use serde::{Deserialize, Serialize};

use crate::catalog::{self, AmbianceCategory};
use crate::difficulty::Difficulty;
use crate::error::DomainError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetupConfig {
    pub theme_id: Option<String>,
    pub category: Option<AmbianceCategory>,
    /// `None` signals an incomplete configuration (e.g. a category with no
    /// shipped locations).
    pub location_id: Option<String>,
    pub difficulty: Difficulty,
}

impl SetupConfig {
    /// Select an ambiance theme. Preselects the default location for the
    /// theme's category; when the category has no locations the location
    /// becomes unset.
    pub fn select_ambiance(&mut self, theme_id: &str) -> Result<(), DomainError> {
        let theme = catalog::theme(theme_id).ok_or_else(|| DomainError::unknown_id(theme_id))?;
        self.theme_id = Some(theme.id.to_string());
        self.category = Some(theme.category);
        self.location_id = catalog::default_location_for(theme).map(|l| l.id.to_string());
        Ok(())
    }

    /// Select a location directly. The ambiance category and theme are
    /// re-derived from the location's own theme tag, so the invariant
    /// "location belongs to the selected category" holds by construction.
    pub fn select_location(&mut self, location_id: &str) -> Result<(), DomainError> {
        let location =
            catalog::location(location_id).ok_or_else(|| DomainError::unknown_id(location_id))?;
        let theme = catalog::theme(location.theme)
            .ok_or_else(|| DomainError::unknown_id(location.theme))?;
        self.location_id = Some(location.id.to_string());
        self.theme_id = Some(theme.id.to_string());
        self.category = Some(theme.category);
        Ok(())
    }

    /// Select a difficulty from its wire/UI form. Unrecognized values fall
    /// back to `normal`.
    pub fn select_difficulty(&mut self, value: &str) {
        self.difficulty = Difficulty::parse_or_default(value);
    }

    /// Gate that must pass before a session is requested.
    pub fn validate_complete(&self) -> Result<CompleteSetup, DomainError> {
        let theme_id = self
            .theme_id
            .clone()
            .ok_or_else(|| DomainError::validation("no ambiance theme selected"))?;
        let location_id = self
            .location_id
            .clone()
            .ok_or_else(|| DomainError::validation("no location selected"))?;
        Ok(CompleteSetup {
            theme_id,
            location_id,
            difficulty: self.difficulty,
        })
    }

    /// Background image for the selected location, if any.
    pub fn location_image(&self) -> Option<&'static str> {
        self.location_id
            .as_deref()
            .and_then(catalog::location)
            .map(|l| l.image)
    }
}

/// A validated configuration, consumed by session creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompleteSetup {
    pub theme_id: String,
    pub location_id: String,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_an_ambiance_preselects_its_default_location() {
        let mut config = SetupConfig::default();
        config.select_ambiance("mysterious").expect("known theme");
        assert_eq!(config.location_id.as_deref(), Some("abandoned_mansion"));
        assert_eq!(config.category, Some(AmbianceCategory::Mystery));
    }

    #[test]
    fn selecting_a_location_rederives_theme_and_category() {
        let mut config = SetupConfig::default();
        config.select_ambiance("mysterious").expect("known theme");
        config.select_location("underwater_lab").expect("known location");
        assert_eq!(config.theme_id.as_deref(), Some("underwater"));
        assert_eq!(config.category, Some(AmbianceCategory::SciFi));
    }

    #[test]
    fn empty_category_leaves_location_unset_and_fails_validation() {
        let mut config = SetupConfig::default();
        config.select_ambiance("haunted").expect("known theme");
        assert_eq!(config.location_id, None);
        assert!(matches!(
            config.validate_complete(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn unknown_difficulty_falls_back_to_normal() {
        let mut config = SetupConfig::default();
        config.select_difficulty("hard");
        assert_eq!(config.difficulty, Difficulty::Hard);
        config.select_difficulty("impossible");
        assert_eq!(config.difficulty, Difficulty::Normal);
    }

    #[test]
    fn complete_setup_carries_the_wizard_choices() {
        let mut config = SetupConfig::default();
        config.select_ambiance("futuristic").expect("known theme");
        config.select_difficulty("easy");
        let complete = config.validate_complete().expect("complete");
        assert_eq!(complete.theme_id, "futuristic");
        assert_eq!(complete.location_id, "sci_fi_hangar");
        assert_eq!(complete.difficulty, Difficulty::Easy);
    }
}
