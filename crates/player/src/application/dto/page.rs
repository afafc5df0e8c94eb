//! Named pages of the client.

use serde::{Deserialize, Serialize};

/// Every screen the client can show. `Settings` and `LoadGame` are
/// modal-style: they return to the page that was active before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Start,
    GameMode,
    Design,
    Loading,
    Session,
    Settings,
    LoadGame,
}

impl Page {
    pub fn is_modal(&self) -> bool {
        matches!(self, Page::Settings | Page::LoadGame)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Start => "start",
            Page::GameMode => "game-mode",
            Page::Design => "design",
            Page::Loading => "loading",
            Page::Session => "session",
            Page::Settings => "settings",
            Page::LoadGame => "load-game",
        }
    }

    /// Parse a page identifier; unknown names yield `None` so callers can
    /// treat them as a no-op.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "start" => Some(Page::Start),
            "game-mode" => Some(Page::GameMode),
            "design" => Some(Page::Design),
            "loading" => Some(Page::Loading),
            "session" => Some(Page::Session),
            "settings" => Some(Page::Settings),
            "load-game" => Some(Page::LoadGame),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_settings_and_load_game_are_modal() {
        assert!(Page::Settings.is_modal());
        assert!(Page::LoadGame.is_modal());
        assert!(!Page::Session.is_modal());
        assert!(!Page::Start.is_modal());
    }

    #[test]
    fn parse_round_trips_every_page() {
        for page in [
            Page::Start,
            Page::GameMode,
            Page::Design,
            Page::Loading,
            Page::Session,
            Page::Settings,
            Page::LoadGame,
        ] {
            assert_eq!(Page::parse(page.as_str()), Some(page));
        }
        assert_eq!(Page::parse("lobby"), None);
    }
}
