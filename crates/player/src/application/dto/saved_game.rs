//! Display form of a saved-game entry.

use chrono::{DateTime, Utc};
use escapade_domain::{SaveId, SessionId};
use escapade_protocol::SavedGameEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedGameSummary {
    pub save_id: SaveId,
    pub session_id: SessionId,
    pub name: String,
    /// None when the backend timestamp could not be parsed.
    pub saved_at: Option<DateTime<Utc>>,
    pub location: String,
}

impl From<SavedGameEntry> for SavedGameSummary {
    fn from(entry: SavedGameEntry) -> Self {
        let saved_at = DateTime::parse_from_rfc3339(&entry.saved_at)
            .ok()
            .map(|t| t.with_timezone(&Utc));
        Self {
            save_id: SaveId::new(entry.id.into_string()),
            session_id: SessionId::new(entry.session_id.into_string()),
            name: entry.save_name,
            saved_at,
            location: entry.game_state.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escapade_protocol::{SavedGameState, WireId};

    fn entry(saved_at: &str) -> SavedGameEntry {
        SavedGameEntry {
            id: WireId::new("3"),
            session_id: WireId::new("12"),
            save_name: "before the vault".to_string(),
            saved_at: saved_at.to_string(),
            game_state: SavedGameState {
                location: "underwater_lab".to_string(),
            },
        }
    }

    #[test]
    fn converts_a_wire_entry() {
        let summary = SavedGameSummary::from(entry("2026-07-01T12:00:00+00:00"));
        assert_eq!(summary.save_id, SaveId::new("3"));
        assert_eq!(summary.session_id, SessionId::new("12"));
        assert!(summary.saved_at.is_some());
        assert_eq!(summary.location, "underwater_lab");
    }

    #[test]
    fn keeps_the_entry_when_the_timestamp_is_malformed() {
        let summary = SavedGameSummary::from(entry("yesterday"));
        assert_eq!(summary.saved_at, None);
        assert_eq!(summary.name, "before the vault");
    }
}
