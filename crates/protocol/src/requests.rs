//! Request bodies sent to the backend.

use serde::{Deserialize, Serialize};

use crate::wire_id::WireId;

/// Body of `POST /start_game`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub player_id: String,
    pub theme: String,
    pub location: String,
    pub difficulty: String,
}

/// Body of `POST /game_session/{id}/interact`.
///
/// `player_attempt` is only present for attempt-required options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractRequest {
    pub option_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_attempt: Option<String>,
}

/// Body of `POST /save_game`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGameRequest {
    pub session_id: WireId,
    pub save_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn start_game_body_matches_the_backend_contract() {
        let body = StartGameRequest {
            player_id: "p-1".to_string(),
            theme: "mysterious".to_string(),
            location: "abandoned_mansion".to_string(),
            difficulty: "hard".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            json!({
                "player_id": "p-1",
                "theme": "mysterious",
                "location": "abandoned_mansion",
                "difficulty": "hard",
            })
        );
    }

    #[test]
    fn interact_body_omits_an_absent_attempt() {
        let body = InteractRequest {
            option_index: 2,
            player_attempt: None,
        };
        assert_eq!(
            serde_json::to_value(&body).expect("serialize"),
            json!({ "option_index": 2 })
        );
    }
}
