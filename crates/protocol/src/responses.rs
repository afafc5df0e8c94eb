//! Response bodies returned by the backend.

use serde::{Deserialize, Serialize};

use crate::wire_id::WireId;

/// `POST /start_game` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartGameResponse {
    pub session_id: WireId,
}

/// `GET /game_session/{id}` body: the full authoritative session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStateResponse {
    pub current_room_name: String,
    pub current_room_description: String,
    #[serde(default)]
    pub current_room_image: String,
    pub contextual_options: Vec<String>,
    pub inventory: Vec<String>,
    pub objective: String,
    pub difficulty: String,
    pub hints_remaining: u32,
    pub remaining_hint_cooldown: u32,
}

/// `GET /game_session/{id}/hint` success body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HintResponse {
    pub hint: String,
    pub hints_remaining: u32,
    pub remaining_hint_cooldown: u32,
}

/// `POST /game_session/{id}/interact` body: either updated state fields or a
/// terminal game-over marker. `GameOver` must be tried first - a state body
/// never carries `game_over`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InteractResponse {
    GameOver { game_over: bool, message: String },
    State(SessionStateResponse),
}

/// One entry of `GET /saved_games?player_id=...`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGameEntry {
    pub id: WireId,
    pub session_id: WireId,
    pub save_name: String,
    /// ISO-8601 timestamp.
    pub saved_at: String,
    pub game_state: SavedGameState,
}

/// The slice of saved state the list endpoint exposes for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedGameState {
    #[serde(default)]
    pub location: String,
}

/// `GET /load_game/{saveId}` body: the id of the freshly created session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadGameResponse {
    pub id: WireId,
}

/// Error body used across endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn session_state_parses_the_documented_shape() {
        let body = json!({
            "current_room_name": "Ancient Library",
            "current_room_description": "Dust motes drift in the lamplight.",
            "current_room_image": "images/ancient_library.jpg",
            "contextual_options": ["Examine the desk", "Solve the cipher"],
            "inventory": ["Rusty Key"],
            "objective": "Find a way out.",
            "difficulty": "normal",
            "hints_remaining": 5,
            "remaining_hint_cooldown": 0,
        });
        let state: SessionStateResponse = serde_json::from_value(body).expect("parse");
        assert_eq!(state.contextual_options.len(), 2);
        assert_eq!(state.hints_remaining, 5);
    }

    #[test]
    fn interact_distinguishes_game_over_from_state() {
        let over: InteractResponse =
            serde_json::from_value(json!({ "game_over": true, "message": "You died." }))
                .expect("parse game over");
        assert!(matches!(
            over,
            InteractResponse::GameOver { game_over: true, ref message } if message == "You died."
        ));

        let state: InteractResponse = serde_json::from_value(json!({
            "current_room_name": "Vault",
            "current_room_description": "Steel walls.",
            "current_room_image": "",
            "contextual_options": [],
            "inventory": [],
            "objective": "Escape.",
            "difficulty": "hard",
            "hints_remaining": 1,
            "remaining_hint_cooldown": 10,
        }))
        .expect("parse state");
        assert!(matches!(state, InteractResponse::State(_)));
    }

    #[test]
    fn saved_game_entries_accept_numeric_ids() {
        let body = json!([{
            "id": 3,
            "session_id": "12",
            "save_name": "before the vault",
            "saved_at": "2026-07-01T12:00:00+00:00",
            "game_state": { "location": "underwater_lab" },
        }]);
        let entries: Vec<SavedGameEntry> = serde_json::from_value(body).expect("parse");
        assert_eq!(entries[0].id.as_str(), "3");
        assert_eq!(entries[0].session_id.as_str(), "12");
        assert_eq!(entries[0].game_state.location, "underwater_lab");
    }
}
