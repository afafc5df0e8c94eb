//! Saved games - list, save, and load through the backend.
//!
//! Loading a save yields a fresh session id; the session client adopts it
//! exactly like a newly created session.

use chrono::{DateTime, Utc};

use escapade_domain::{PlayerId, SaveId, SessionId};
use escapade_protocol::{SaveGameRequest, WireId};

use crate::application::api::Api;
use crate::application::dto::{GameEvent, SavedGameSummary};
use crate::infrastructure::EventBus;
use crate::ports::outbound::ApiError;

pub struct SavedGameService {
    api: Api,
    bus: EventBus,
    player_id: PlayerId,
}

impl SavedGameService {
    pub fn new(api: Api, bus: EventBus, player_id: PlayerId) -> Self {
        Self {
            api,
            bus,
            player_id,
        }
    }

    /// Fetch the player's saves, newest first, and publish them.
    pub async fn list(&self) -> Result<Vec<SavedGameSummary>, ApiError> {
        let entries = self.api.saved_games(&self.player_id).await?;
        let mut saves: Vec<SavedGameSummary> =
            entries.into_iter().map(SavedGameSummary::from).collect();
        saves.sort_by_key(|s| std::cmp::Reverse(s.saved_at.unwrap_or(DateTime::<Utc>::MIN_UTC)));
        self.bus
            .dispatch(GameEvent::SavedGamesListed(saves.clone()))
            .await;
        Ok(saves)
    }

    /// Save the active session under a name.
    pub async fn save(&self, session_id: &SessionId, name: &str) -> Result<(), ApiError> {
        let request = SaveGameRequest {
            session_id: WireId::new(session_id.as_str()),
            save_name: name.to_string(),
        };
        self.api.save_game(&request).await?;
        self.bus.dispatch(GameEvent::GameSaved).await;
        Ok(())
    }

    /// Load a save; the backend answers with the id of a fresh session.
    pub async fn load(&self, save_id: &SaveId) -> Result<SessionId, ApiError> {
        let response = self.api.load_game(save_id).await?;
        Ok(SessionId::new(response.id.into_string()))
    }
}
