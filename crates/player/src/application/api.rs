//! Typed API wrapper over the raw HTTP port.
//!
//! Services call these methods; the raw port only moves JSON. Decoding
//! failures surface as [`ApiError::Decode`] so callers treat a malformed
//! body the same way as any other failed call.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use escapade_domain::{PlayerId, SaveId, SessionId};
use escapade_protocol::{
    paths, HintResponse, InteractRequest, InteractResponse, LoadGameResponse, SaveGameRequest,
    SavedGameEntry, SessionStateResponse, StartGameRequest, StartGameResponse,
};

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Clone)]
pub struct Api {
    raw: Arc<dyn RawApiPort>,
}

impl Api {
    pub fn new(raw: Arc<dyn RawApiPort>) -> Self {
        Self { raw }
    }

    pub async fn start_game(&self, request: &StartGameRequest) -> Result<StartGameResponse, ApiError> {
        let body = encode(request)?;
        decode(self.raw.post_json(paths::START_GAME, &body).await?)
    }

    pub async fn session_state(&self, session_id: &SessionId) -> Result<SessionStateResponse, ApiError> {
        decode(self.raw.get_json(&paths::game_session(session_id.as_str())).await?)
    }

    pub async fn request_hint(&self, session_id: &SessionId) -> Result<HintResponse, ApiError> {
        decode(self.raw.get_json(&paths::hint(session_id.as_str())).await?)
    }

    pub async fn interact(
        &self,
        session_id: &SessionId,
        request: &InteractRequest,
    ) -> Result<InteractResponse, ApiError> {
        let body = encode(request)?;
        decode(
            self.raw
                .post_json(&paths::interact(session_id.as_str()), &body)
                .await?,
        )
    }

    pub async fn saved_games(&self, player_id: &PlayerId) -> Result<Vec<SavedGameEntry>, ApiError> {
        decode(
            self.raw
                .get_json(&paths::saved_games(&player_id.to_string()))
                .await?,
        )
    }

    pub async fn load_game(&self, save_id: &SaveId) -> Result<LoadGameResponse, ApiError> {
        decode(self.raw.get_json(&paths::load_game(save_id.as_str())).await?)
    }

    pub async fn save_game(&self, request: &SaveGameRequest) -> Result<(), ApiError> {
        let body = encode(request)?;
        self.raw.post_json(paths::SAVE_GAME, &body).await?;
        Ok(())
    }
}

fn encode<T: Serialize>(request: &T) -> Result<Value, ApiError> {
    serde_json::to_value(request).map_err(|e| ApiError::decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::decode(e.to_string()))
}
