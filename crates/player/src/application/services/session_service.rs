//! Session client - owns the authoritative view of one active session.
//!
//! All display state flows through [`SessionService::fetch_state`], which
//! replaces the local [`SessionState`] wholesale; partial merges are
//! forbidden so a superseded inventory or room can never survive a refresh.
//!
//! Fetches carry a monotonically increasing sequence number. A response is
//! applied only when it belongs to the latest issued request, so a slow
//! response arriving after a newer fetch cannot roll the display back.

use std::sync::Arc;

use tracing::{debug, info};

use escapade_domain::{CompleteSetup, Difficulty, PlayerId, SessionId, SessionState};
use escapade_protocol::{InteractRequest, InteractResponse, SessionStateResponse, StartGameRequest};

use crate::application::api::Api;
use crate::application::dto::GameEvent;
use crate::infrastructure::EventBus;
use crate::ports::outbound::{ApiError, TimeProvider};

/// Result of submitting an interaction choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Non-terminal; the authoritative state was re-fetched
    Updated,
    /// Terminal; the session has been dropped and the message is final
    GameOver(String),
    /// The chosen option requires a solution attempt but none was supplied
    AttemptRequired,
    /// There is no active session to interact with
    NoSession,
}

pub struct SessionService {
    api: Api,
    bus: EventBus,
    time: Arc<dyn TimeProvider>,
    player_id: PlayerId,
    session_id: Option<SessionId>,
    state: Option<SessionState>,
    /// True session start, carried across fetches so displayed elapsed time
    /// is real session age.
    origin_unix_secs: Option<u64>,
    issued_seq: u64,
}

impl SessionService {
    pub fn new(api: Api, bus: EventBus, time: Arc<dyn TimeProvider>, player_id: PlayerId) -> Self {
        Self {
            api,
            bus,
            time,
            player_id,
            session_id: None,
            state: None,
            origin_unix_secs: None,
            issued_seq: 0,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    pub fn has_session(&self) -> bool {
        self.session_id.is_some()
    }

    /// Seconds since the session was created or loaded.
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.origin_unix_secs
            .map(|origin| self.time.now_unix_secs().saturating_sub(origin))
    }

    /// Request a new session from the backend for a validated wizard
    /// configuration. On success the service owns the new session; the
    /// first `fetch_state` populates the display state.
    pub async fn create_session(&mut self, setup: &CompleteSetup) -> Result<SessionId, ApiError> {
        let request = StartGameRequest {
            player_id: self.player_id.to_string(),
            theme: setup.theme_id.clone(),
            location: setup.location_id.clone(),
            difficulty: setup.difficulty.as_str().to_string(),
        };
        let response = self.api.start_game(&request).await?;
        let session_id = SessionId::new(response.session_id.into_string());
        info!(%session_id, "session created");
        self.adopt_session(session_id.clone());
        Ok(session_id)
    }

    /// Take ownership of a session created elsewhere (loading a save yields
    /// a fresh session id the same way creation does).
    pub fn adopt_session(&mut self, session_id: SessionId) {
        self.session_id = Some(session_id);
        self.state = None;
        self.origin_unix_secs = Some(self.time.now_unix_secs());
        self.issued_seq = 0;
    }

    /// Drop the active session. Publishes `SessionClosed`.
    pub async fn close_session(&mut self) {
        if self.session_id.take().is_some() {
            self.state = None;
            self.origin_unix_secs = None;
            self.bus.dispatch(GameEvent::SessionClosed).await;
        }
    }

    /// Fetch the authoritative state and replace the local view wholesale.
    ///
    /// Returns `Ok(None)` when there is no active session or the response
    /// was superseded by a newer request.
    pub async fn fetch_state(&mut self) -> Result<Option<SessionState>, ApiError> {
        let Some(session_id) = self.session_id.clone() else {
            return Ok(None);
        };
        let seq = self.begin_fetch();
        let response = self.api.session_state(&session_id).await?;
        Ok(self.apply_response(seq, session_id, response).await)
    }

    /// Submit the zero-based index of a previously listed contextual option.
    ///
    /// `attempt` is forwarded only for attempt-required options; for plain
    /// options it is stripped. A terminal `game_over` response drops the
    /// session entirely - there is no resumable game-over state.
    pub async fn submit_interaction(
        &mut self,
        option_index: usize,
        attempt: Option<String>,
    ) -> Result<InteractionOutcome, ApiError> {
        let Some(session_id) = self.session_id.clone() else {
            return Ok(InteractionOutcome::NoSession);
        };

        let requires_attempt = self
            .state
            .as_ref()
            .is_some_and(|s| s.option_requires_attempt(option_index));
        let player_attempt = if requires_attempt {
            match attempt {
                Some(attempt) => Some(attempt),
                None => return Ok(InteractionOutcome::AttemptRequired),
            }
        } else {
            None
        };

        let request = InteractRequest {
            option_index,
            player_attempt,
        };
        match self.api.interact(&session_id, &request).await? {
            InteractResponse::GameOver { message, .. } => {
                info!("session ended: game over");
                self.close_session().await;
                Ok(InteractionOutcome::GameOver(message))
            }
            InteractResponse::State(_) => {
                // The authoritative display state always comes from a full
                // fetch, never from the interact body.
                self.fetch_state().await?;
                Ok(InteractionOutcome::Updated)
            }
        }
    }

    fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.issued_seq
    }

    async fn apply_response(
        &mut self,
        seq: u64,
        session_id: SessionId,
        response: SessionStateResponse,
    ) -> Option<SessionState> {
        if seq != self.issued_seq {
            debug!(seq, latest = self.issued_seq, "discarding stale fetch response");
            return None;
        }
        if self.session_id.as_ref() != Some(&session_id) {
            debug!(%session_id, "discarding response for a replaced session");
            return None;
        }
        let state = session_state_from_wire(session_id, response);
        self.state = Some(state.clone());
        self.bus
            .dispatch(GameEvent::SessionUpdated(state.clone()))
            .await;
        Some(state)
    }
}

fn session_state_from_wire(session_id: SessionId, response: SessionStateResponse) -> SessionState {
    SessionState {
        session_id,
        room_name: response.current_room_name,
        room_description: response.current_room_description,
        room_image: response.current_room_image,
        contextual_options: response.contextual_options,
        inventory: response.inventory,
        objective: response.objective,
        difficulty: Difficulty::parse_or_default(&response.difficulty),
        hints_remaining: response.hints_remaining,
        cooldown_seconds: response.remaining_hint_cooldown,
    }
}
