//! Game controller - the single owner of all client state.
//!
//! The controller consumes one control queue of user intents and timer
//! signals and processes them strictly in order, so every state mutation
//! happens on one logical thread. Backend calls are awaited inside the
//! loop; signals arriving meanwhile queue up behind the current message.
//!
//! Failure policy: every backend failure is caught here or in a service,
//! surfaced as `GameEvent::ErrorMessage`, and leaves the UI in its prior
//! consistent state. Nothing is retried automatically.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use escapade_domain::{PlayerId, SaveId, SessionState};

use crate::application::api::Api;
use crate::application::dto::{ControlMsg, GameEvent, HintStatus, Intent, Page, TimerSignal};
use crate::application::services::{
    HintService, InteractionOutcome, LoadingService, NavigationService, SavedGameService,
    SessionService, SettingsService, SetupService,
};
use crate::infrastructure::EventBus;
use crate::ports::outbound::{storage_keys, RawApiPort, StorageProvider, TimeProvider};

pub struct GameController {
    bus: EventBus,
    api: Api,
    navigation: NavigationService,
    setup: SetupService,
    session: SessionService,
    hints: HintService,
    loading: LoadingService,
    settings: SettingsService,
    saved_games: SavedGameService,
    signals: UnboundedSender<ControlMsg>,
    /// True while `create_session` is in flight for the loading screen.
    creation_pending: bool,
    /// True once the loading deadline fired for the current sequence.
    deadline_passed: bool,
}

impl GameController {
    /// Build the controller and its control queue. The receiver goes to
    /// [`GameController::run`]; the sender side is cloned into timer tasks
    /// and the rendering layer.
    pub fn new(
        raw_api: Arc<dyn RawApiPort>,
        storage: Arc<dyn StorageProvider>,
        time: Arc<dyn TimeProvider>,
    ) -> (Self, UnboundedReceiver<ControlMsg>) {
        let bus = EventBus::new();
        let (signals, receiver) = mpsc::unbounded_channel();
        let player_id = load_or_create_player_id(storage.as_ref());
        let api = Api::new(raw_api);

        let controller = Self {
            navigation: NavigationService::new(bus.clone()),
            setup: SetupService::new(bus.clone()),
            session: SessionService::new(api.clone(), bus.clone(), time, player_id),
            hints: HintService::new(bus.clone(), signals.clone()),
            loading: LoadingService::new(bus.clone(), signals.clone()),
            settings: SettingsService::new(bus.clone(), storage),
            saved_games: SavedGameService::new(api.clone(), bus.clone(), player_id),
            api,
            bus,
            signals,
            creation_pending: false,
            deadline_passed: false,
        };
        (controller, receiver)
    }

    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn sender(&self) -> UnboundedSender<ControlMsg> {
        self.signals.clone()
    }

    pub fn current_page(&self) -> Page {
        self.navigation.current_page()
    }

    pub fn session_state(&self) -> Option<&SessionState> {
        self.session.state()
    }

    pub fn hint_status(&self) -> HintStatus {
        self.hints.status()
    }

    /// Seconds since the active session was created or loaded.
    pub fn session_elapsed_secs(&self) -> Option<u64> {
        self.session.elapsed_secs()
    }

    /// Drive the controller until every sender is dropped.
    pub async fn run(mut self, mut receiver: UnboundedReceiver<ControlMsg>) {
        while let Some(msg) = receiver.recv().await {
            self.handle(msg).await;
        }
    }

    pub async fn handle(&mut self, msg: ControlMsg) {
        match msg {
            ControlMsg::Intent(intent) => self.handle_intent(intent).await,
            ControlMsg::Timer(signal) => self.handle_timer(signal).await,
        }
    }

    async fn handle_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Navigate(page) => self.navigate(page).await,
            Intent::CloseModal => self.navigation.close_modal().await,
            Intent::GoToStep(step) => self.navigation.go_to_step(step).await,
            Intent::SelectAmbiance { theme } => self.setup.select_ambiance(&theme).await,
            Intent::SelectLocation { location } => self.setup.select_location(&location).await,
            Intent::SelectDifficulty { value } => self.setup.select_difficulty(&value).await,
            Intent::StartAdventure => self.start_adventure().await,
            Intent::RefreshSession => self.refresh_session().await,
            Intent::SubmitInteraction {
                option_index,
                attempt,
            } => self.submit_interaction(option_index, attempt).await,
            Intent::RequestHint => self.request_hint().await,
            Intent::ListSavedGames => self.list_saved_games().await,
            Intent::SaveGame { name } => self.save_game(&name).await,
            Intent::LoadGame { save_id } => self.load_game(save_id).await,
            Intent::SetMusicEnabled(enabled) => self.settings.set_music_enabled(enabled).await,
            Intent::SetSfxEnabled(enabled) => self.settings.set_sfx_enabled(enabled).await,
            Intent::SetVolume(volume) => self.settings.set_volume(volume).await,
            Intent::SetLanguage(language) => self.settings.set_language(language).await,
        }
    }

    async fn handle_timer(&mut self, signal: TimerSignal) {
        match signal {
            TimerSignal::LoadingDeadline => {
                self.loading.mark_finished();
                if self.navigation.current_page() != Page::Loading {
                    return;
                }
                self.deadline_passed = true;
                if !self.creation_pending && self.session.has_session() {
                    self.enter_session_view().await;
                }
            }
            TimerSignal::CooldownElapsed => {
                // Cooldown expiry triggers reconciliation, never a
                // local-only transition to Available.
                self.refresh_session().await;
            }
        }
    }

    /// Page transition plus the side effects tied to leaving a page.
    /// Modal-style pages leave the session (and its timers) alive.
    async fn navigate(&mut self, page: Page) {
        let current = self.navigation.current_page();
        if current == Page::Loading && page != Page::Loading {
            self.loading.cancel();
            self.creation_pending = false;
            self.deadline_passed = false;
        }
        if current == Page::Session && page != Page::Session && !page.is_modal() {
            self.hints.reset().await;
            self.session.close_session().await;
        }
        self.navigation.show_page(page).await;
        if page == Page::Design {
            self.setup.reapply_default_ambiance().await;
        }
    }

    async fn start_adventure(&mut self) {
        let complete = match self.setup.validate_complete() {
            Ok(complete) => complete,
            Err(err) => {
                self.bus
                    .dispatch(GameEvent::ErrorMessage(err.to_string()))
                    .await;
                return;
            }
        };

        self.navigate(Page::Loading).await;
        self.loading.start();
        self.creation_pending = true;
        self.deadline_passed = false;

        match self.session.create_session(&complete).await {
            Ok(_) => {
                self.creation_pending = false;
                if self.deadline_passed {
                    self.enter_session_view().await;
                }
            }
            Err(err) => {
                warn!(%err, "session creation failed");
                self.creation_pending = false;
                self.loading.cancel();
                // Back to the wizard that submitted; the error is surfaced.
                self.navigate(Page::Design).await;
                self.bus
                    .dispatch(GameEvent::ErrorMessage(err.to_string()))
                    .await;
            }
        }
    }

    /// First authoritative fetch of a fresh session, then the full-page
    /// transition to the session view.
    async fn enter_session_view(&mut self) {
        match self.session.fetch_state().await {
            Ok(Some(state)) => {
                self.hints
                    .sync_from_session(state.hints_remaining, state.cooldown_seconds)
                    .await;
                self.navigation.show_page(Page::Session).await;
            }
            Ok(None) => {}
            Err(err) => {
                warn!(%err, "initial session fetch failed");
                self.bus
                    .dispatch(GameEvent::ErrorMessage(err.to_string()))
                    .await;
                self.hints.reset().await;
                self.session.close_session().await;
                self.navigation.reset().await;
            }
        }
    }

    /// Re-fetch authoritative state and re-sync the hint economy.
    async fn refresh_session(&mut self) {
        match self.session.fetch_state().await {
            Ok(Some(state)) => {
                self.hints
                    .sync_from_session(state.hints_remaining, state.cooldown_seconds)
                    .await;
            }
            Ok(None) => {}
            Err(err) => {
                self.bus
                    .dispatch(GameEvent::ErrorMessage(err.to_string()))
                    .await;
            }
        }
    }

    async fn submit_interaction(&mut self, option_index: usize, attempt: Option<String>) {
        match self.session.submit_interaction(option_index, attempt).await {
            Ok(InteractionOutcome::Updated) => {
                let hint_fields = self
                    .session
                    .state()
                    .map(|s| (s.hints_remaining, s.cooldown_seconds));
                if let Some((hints_remaining, cooldown_seconds)) = hint_fields {
                    self.hints
                        .sync_from_session(hints_remaining, cooldown_seconds)
                        .await;
                }
            }
            Ok(InteractionOutcome::GameOver(message)) => {
                self.hints.reset().await;
                self.navigation.reset().await;
                self.bus.dispatch(GameEvent::GameOver(message)).await;
            }
            Ok(InteractionOutcome::AttemptRequired) => {
                self.bus
                    .dispatch(GameEvent::ErrorMessage(
                        "This action needs a solution attempt.".to_string(),
                    ))
                    .await;
            }
            Ok(InteractionOutcome::NoSession) => {
                warn!("interaction ignored: no active session");
            }
            Err(err) => {
                self.bus
                    .dispatch(GameEvent::ErrorMessage(err.to_string()))
                    .await;
            }
        }
    }

    async fn request_hint(&mut self) {
        // Outside Available this is a no-op: no network call, no change.
        if !self.hints.begin_request().await {
            return;
        }
        let Some(session_id) = self.session.session_id().cloned() else {
            self.hints.fail_request().await;
            return;
        };
        match self.api.request_hint(&session_id).await {
            Ok(grant) => {
                self.hints
                    .apply_grant(
                        &grant.hint,
                        grant.hints_remaining,
                        grant.remaining_hint_cooldown,
                    )
                    .await;
            }
            Err(err) => {
                warn!(%err, "hint request failed");
                self.hints.fail_request().await;
                self.bus
                    .dispatch(GameEvent::ErrorMessage(
                        "Could not fetch a hint right now.".to_string(),
                    ))
                    .await;
            }
        }
    }

    async fn list_saved_games(&mut self) {
        if let Err(err) = self.saved_games.list().await {
            self.bus
                .dispatch(GameEvent::ErrorMessage(err.to_string()))
                .await;
        }
    }

    async fn save_game(&mut self, name: &str) {
        let Some(session_id) = self.session.session_id().cloned() else {
            self.bus
                .dispatch(GameEvent::ErrorMessage(
                    "There is no active game to save.".to_string(),
                ))
                .await;
            return;
        };
        if let Err(err) = self.saved_games.save(&session_id, name).await {
            self.bus
                .dispatch(GameEvent::ErrorMessage(err.to_string()))
                .await;
        }
    }

    async fn load_game(&mut self, save_id: SaveId) {
        match self.saved_games.load(&save_id).await {
            Ok(session_id) => {
                self.session.adopt_session(session_id);
                self.enter_session_view().await;
            }
            Err(err) => {
                self.bus
                    .dispatch(GameEvent::ErrorMessage(err.to_string()))
                    .await;
            }
        }
    }
}

fn load_or_create_player_id(storage: &dyn StorageProvider) -> PlayerId {
    if let Some(raw) = storage.load(storage_keys::PLAYER_ID) {
        if let Some(id) = PlayerId::parse(&raw) {
            return id;
        }
        warn!("stored player id unreadable, minting a new one");
    }
    let id = PlayerId::new();
    storage.save(storage_keys::PLAYER_ID, &id.to_string());
    id
}
