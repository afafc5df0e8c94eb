//! Game events - state-change notifications for the rendering layer.

use escapade_domain::{PlayerSettings, SessionState, SetupConfig};

use super::page::Page;
use super::saved_game::SavedGameSummary;

/// Phase of the hint affordance.
///
/// `Requesting` is the transient sub-state between sending a hint request
/// and receiving the response; it keeps the affordance disabled so a double
/// click cannot submit twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintPhase {
    Available,
    Requesting,
    OnCooldown,
    Exhausted,
}

/// Snapshot of the hint economy for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintStatus {
    pub phase: HintPhase,
    pub hints_remaining: u32,
    pub cooldown_seconds: u32,
}

/// A notification published on the event bus. The rendering layer
/// subscribes to these and renders; it never mutates component state.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PageChanged(Page),
    WizardStepChanged(u8),
    SetupChanged(SetupConfig),
    /// Fresh authoritative session state (replaced wholesale)
    SessionUpdated(SessionState),
    /// The active session ended or was abandoned
    SessionClosed,
    HintRevealed(String),
    HintStatusChanged(HintStatus),
    /// Display-only countdown tick (seconds remaining)
    HintCooldownTick(u32),
    LoadingMessage(String),
    /// Terminal outcome; carries the backend's display message
    GameOver(String),
    SavedGamesListed(Vec<SavedGameSummary>),
    GameSaved,
    SettingsChanged(PlayerSettings),
    ErrorMessage(String),
}
