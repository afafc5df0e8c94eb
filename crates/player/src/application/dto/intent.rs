//! Intents - the closed set of commands the rendering layer may dispatch.
//!
//! UI events map to exactly these; components are never reached into
//! directly. Timer tasks post [`TimerSignal`]s on the same control queue so
//! every state mutation happens on the controller's logical thread.

use escapade_domain::SaveId;

use super::page::Page;

/// A user-originated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Show a page (wizard entry resets to step 1)
    Navigate(Page),
    /// Return from a modal-style page to the page beneath it
    CloseModal,
    /// Jump to a wizard step; nonexistent steps are a no-op
    GoToStep(u8),
    SelectAmbiance { theme: String },
    SelectLocation { location: String },
    SelectDifficulty { value: String },
    /// Validate the wizard configuration and request a new session
    StartAdventure,
    /// Re-fetch the authoritative session state
    RefreshSession,
    SubmitInteraction {
        option_index: usize,
        attempt: Option<String>,
    },
    RequestHint,
    ListSavedGames,
    SaveGame { name: String },
    LoadGame { save_id: SaveId },
    SetMusicEnabled(bool),
    SetSfxEnabled(bool),
    SetVolume(u8),
    SetLanguage(String),
}

/// A signal posted by a timer task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// The hint cooldown countdown reached zero; reconcile with the backend
    CooldownElapsed,
    /// The loading sequencer's fixed deadline fired
    LoadingDeadline,
}

/// Everything the controller consumes from its control queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlMsg {
    Intent(Intent),
    Timer(TimerSignal),
}
