//! Data transfer objects.
//!
//! The application layer owns these types so the rendering layer never
//! imports wire-format or infrastructure types directly.

pub mod game_event;
pub mod intent;
pub mod page;
pub mod saved_game;

pub use game_event::{GameEvent, HintPhase, HintStatus};
pub use intent::{ControlMsg, Intent, TimerSignal};
pub use page::Page;
pub use saved_game::SavedGameSummary;
