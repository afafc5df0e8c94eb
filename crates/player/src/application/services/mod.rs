//! Application services - one per component of the runtime.

pub mod hint_service;
pub mod loading_service;
pub mod navigation_service;
pub mod saved_game_service;
pub mod session_service;
pub mod settings_service;
pub mod setup_service;

pub use hint_service::HintService;
pub use loading_service::LoadingService;
pub use navigation_service::NavigationService;
pub use saved_game_service::SavedGameService;
pub use session_service::{InteractionOutcome, SessionService};
pub use settings_service::SettingsService;
pub use setup_service::SetupService;
