//! Escapade Domain - core types shared by the player runtime.
//!
//! This crate holds the domain vocabulary of the escape-room client:
//! identifiers, the difficulty enumeration, the ambiance/location catalog,
//! the in-progress setup configuration, the authoritative session view, and
//! client-local player settings. No I/O, no async - pure types and
//! invariants.

pub mod catalog;
pub mod difficulty;
pub mod error;
pub mod ids;
pub mod session;
pub mod settings;
pub mod setup;

pub use catalog::{AmbianceCategory, Location, Theme};
pub use difficulty::Difficulty;
pub use error::DomainError;
pub use ids::{PlayerId, SaveId, SessionId};
pub use session::SessionState;
pub use settings::PlayerSettings;
pub use setup::{CompleteSetup, SetupConfig};
