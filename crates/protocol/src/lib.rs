//! Escapade Protocol - shared wire types for the game-logic backend.
//!
//! This crate contains the request/response bodies and endpoint paths of the
//! backend REST API consumed by the player.
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - only serde and serde_json
//! 2. **No business logic** - pure data types and serialization
//! 3. **Exact shapes** - field names match the backend verbatim; changing
//!    one here is a wire-compatibility break

pub mod paths;
pub mod requests;
pub mod responses;
mod wire_id;

pub use requests::{InteractRequest, SaveGameRequest, StartGameRequest};
pub use responses::{
    ErrorBody, HintResponse, InteractResponse, LoadGameResponse, SavedGameEntry, SavedGameState,
    SessionStateResponse, StartGameResponse,
};
pub use wire_id::WireId;
