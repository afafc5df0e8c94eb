//! Escapade Player - client runtime for the escape-room game.
//!
//! This crate contains the application logic (wizard, navigation, session
//! client, hint economy, loading sequencer), the outbound ports, and the
//! infrastructure adapters (HTTP, platform storage, event bus). The
//! rendering layer subscribes to [`application::dto::GameEvent`]
//! notifications and feeds [`application::dto::Intent`]s to the
//! [`application::GameController`]; it never reaches into component state.

pub mod application;
pub mod console;
pub mod infrastructure;
pub mod ports;

pub use application::GameController;
