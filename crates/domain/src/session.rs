//! Authoritative view of one active game session.
//!
//! The session client replaces this wholesale on every successful fetch;
//! nothing else mutates it.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::ids::SessionId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub session_id: SessionId,
    pub room_name: String,
    pub room_description: String,
    /// Reference to the background asset for the current room.
    pub room_image: String,
    /// Index-addressed actions available in the current room.
    pub contextual_options: Vec<String>,
    /// Item labels in acquisition order.
    pub inventory: Vec<String>,
    pub objective: String,
    pub difficulty: Difficulty,
    pub hints_remaining: u32,
    /// 0 means a hint is usable now.
    pub cooldown_seconds: u32,
}

impl SessionState {
    /// The contextual option at a zero-based index.
    pub fn option_at(&self, index: usize) -> Option<&str> {
        self.contextual_options.get(index).map(String::as_str)
    }

    /// Whether the option at `index` requires a free-text solution attempt.
    pub fn option_requires_attempt(&self, index: usize) -> bool {
        self.option_at(index).is_some_and(requires_attempt)
    }
}

/// Attempt-required convention: "solve"-style actions carry the player's
/// proposed solution alongside the option index.
pub fn requires_attempt(option: &str) -> bool {
    option.trim().to_ascii_lowercase().starts_with("solve")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionState {
        SessionState {
            session_id: SessionId::new("7"),
            room_name: "Ancient Library".to_string(),
            room_description: "Dust motes drift in the lamplight.".to_string(),
            room_image: "images/ancient_library.jpg".to_string(),
            contextual_options: vec![
                "Examine the desk".to_string(),
                "Solve the cipher on the wall".to_string(),
            ],
            inventory: vec!["Rusty Key".to_string()],
            objective: "Find a way out.".to_string(),
            difficulty: Difficulty::Normal,
            hints_remaining: 5,
            cooldown_seconds: 0,
        }
    }

    #[test]
    fn solve_options_require_an_attempt() {
        let state = sample();
        assert!(!state.option_requires_attempt(0));
        assert!(state.option_requires_attempt(1));
        assert!(!state.option_requires_attempt(2));
    }

    #[test]
    fn attempt_convention_is_case_insensitive() {
        assert!(requires_attempt("SOLVE the lock"));
        assert!(requires_attempt("  solve the riddle"));
        assert!(!requires_attempt("Resolve the dispute"));
    }
}
