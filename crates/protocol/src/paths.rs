//! Endpoint paths, relative to the backend base URL.

pub const START_GAME: &str = "/start_game";
pub const SAVE_GAME: &str = "/save_game";

pub fn game_session(session_id: &str) -> String {
    format!("/game_session/{session_id}")
}

pub fn hint(session_id: &str) -> String {
    format!("/game_session/{session_id}/hint")
}

pub fn interact(session_id: &str) -> String {
    format!("/game_session/{session_id}/interact")
}

pub fn saved_games(player_id: &str) -> String {
    format!("/saved_games?player_id={player_id}")
}

pub fn load_game(save_id: &str) -> String {
    format!("/load_game/{save_id}")
}
