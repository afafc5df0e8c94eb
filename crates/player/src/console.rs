//! Minimal line-oriented shell.
//!
//! Stands in for the rendering layer: lines from stdin map to intents, and
//! events from the bus render as plain text. No styling, no decoration.

use escapade_domain::{catalog, SaveId};

use crate::application::dto::{GameEvent, HintPhase, Intent, Page, SavedGameSummary};

pub const HELP: &str = "\
commands:
  go <page>            start | game-mode | design | loading | session | settings | load-game
  back                 close the settings / load-game overlay
  step <n>             jump to wizard step 1-3
  ambiance <theme>     pick an ambiance theme
  location <id>        pick a location
  difficulty <level>   easy | normal | hard
  begin                create the adventure
  do <n> [attempt]     choose contextual option n (attempt text for solve actions)
  hint                 request a hint
  refresh              re-fetch the session state
  saves                list saved games
  save <name>          save the current game
  load <id>            load a saved game
  music on|off         toggle music
  sfx on|off           toggle sound effects
  volume <0-100>       set the volume
  lang <code>          set the display language
  themes               list ambiance themes and locations
  help                 show this text
  quit                 leave";

/// What a line of input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(Intent),
    Help,
    Themes,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Command::Empty;
    };
    let rest: Vec<&str> = parts.collect();

    match verb {
        "help" => Command::Help,
        "themes" => Command::Themes,
        "quit" | "exit" => Command::Quit,
        "back" => Command::Intent(Intent::CloseModal),
        "go" => match rest.first().and_then(|name| Page::parse(name)) {
            Some(page) => Command::Intent(Intent::Navigate(page)),
            None => Command::Unknown("go where? try `help`".to_string()),
        },
        "step" => match rest.first().and_then(|n| n.parse().ok()) {
            Some(step) => Command::Intent(Intent::GoToStep(step)),
            None => Command::Unknown("usage: step <n>".to_string()),
        },
        "ambiance" => match rest.first() {
            Some(theme) => Command::Intent(Intent::SelectAmbiance {
                theme: theme.to_string(),
            }),
            None => Command::Unknown("usage: ambiance <theme>".to_string()),
        },
        "location" => match rest.first() {
            Some(location) => Command::Intent(Intent::SelectLocation {
                location: location.to_string(),
            }),
            None => Command::Unknown("usage: location <id>".to_string()),
        },
        "difficulty" => match rest.first() {
            Some(value) => Command::Intent(Intent::SelectDifficulty {
                value: value.to_string(),
            }),
            None => Command::Unknown("usage: difficulty <level>".to_string()),
        },
        "begin" => Command::Intent(Intent::StartAdventure),
        "refresh" => Command::Intent(Intent::RefreshSession),
        "hint" => Command::Intent(Intent::RequestHint),
        "do" => match rest.first().and_then(|n| n.parse::<usize>().ok()) {
            Some(option_index) => {
                let attempt = if rest.len() > 1 {
                    Some(rest[1..].join(" "))
                } else {
                    None
                };
                Command::Intent(Intent::SubmitInteraction {
                    option_index,
                    attempt,
                })
            }
            None => Command::Unknown("usage: do <n> [attempt]".to_string()),
        },
        "saves" => Command::Intent(Intent::ListSavedGames),
        "save" => {
            if rest.is_empty() {
                Command::Unknown("usage: save <name>".to_string())
            } else {
                Command::Intent(Intent::SaveGame {
                    name: rest.join(" "),
                })
            }
        }
        "load" => match rest.first() {
            Some(id) => Command::Intent(Intent::LoadGame {
                save_id: SaveId::new(*id),
            }),
            None => Command::Unknown("usage: load <id>".to_string()),
        },
        "music" => parse_toggle(&rest, Intent::SetMusicEnabled),
        "sfx" => parse_toggle(&rest, Intent::SetSfxEnabled),
        "volume" => match rest.first().and_then(|n| n.parse().ok()) {
            Some(volume) => Command::Intent(Intent::SetVolume(volume)),
            None => Command::Unknown("usage: volume <0-100>".to_string()),
        },
        "lang" => match rest.first() {
            Some(code) => Command::Intent(Intent::SetLanguage(code.to_string())),
            None => Command::Unknown("usage: lang <code>".to_string()),
        },
        other => Command::Unknown(format!("unknown command `{other}`, try `help`")),
    }
}

fn parse_toggle(rest: &[&str], make: fn(bool) -> Intent) -> Command {
    match rest.first() {
        Some(&"on") => Command::Intent(make(true)),
        Some(&"off") => Command::Intent(make(false)),
        _ => Command::Unknown("expected `on` or `off`".to_string()),
    }
}

/// The catalog listing for the `themes` command.
pub fn render_catalog() -> String {
    let mut out = String::from("ambiance themes:\n");
    for theme in catalog::THEMES {
        out.push_str(&format!("  {} ({})\n", theme.id, theme.name));
        for location in catalog::locations_in(theme.category).filter(|l| l.theme == theme.id) {
            out.push_str(&format!("    location: {} ({})\n", location.id, location.name));
        }
    }
    out
}

/// Plain-text rendering of an event, `None` for events with no console form.
pub fn render_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::PageChanged(page) => Some(format!("── {} ──", page.as_str())),
        GameEvent::WizardStepChanged(step) => Some(format!("wizard step {step}")),
        GameEvent::SetupChanged(config) => {
            let theme = config.theme_id.as_deref().unwrap_or("-");
            let location = config.location_id.as_deref().unwrap_or("-");
            Some(format!(
                "setup: theme={theme} location={location} difficulty={}",
                config.difficulty
            ))
        }
        GameEvent::SessionUpdated(state) => {
            let mut out = format!("\n[{}]\n{}\n", state.room_name, state.room_description);
            out.push_str(&format!("objective: {}\n", state.objective));
            if !state.inventory.is_empty() {
                out.push_str(&format!("inventory: {}\n", state.inventory.join(", ")));
            }
            for (index, option) in state.contextual_options.iter().enumerate() {
                out.push_str(&format!("  {index}. {option}\n"));
            }
            Some(out)
        }
        GameEvent::SessionClosed => None,
        GameEvent::HintRevealed(hint) => Some(format!("hint: {hint}")),
        GameEvent::HintStatusChanged(status) => {
            let phase = match status.phase {
                HintPhase::Available => "available",
                HintPhase::Requesting => "requesting...",
                HintPhase::OnCooldown => "on cooldown",
                HintPhase::Exhausted => "exhausted",
            };
            Some(format!(
                "hints: x{} ({phase}{})",
                status.hints_remaining,
                if status.cooldown_seconds > 0 {
                    format!(", {}s", status.cooldown_seconds)
                } else {
                    String::new()
                }
            ))
        }
        GameEvent::HintCooldownTick(remaining) => Some(format!("(cooldown {remaining}s)")),
        GameEvent::LoadingMessage(message) => Some(message.clone()),
        GameEvent::GameOver(message) => Some(format!("GAME OVER: {message}")),
        GameEvent::SavedGamesListed(saves) => Some(render_saves(saves)),
        GameEvent::GameSaved => Some("game saved".to_string()),
        GameEvent::SettingsChanged(settings) => Some(format!(
            "settings: music={} sfx={} volume={} lang={}",
            settings.music_enabled, settings.sfx_enabled, settings.volume, settings.language
        )),
        GameEvent::ErrorMessage(message) => Some(format!("error: {message}")),
    }
}

fn render_saves(saves: &[SavedGameSummary]) -> String {
    if saves.is_empty() {
        return "no saved games".to_string();
    }
    let mut out = String::from("saved games:\n");
    for save in saves {
        let when = save
            .saved_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "  {}: {} ({}, {when})\n",
            save.save_id, save.name, save.location
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_map_to_intents() {
        assert_eq!(
            parse_line("go design"),
            Command::Intent(Intent::Navigate(Page::Design))
        );
        assert_eq!(
            parse_line("difficulty hard"),
            Command::Intent(Intent::SelectDifficulty {
                value: "hard".to_string()
            })
        );
        assert_eq!(
            parse_line("do 1 the answer is maps"),
            Command::Intent(Intent::SubmitInteraction {
                option_index: 1,
                attempt: Some("the answer is maps".to_string()),
            })
        );
        assert_eq!(parse_line("hint"), Command::Intent(Intent::RequestHint));
    }

    #[test]
    fn unknown_pages_do_not_produce_an_intent() {
        assert!(matches!(parse_line("go lobby"), Command::Unknown(_)));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse_line("   "), Command::Empty);
    }

    #[test]
    fn toggles_require_on_or_off() {
        assert_eq!(
            parse_line("music off"),
            Command::Intent(Intent::SetMusicEnabled(false))
        );
        assert!(matches!(parse_line("music loud"), Command::Unknown(_)));
    }
}
