use crate::detail::character::Character;

// Errors surfaced by the engine and its persistence layer
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid state: no storage available")]
    MissingStorage,
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Invalid state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unable to write saved game: {0}")]
    Storage(String),
    #[error("Invalid settings: {0}")]
    Settings(serde_json::Error),
    #[error("Unable to read {path}: {reason}")]
    File { path: String, reason: String },
    #[error("Board size {0} is too small")]
    BoardTooSmall(usize),
}

// Tooltip text describing a character
pub fn character_stats(character: &Character) -> String {
    format!(
        "\u{1F396}{} \u{2694}{} \u{1F6E1}{} \u{2764}{}",
        character.level,
        character.attack.round(),
        character.defence.round(),
        character.health.round()
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthLevel {
    Critical,
    Normal,
    High,
}

impl HealthLevel {
    pub fn name(self) -> &'static str {
        match self {
            HealthLevel::Critical => "critical",
            HealthLevel::Normal => "normal",
            HealthLevel::High => "high",
        }
    }
}

// Health bucket used by renderers to colour health bars
pub fn health_level(health: f64) -> HealthLevel {
    if health < 15.0 {
        HealthLevel::Critical
    } else if health < 50.0 {
        HealthLevel::Normal
    } else {
        HealthLevel::High
    }
}
