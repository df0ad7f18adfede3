use serde::{Deserialize, Serialize};

/// Lifecycle state of a game as stored by the schedule backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Completed,
    Postponed,
    Canceled,
}

/// A scheduled game. `date` and `time` are kept as the raw strings the backend
/// sent so that malformed values survive the round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub status: GameStatus,
    // Opponent, venue, sport etc. Passed through as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Game {
    /// Build a game with no extra fields.
    pub fn new(id: impl Into<String>, date: impl Into<String>, time: Option<&str>, status: GameStatus) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            time: time.map(str::to_string),
            status,
            extra: serde_json::Map::new(),
        }
    }
}
