//! Seams for the engine's external collaborators: key-value persistence and
//! the remote leaderboard.
//!
//! The core never performs I/O. These traits are implemented by the
//! surrounding application, which reads values at startup and pushes scores
//! after a terminal [`RoundEvent`](crate::quiz_engine::round::RoundEvent).
//! The wire helpers here build and parse the leaderboard JSON bodies so every
//! client agrees on the payload shape. A failed submission must never roll
//! back local round state.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Storage keys the application uses with a [`ScoreStore`].
pub const USERNAME_KEY: &str = "username";
pub const HIGH_SCORE_KEY: &str = "highScore";
pub const LANGUAGE_KEY: &str = "selectedLanguage";

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub username: String,
    pub score: u32,
}

/// Key-value persistence (username, high score, language preference).
pub trait ScoreStore {
    fn load_value(&self, key: &str) -> Option<String>;
    /// Returns false on failure; the caller carries on regardless.
    fn save_value(&mut self, key: &str, value: &str) -> bool;
}

/// Remote leaderboard.
pub trait Leaderboard {
    /// Entries ordered by score, best first. `None` when unreachable.
    fn fetch_top(&self) -> Option<Vec<ScoreEntry>>;
    /// Returns false on failure; round progression is unaffected either way.
    fn submit(&mut self, username: &str, score: u32) -> bool;
}

/// JSON body for a score submission.
pub fn submit_payload(username: &str, score: u32) -> Value {
    json!({ "username": username.trim(), "score": score })
}

/// Parse a leaderboard response body into entries.
pub fn parse_entries(body: &str) -> serde_json::Result<Vec<ScoreEntry>> {
    serde_json::from_str(body)
}

/// Rows worth showing: positive scores, best first. The fetch side is asked
/// for descending order already, but a client-side sort keeps the display
/// stable when it is not.
pub fn visible_entries(mut entries: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    entries.retain(|e| e.score > 0);
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries
}
