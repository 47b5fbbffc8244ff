//! Callback actions decoded from inline keyboard payloads.
//!
//! Button presses arrive as opaque strings (`"Snake"`, `"fav_Tetris"`,
//! `"lang_ua"`). They are decoded once at the transport boundary so the
//! rest of the bot only ever sees a tagged [`Action`].

use serde::{Deserialize, Serialize};

const FAVORITE_PREFIX: &str = "fav_";
const LANGUAGE_PREFIX: &str = "lang_";

/// A user action carried by a callback button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Start the named game.
    Launch(String),
    /// Mark the named game as the user's favorite.
    SetFavorite(String),
    /// Switch the user's language to the given code.
    SetLanguage(String),
}

impl Action {
    /// Decode a callback payload. Returns `None` for empty payloads.
    pub fn decode(data: &str) -> Option<Self> {
        let data = data.trim();
        if data.is_empty() {
            return None;
        }
        if let Some(code) = data.strip_prefix(LANGUAGE_PREFIX) {
            return Some(Self::SetLanguage(code.to_string()));
        }
        if let Some(game) = data.strip_prefix(FAVORITE_PREFIX) {
            return Some(Self::SetFavorite(game.to_string()));
        }
        Some(Self::Launch(data.to_string()))
    }

    /// Encode back into the callback payload placed on a button.
    pub fn encode(&self) -> String {
        match self {
            Self::Launch(game) => game.clone(),
            Self::SetFavorite(game) => format!("{FAVORITE_PREFIX}{game}"),
            Self::SetLanguage(code) => format!("{LANGUAGE_PREFIX}{code}"),
        }
    }
}
