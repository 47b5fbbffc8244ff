//! Static catalog of the browser games the bot can launch.

use funbot_core::error::FunbotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// URL returned when a launch names a game that is not in the catalog.
pub const PLACEHOLDER_URL: &str = "#";

/// A game in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Game {
    Snake,
    Saper,
    Tetris,
}

impl Game {
    /// Every catalog game, in menu order.
    pub const ALL: [Game; 3] = [Game::Snake, Game::Saper, Game::Tetris];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Snake => "Snake",
            Self::Saper => "Saper",
            Self::Tetris => "Tetris",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Snake => "\u{1f40d}",
            Self::Saper => "\u{1f4a3}",
            Self::Tetris => "\u{1f9f1}",
        }
    }

    /// Where the game is hosted.
    pub fn launch_url(&self) -> &'static str {
        match self {
            Self::Snake => "https://telegram-snake.vercel.app/",
            Self::Saper => "https://telegram-saper.vercel.app/",
            Self::Tetris => "https://telegram-tetris-indol.vercel.app/",
        }
    }

    /// Button label, e.g. "🐍 Snake".
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji(), self.name())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Game {
    type Err = FunbotError;

    /// Exact, case-sensitive match on the catalog name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| FunbotError::InvalidSelection(format!("unknown game '{s}'")))
    }
}

/// Resolve a launch URL by game name, degrading to [`PLACEHOLDER_URL`].
pub fn launch_url(name: &str) -> &'static str {
    name.parse::<Game>()
        .map(|g| g.launch_url())
        .unwrap_or(PLACEHOLDER_URL)
}
