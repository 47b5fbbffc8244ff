//! Per-user progression record.

use crate::achievements::Achievement;
use crate::catalog::Game;
use chrono::{DateTime, Utc};
use funbot_core::error::FunbotError;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::str::FromStr;

/// How many launches the history window keeps.
pub const HISTORY_CAPACITY: usize = 10;

/// Interface language of a user.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Ua,
}

impl Language {
    /// Short code used in callback payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ua => "ua",
        }
    }
}

impl FromStr for Language {
    type Err = FunbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "ua" => Ok(Self::Ua),
            other => Err(FunbotError::InvalidSelection(format!(
                "unknown language '{other}'"
            ))),
        }
    }
}

/// One launch in the history window.
///
/// The name is kept as given, so launches of names outside the catalog
/// are still recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub game: String,
    pub played_at: DateTime<Utc>,
}

/// Chronological window of the most recent launches, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    /// Append an entry, evicting the oldest one once the window is full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() == HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// The last `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<HistoryEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Whether `name` appears anywhere in the window.
    pub fn contains_game(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.game == name)
    }
}

/// Progression record for a single user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub language: Language,
    /// Total launches ever. Not bounded by the history window.
    pub games_played: u64,
    pub history: History,
    pub favorite_game: Option<Game>,
    /// Unlocked achievements in unlock order, without duplicates.
    achievements: Vec<Achievement>,
}

impl Profile {
    /// Count a launch and record it in the history window.
    pub fn record_launch(&mut self, game: &str, at: DateTime<Utc>) {
        self.games_played += 1;
        self.history.push(HistoryEntry {
            game: game.to_string(),
            played_at: at,
        });
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Union `unlocked` into the profile. Returns the ones that were new.
    pub fn grant(&mut self, unlocked: &[Achievement]) -> Vec<Achievement> {
        let mut added = Vec::new();
        for &a in unlocked {
            if !self.achievements.contains(&a) {
                self.achievements.push(a);
                added.push(a);
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_default_profile() {
        let p = Profile::default();
        assert_eq!(p.language, Language::En);
        assert_eq!(p.games_played, 0);
        assert!(p.history.is_empty());
        assert!(p.favorite_game.is_none());
        assert!(p.achievements().is_empty());
    }

    #[test]
    fn test_history_evicts_oldest() {
        let mut h = History::default();
        for i in 0..12u32 {
            h.push(HistoryEntry {
                game: format!("g{i}"),
                played_at: at(i),
            });
        }
        assert_eq!(h.len(), HISTORY_CAPACITY);
        let names: Vec<_> = h.iter().map(|e| e.game.as_str()).collect();
        assert_eq!(names.first(), Some(&"g2"));
        assert_eq!(names.last(), Some(&"g11"));
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let mut h = History::default();
        for (i, g) in ["Snake", "Saper", "Tetris", "Snake"].iter().enumerate() {
            h.push(HistoryEntry {
                game: g.to_string(),
                played_at: at(i as u32),
            });
        }
        let recent: Vec<_> = h.recent(3).into_iter().map(|e| e.game).collect();
        assert_eq!(recent, vec!["Saper", "Tetris", "Snake"]);
        assert_eq!(h.recent(10).len(), 4);
    }

    #[test]
    fn test_record_launch_counter_outgrows_window() {
        let mut p = Profile::default();
        for i in 0..15u32 {
            p.record_launch("Snake", at(i));
        }
        assert_eq!(p.games_played, 15);
        assert_eq!(p.history.len(), HISTORY_CAPACITY);
    }

    #[test]
    fn test_grant_is_union() {
        let mut p = Profile::default();
        let added = p.grant(&[Achievement::VarietyPlayer]);
        assert_eq!(added, vec![Achievement::VarietyPlayer]);
        let added = p.grant(&[Achievement::VarietyPlayer, Achievement::GameExplorer]);
        assert_eq!(added, vec![Achievement::GameExplorer]);
        assert_eq!(
            p.achievements(),
            &[Achievement::VarietyPlayer, Achievement::GameExplorer]
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ua".parse::<Language>().unwrap(), Language::Ua);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::Ua.code(), "ua");
    }
}
