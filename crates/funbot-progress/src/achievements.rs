//! Achievement definitions and unlock checks.
//!
//! Checks are pure: they look at a profile and report which achievements
//! qualify but are not yet unlocked. Merging the result is the caller's job.

use crate::catalog::Game;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};

/// Launches needed for [`Achievement::GameExplorer`].
pub const EXPLORER_THRESHOLD: u64 = 10;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Ten or more launches in total.
    GameExplorer,
    /// Every catalog game present in the current history window.
    VarietyPlayer,
}

impl Achievement {
    /// Every achievement, in evaluation order.
    pub const ALL: [Achievement; 2] = [Achievement::GameExplorer, Achievement::VarietyPlayer];

    /// Stable tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::GameExplorer => "Game Explorer",
            Self::VarietyPlayer => "Variety Player",
        }
    }

    /// Tag with its badge emoji, as shown on the profile.
    pub fn badge(&self) -> String {
        let icon = match self {
            Self::GameExplorer => "\u{1f389}",
            Self::VarietyPlayer => "\u{1f504}",
        };
        format!("{icon} {}", self.tag())
    }

    fn qualifies(&self, profile: &Profile) -> bool {
        match self {
            Self::GameExplorer => profile.games_played >= EXPLORER_THRESHOLD,
            // Window-based: older plays evicted from history no longer count.
            Self::VarietyPlayer => Game::ALL
                .iter()
                .all(|g| profile.history.contains_game(g.name())),
        }
    }
}

/// Achievements that `profile` qualifies for but has not unlocked yet.
pub fn evaluate(profile: &Profile) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| !profile.has_achievement(*a) && a.qualifies(profile))
        .collect()
}
